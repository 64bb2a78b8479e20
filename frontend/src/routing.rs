//! Browser history integration for [`Route`].

use common::route::Route;
use log::warn;
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Assessments)
}

pub fn push_route(route: &Route) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
        warn!("could not push {}: {:?}", route.path(), err);
    }
}

/// In-app anchor: keeps a real `href` for middle clicks but navigates
/// through `on_navigate` on a plain click.
pub fn route_link(route: Route, class: &'static str, label: Html, on_navigate: &Callback<Route>) -> Html {
    let href = route.path();
    let on_navigate = on_navigate.clone();
    let onclick = Callback::from(move |event: MouseEvent| {
        if event.ctrl_key() || event.meta_key() || event.shift_key() || event.button() != 0 {
            return;
        }
        event.prevent_default();
        on_navigate.emit(route.clone());
    });
    html! {
        <a {class} {href} {onclick}>{ label }</a>
    }
}
