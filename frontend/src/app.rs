use common::config::DashboardConfig;
use common::route::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::assessments::AssessmentList;
use crate::components::examinees::ExamineeList;
use crate::components::widgets::loading_indicator;
use crate::routing::{current_route, push_route, route_link};
use crate::services::{load_config, Services};

pub enum Msg {
    ConfigLoaded(DashboardConfig),
    /// In-app navigation; pushes a history entry.
    Navigate(Route),
    /// Back/forward; the browser already moved.
    Navigated(Route),
}

pub struct App {
    route: Route,
    services: Option<Services>,
    popstate: Option<Closure<dyn Fn(Event)>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_config().await));
        });

        Self {
            route: current_route(),
            services: None,
            popstate: listen_popstate(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.services = Some(Services::new(config));
                true
            }
            Msg::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                push_route(&route);
                self.route = route;
                true
            }
            Msg::Navigated(route) => {
                let changed = route != self.route;
                self.route = route;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        html! {
            <div class="app">
                <nav class="top-bar">
                    { route_link(Route::Assessments, "brand", html! { "Exam Monitor" }, &on_navigate) }
                </nav>
                <main>
                    { self.build_screen(on_navigate) }
                </main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(window)) = (self.popstate.take(), web_sys::window()) {
            window
                .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl App {
    fn build_screen(&self, on_navigate: Callback<Route>) -> Html {
        let Some(services) = self.services.clone() else {
            return loading_indicator("Loading configuration...");
        };
        match &self.route {
            Route::Assessments => html! {
                <AssessmentList {services} {on_navigate} />
            },
            Route::TrackExam { assessment_id } => html! {
                <ExamineeList
                    key={assessment_id.clone()}
                    {services}
                    assessment_id={assessment_id.clone()}
                    {on_navigate}
                />
            },
            Route::NotFound => html! {
                <section class="screen not-found">
                    <h1>{ "Page not found" }</h1>
                    <p>{ "The page you are looking for does not exist." }</p>
                    { route_link(Route::Assessments, "button", html! { "Back to assessments" }, &on_navigate) }
                </section>
            },
        }
    }
}

fn listen_popstate(ctx: &Context<App>) -> Option<Closure<dyn Fn(Event)>> {
    let window = web_sys::window()?;
    let link = ctx.link().clone();
    let listener = Closure::<dyn Fn(Event)>::new(move |_event: Event| {
        link.send_message(Msg::Navigated(current_route()));
    });
    window
        .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}
