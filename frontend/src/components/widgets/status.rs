use yew::prelude::*;

pub fn loading_indicator(message: &'static str) -> Html {
    html! {
        <div class="state state-loading" role="status">
            <span class="spinner"></span>
            <span>{ message }</span>
        </div>
    }
}

/// Load failure with a retry control.
pub fn error_panel(message: &str, on_retry: Callback<MouseEvent>) -> Html {
    html! {
        <div class="state state-error" role="alert">
            <p>{ message }</p>
            <button class="button" onclick={on_retry}>{ "Retry" }</button>
        </div>
    }
}

pub fn empty_state(message: &'static str) -> Html {
    html! {
        <div class="state state-empty">
            <p>{ message }</p>
        </div>
    }
}
