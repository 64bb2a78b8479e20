use common::pagination::PageWindow;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

#[derive(Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub window: PageWindow,
    pub page: usize,
    pub last_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub page_size: usize,
    pub offered: Vec<usize>,
    pub on_page: Callback<usize>,
    pub on_page_size: Callback<usize>,
}

/// "Showing from-to of count", first/prev/next/last and the size selector.
pub struct PaginationFooter;

impl Component for PaginationFooter {
    type Message = ();
    type Properties = PaginationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PaginationFooter
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let window = props.window;
        let page_button = |label: &'static str, target: usize, enabled: bool| {
            let on_page = props.on_page.clone();
            html! {
                <button
                    class="page-button"
                    disabled={!enabled}
                    onclick={Callback::from(move |_: MouseEvent| on_page.emit(target))}
                >
                    { label }
                </button>
            }
        };
        let on_page_size = props.on_page_size.clone();
        let onchange = Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                on_page_size.emit(size);
            }
        });

        html! {
            <div class="pagination">
                <span class="pagination-summary">
                    { format!("Showing {}-{} of {}", window.from, window.to, window.total) }
                </span>
                <div class="pagination-controls">
                    { page_button("First", 1, props.has_previous) }
                    { page_button("Prev", props.page.saturating_sub(1), props.has_previous) }
                    <span class="page-indicator">{ format!("Page {} of {}", props.page, props.last_page) }</span>
                    { page_button("Next", props.page + 1, props.has_next) }
                    { page_button("Last", props.last_page, props.has_next) }
                </div>
                <label class="page-size">
                    { "Rows per page" }
                    <select {onchange}>
                        { for props.offered.iter().map(|size| html! {
                            <option value={size.to_string()} selected={*size == props.page_size}>{ size.to_string() }</option>
                        }) }
                    </select>
                </label>
            </div>
        }
    }
}
