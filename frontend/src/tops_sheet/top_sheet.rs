use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Sheet sliding down over the page, closed by its button or the backdrop.
pub struct TopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        TopSheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        html! {
            <>
                if props.open {
                    <div class="top-sheet-backdrop" onclick={close.clone()}></div>
                }
                <div class={classes!("top-sheet", props.open.then_some("show"))} aria-hidden={(!props.open).to_string()}>
                    <header class="top-sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="icon-btn" title="Close" onclick={close}>{ "x" }</button>
                    </header>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </>
        }
    }
}
