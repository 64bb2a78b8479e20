//! Assessment list screen.
//!
//! Loads every assessment once on mount, then filters, pages and groups the
//! collection locally. Sync actions run as independent tasks; each settles
//! back into the screen through [`Msg::Settled`].

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::AssessmentListProps;
pub use state::AssessmentList;

impl Component for AssessmentList {
    type Message = Msg;
    type Properties = AssessmentListProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        AssessmentList::new(&ctx.props().services)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.alive.end();
    }
}
