//! Examinee list of one assessment, with remedial actions and the student
//! details overlay.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::ExamineeListProps;
pub use state::ExamineeList;

impl Component for ExamineeList {
    type Message = Msg;
    type Properties = ExamineeListProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message_batch(vec![Msg::LoadHeader, Msg::Load]);
        ExamineeList::new(&ctx.props().services)
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
