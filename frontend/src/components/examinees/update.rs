use std::rc::Rc;

use common::action::Action;
use common::data_source::DataSource;
use common::model::Submission;
use common::route::Route;
use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ExamineeList, Header};
use crate::helpers::show_toast;

pub fn update(component: &mut ExamineeList, ctx: &Context<ExamineeList>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::LoadHeader => {
            let source = Rc::clone(&props.services.source);
            let assessment_id = props.assessment_id.to_string();
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                let result = source.fetch_assessment(&assessment_id).await;
                if alive.is_alive() {
                    link.send_message(Msg::HeaderLoaded(result));
                }
            });
            false
        }
        Msg::HeaderLoaded(result) => {
            component.header = match result {
                Ok(Some(assessment)) => Header::Found(assessment),
                Ok(None) => Header::Missing,
                Err(err) => {
                    warn!("assessment header unavailable: {}", err);
                    Header::Missing
                }
            };
            true
        }
        Msg::Load => {
            let ticket = component.screen.begin_load();
            let source = Rc::clone(&props.services.source);
            let assessment_id = props.assessment_id.to_string();
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                let result = source.fetch_submissions(&assessment_id).await;
                if alive.is_alive() {
                    link.send_message(Msg::Loaded(ticket, result));
                }
            });
            true
        }
        Msg::Loaded(ticket, result) => component.screen.finish_load(ticket, result),
        Msg::SetFilter(field, value) => {
            component.screen.set_criterion(field, value);
            true
        }
        Msg::ClearFilters => {
            component.screen.clear_criteria();
            true
        }
        Msg::SetPage(page) => {
            component.screen.set_page(page);
            true
        }
        Msg::SetPageSize(size) => {
            if let Err(err) = component.screen.set_page_size(size) {
                warn!("{}", err);
                return false;
            }
            true
        }
        Msg::Act(action, id) => {
            if !component.screen.begin_action(action, &id) {
                return false;
            }
            let executor = component.executor.clone();
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                let outcome = executor.perform::<Submission>(action, id).await;
                if alive.is_alive() {
                    link.send_message(Msg::Settled(outcome));
                }
            });
            true
        }
        Msg::Settled(outcome) => {
            let notification = component.screen.settle_action(outcome);
            show_toast(&notification);
            true
        }
        Msg::ShowDetails(submission_id) => {
            component.screen.select(submission_id.clone());
            let ticket = component.details.open();
            let source = Rc::clone(&props.services.source);
            let assessment_id = props.assessment_id.to_string();
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                let result = source.fetch_student_details(&assessment_id, &submission_id).await;
                if alive.is_alive() {
                    link.send_message(Msg::DetailsLoaded(ticket, result));
                }
            });
            true
        }
        Msg::DetailsLoaded(ticket, result) => component.details.finish(ticket, result),
        Msg::CloseDetails => {
            component.details.close();
            component.screen.close_detail();
            true
        }
        Msg::Back => {
            props.on_navigate.emit(Route::Assessments);
            false
        }
    }
}
