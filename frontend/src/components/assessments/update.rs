use std::rc::Rc;

use common::action::{Action, Notification};
use common::data_source::DataSource;
use common::model::{Assessment, AssessmentField, AssessmentStatus};
use common::route::Route;
use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AssessmentList, ViewMode};
use crate::helpers::show_toast;

pub fn update(component: &mut AssessmentList, ctx: &Context<AssessmentList>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let ticket = component.screen.begin_load();
            let source = Rc::clone(&ctx.props().services.source);
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                let result = source.fetch_assessments().await;
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
        Msg::SelectGroup(selection) => {
            component
                .screen
                .apply_tree_selection(&selection, AssessmentField::Area, AssessmentField::Program);
            true
        }
        Msg::OpenGroup(selection) => {
            component
                .screen
                .apply_tree_selection(&selection, AssessmentField::Area, AssessmentField::Program);
            component.view_mode = ViewMode::Table;
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
        Msg::SetViewMode(mode) => {
            let changed = component.view_mode != mode;
            component.view_mode = mode;
            changed
        }
        Msg::Sync(id) => {
            if !component.screen.begin_action(Action::Sync, &id) {
                return false;
            }
            launch_sync(component, ctx, id);
            true
        }
        Msg::SyncAll => {
            let started = component
                .screen
                .begin_bulk(Action::Sync, |a| a.status != AssessmentStatus::Synced);
            if started.is_empty() {
                show_toast(&Notification::success("Everything on this page is already synced"));
                return false;
            }
            for id in started {
                launch_sync(component, ctx, id);
            }
            true
        }
        Msg::Settled(outcome) => {
            let notification = component.screen.settle_action(outcome);
            show_toast(&notification);
            true
        }
        Msg::Track(assessment_id) => {
            ctx.props().on_navigate.emit(Route::TrackExam { assessment_id });
            false
        }
    }
}

/// Runs one sync for `id`, already marked busy by the caller.
fn launch_sync(component: &AssessmentList, ctx: &Context<AssessmentList>, id: String) {
    let executor = component.executor.clone();
    let link = ctx.link().clone();
    let alive = component.alive.clone();
    spawn_local(async move {
        let outcome = executor.perform::<Assessment>(Action::Sync, id).await;
        if alive.is_alive() {
            link.send_message(Msg::Settled(outcome));
        }
    });
}
