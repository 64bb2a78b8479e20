use common::format::{format_optional, format_time_of_day, format_timestamp};
use common::model::{StudentDetails, TimelineAction};
use common::screen::DetailState;
use yew::prelude::*;

use super::top_sheet::TopSheet;
use crate::components::widgets::loading_indicator;
use crate::helpers::{elapsed_label, health_badge, progress_label, submission_badge};

/// Student details overlay for the examinee screen.
pub fn student_details_sheet(state: &DetailState<StudentDetails>, on_close: Callback<()>) -> Html {
    let (title, body) = match state {
        DetailState::Closed => (String::new(), Html::default()),
        DetailState::Loading => ("Student details".to_string(), loading_indicator("Loading details...")),
        DetailState::Failed(message) => (
            "Student details".to_string(),
            html! { <p class="state state-error">{ message.clone() }</p> },
        ),
        DetailState::Loaded(details) => (details.submission.full_name.clone(), build_details(details)),
    };
    html! {
        <TopSheet open={!matches!(state, DetailState::Closed)} {title} {on_close}>
            { body }
        </TopSheet>
    }
}

fn build_details(details: &StudentDetails) -> Html {
    let submission = &details.submission;
    html! {
        <div class="student-details">
            <dl class="details-grid">
                <dt>{ "Username" }</dt>
                <dd>{ submission.username.clone() }</dd>
                <dt>{ "Email" }</dt>
                <dd>{ details.email.clone() }</dd>
                <dt>{ "Area" }</dt>
                <dd>{ submission.area.clone() }</dd>
                <dt>{ "Group" }</dt>
                <dd>{ submission.group.clone() }</dd>
                <dt>{ "Login" }</dt>
                <dd>{ format_optional(submission.login.as_ref(), format_timestamp) }</dd>
                <dt>{ "Start" }</dt>
                <dd>{ format_optional(submission.start.as_ref(), format_timestamp) }</dd>
                <dt>{ "Progress" }</dt>
                <dd>{ progress_label(submission.questions_synced) }</dd>
                <dt>{ "Time elapsed" }</dt>
                <dd>{ elapsed_label(submission.time_elapsed) }</dd>
                <dt>{ "Status" }</dt>
                <dd><span class={submission_badge(submission.status)}>{ submission.status.as_str() }</span></dd>
                <dt>{ "Session health" }</dt>
                <dd><span class={health_badge(details.session_health)}>{ details.session_health.as_str() }</span></dd>
            </dl>
            <h3>{ "Activity" }</h3>
            if details.login_logout_timeline.is_empty() {
                <p class="muted">{ "No activity recorded." }</p>
            } else {
                <ol class="timeline">
                    { for details.login_logout_timeline.iter().map(|entry| html! {
                        <li class={classes!("timeline-entry", timeline_class(entry.action))}>
                            <span class="timeline-time">{ format_time_of_day(&entry.time) }</span>
                            <span class="timeline-action">{ timeline_label(entry.action) }</span>
                        </li>
                    }) }
                </ol>
            }
        </div>
    }
}

fn timeline_class(action: TimelineAction) -> &'static str {
    match action {
        TimelineAction::Login => "login",
        TimelineAction::Logout => "logout",
    }
}

fn timeline_label(action: TimelineAction) -> &'static str {
    match action {
        TimelineAction::Login => "Logged in",
        TimelineAction::Logout => "Logged out",
    }
}
