//! Small display helpers shared by the screens.
//!
//! - Toasts for action outcomes.
//! - Badge classes and labels for statuses, progress and elapsed time.

use common::action::{Notification, NotificationKind};
use common::model::submission::QUESTIONS_PER_ASSESSMENT;
use common::model::{AssessmentStatus, SessionHealth, SubmissionStatus};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 3000;

/// Shows `notification` as a toast at the bottom of the page. The toast
/// removes itself after a few seconds.
pub fn show_toast(notification: &Notification) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name(toast_class(notification.kind));
    toast.set_text_content(Some(&notification.message));
    let toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

pub fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Error => "toast toast-error",
    }
}

pub fn assessment_badge(status: AssessmentStatus) -> &'static str {
    match status {
        AssessmentStatus::Pending => "badge badge-pending",
        AssessmentStatus::InProgress => "badge badge-progress",
        AssessmentStatus::Completed => "badge badge-completed",
        AssessmentStatus::Synced => "badge badge-synced",
    }
}

pub fn submission_badge(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Completed => "badge badge-completed",
        SubmissionStatus::InProgress => "badge badge-progress",
        SubmissionStatus::StudentSubmission => "badge badge-submitted",
        SubmissionStatus::Absent => "badge badge-absent",
    }
}

pub fn health_badge(health: SessionHealth) -> &'static str {
    match health {
        SessionHealth::Good => "badge badge-completed",
        SessionHealth::Warning => "badge badge-pending",
        SessionHealth::Critical => "badge badge-absent",
    }
}

pub fn progress_label(questions_synced: u32) -> String {
    format!("{} / {} questions", questions_synced, QUESTIONS_PER_ASSESSMENT)
}

pub fn elapsed_label(minutes: u32) -> String {
    format!("{} min", minutes)
}
