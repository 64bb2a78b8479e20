//! Records shown on the dashboard screens.

pub mod assessment;
pub mod student;
pub mod submission;

use std::fmt;

use crate::action::{Action, ActionTargets};
use crate::filter::Filterable;

pub use assessment::{Assessment, AssessmentField, AssessmentStatus};
pub use student::{SessionHealth, StudentDetails, TimelineAction, TimelineEntry};
pub use submission::{Submission, SubmissionField, SubmissionStatus};

/// A listable record with a stable id and a status that actions patch.
pub trait Record: Filterable + Clone {
    type Status: Copy + PartialEq + fmt::Debug;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);

    /// Status a successful `action` leaves this kind of record in, or
    /// `None` if the action does not apply to it.
    fn target_status(action: Action, targets: &ActionTargets) -> Option<Self::Status>;
}
