use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionTargets};
use crate::filter::Filterable;
use crate::model::Record;

/// Total questions per assessment, used for the progress column.
pub const QUESTIONS_PER_ASSESSMENT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Student Submission")]
    StudentSubmission,
    Absent,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 4] = [
        SubmissionStatus::Completed,
        SubmissionStatus::InProgress,
        SubmissionStatus::StudentSubmission,
        SubmissionStatus::Absent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Completed => "Completed",
            SubmissionStatus::InProgress => "In Progress",
            SubmissionStatus::StudentSubmission => "Student Submission",
            SubmissionStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One examinee's participation record within one assessment.
///
/// `login` and `start` are absent until the examinee logs in or starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub assessment_id: String,
    pub username: String,
    pub full_name: String,
    pub area: String,
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    pub questions_synced: u32,
    /// Minutes.
    pub time_elapsed: u32,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubmissionField {
    Area,
    Group,
    Status,
    /// Free-text search over username and full name.
    Examinee,
}

impl Filterable for Submission {
    type Field = SubmissionField;

    const FACETS: &'static [SubmissionField] = &[
        SubmissionField::Area,
        SubmissionField::Group,
        SubmissionField::Status,
    ];

    fn field_value(&self, field: SubmissionField) -> Option<&str> {
        match field {
            SubmissionField::Area => Some(self.area.as_str()),
            SubmissionField::Group => Some(self.group.as_str()),
            SubmissionField::Status => Some(self.status.as_str()),
            SubmissionField::Examinee => None,
        }
    }

    fn search_targets(&self, field: SubmissionField) -> Vec<&str> {
        match field {
            SubmissionField::Examinee => vec![self.username.as_str(), self.full_name.as_str()],
            _ => Vec::new(),
        }
    }
}

impl Record for Submission {
    type Status = SubmissionStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> SubmissionStatus {
        self.status
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }

    fn target_status(action: Action, targets: &ActionTargets) -> Option<SubmissionStatus> {
        match action {
            Action::ResetTimer => Some(targets.reset_timer),
            Action::RestartSession => Some(targets.restart_session),
            Action::SwitchToPaper => Some(targets.switch_to_paper),
            Action::Sync => None,
        }
    }
}
