use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionTargets};
use crate::filter::Filterable;
use crate::model::Record;

/// Lifecycle of an assessment. Only a sync moves it, and only to `Synced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssessmentStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Synced,
}

impl AssessmentStatus {
    pub const ALL: [AssessmentStatus; 4] = [
        AssessmentStatus::Pending,
        AssessmentStatus::InProgress,
        AssessmentStatus::Completed,
        AssessmentStatus::Synced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentStatus::Pending => "Pending",
            AssessmentStatus::InProgress => "In Progress",
            AssessmentStatus::Completed => "Completed",
            AssessmentStatus::Synced => "Synced",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exam definition with scheduling metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub area: String,
    pub program: String,
    pub course: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: AssessmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssessmentField {
    Area,
    Program,
    Course,
    Name,
    Status,
}

impl Filterable for Assessment {
    type Field = AssessmentField;

    const FACETS: &'static [AssessmentField] = &[
        AssessmentField::Area,
        AssessmentField::Program,
        AssessmentField::Course,
        AssessmentField::Status,
    ];

    fn field_value(&self, field: AssessmentField) -> Option<&str> {
        Some(match field {
            AssessmentField::Area => self.area.as_str(),
            AssessmentField::Program => self.program.as_str(),
            AssessmentField::Course => self.course.as_str(),
            AssessmentField::Name => self.name.as_str(),
            AssessmentField::Status => self.status.as_str(),
        })
    }
}

impl Record for Assessment {
    type Status = AssessmentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> AssessmentStatus {
        self.status
    }

    fn set_status(&mut self, status: AssessmentStatus) {
        self.status = status;
    }

    fn target_status(action: Action, targets: &ActionTargets) -> Option<AssessmentStatus> {
        match action {
            Action::Sync => Some(targets.sync),
            _ => None,
        }
    }
}
