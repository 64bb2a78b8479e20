//! Action executor.
//!
//! An action is one simulated round-trip against one record. The executor
//! performs the round-trip and turns its result into an [`ActionOutcome`]
//! carrying a status patch; it never touches a collection itself. Per-id
//! exclusion and applying the patch belong to the owning screen (see
//! [`crate::screen::ListScreen::begin_action`] and
//! [`crate::screen::ListScreen::settle_action`]).

use std::fmt;
use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::data_source::DataSource;
use crate::error::ActionError;
use crate::model::{AssessmentStatus, Record, SubmissionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Sync,
    ResetTimer,
    RestartSession,
    SwitchToPaper,
}

impl Action {
    /// Remedial actions offered on each examinee row.
    pub const EXAMINEE: [Action; 3] = [
        Action::ResetTimer,
        Action::RestartSession,
        Action::SwitchToPaper,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Sync => "Sync",
            Action::ResetTimer => "Reset Timer",
            Action::RestartSession => "Restart Session",
            Action::SwitchToPaper => "Switch to Paper",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status each action leaves its record in after success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionTargets {
    pub sync: AssessmentStatus,
    pub reset_timer: SubmissionStatus,
    pub restart_session: SubmissionStatus,
    pub switch_to_paper: SubmissionStatus,
}

impl Default for ActionTargets {
    fn default() -> Self {
        // All three remedial actions currently resolve to InProgress.
        Self {
            sync: AssessmentStatus::Synced,
            reset_timer: SubmissionStatus::InProgress,
            restart_session: SubmissionStatus::InProgress,
            switch_to_paper: SubmissionStatus::InProgress,
        }
    }
}

/// Single-field change to one record, produced by a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPatch<S> {
    pub id: String,
    pub status: S,
}

impl<S: Copy> StatusPatch<S> {
    /// Sets the status of the record with this id. Returns `false` when no
    /// record has the id (e.g. the collection was reloaded without it).
    pub fn apply<R: Record<Status = S>>(&self, collection: &mut [R]) -> bool {
        match collection.iter_mut().find(|record| record.id() == self.id) {
            Some(record) => {
                record.set_status(self.status);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome<S> {
    pub action: Action,
    pub id: String,
    pub result: Result<StatusPatch<S>, ActionError>,
}

impl<S> ActionOutcome<S> {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    /// User-facing notification for this outcome.
    pub fn notification(&self) -> Notification {
        match &self.result {
            Ok(_) => Notification::success(format!("{} completed", self.action)),
            Err(err) => Notification::error(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown after an action settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

pub struct ActionExecutor<S> {
    source: Rc<S>,
    targets: ActionTargets,
}

impl<S> Clone for ActionExecutor<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            targets: self.targets.clone(),
        }
    }
}

impl<S: DataSource> ActionExecutor<S> {
    pub fn new(source: Rc<S>, targets: ActionTargets) -> Self {
        Self { source, targets }
    }

    pub fn targets(&self) -> &ActionTargets {
        &self.targets
    }

    /// Runs `action` against record `id` and reports the patch to apply.
    ///
    /// Completes after the data source round-trip settles. Invocations for
    /// different ids are independent futures and may settle in any order.
    pub async fn perform<R: Record>(&self, action: Action, id: String) -> ActionOutcome<R::Status> {
        let Some(status) = R::target_status(action, &self.targets) else {
            warn!("{} requested for {}, which it does not apply to", action, id);
            return ActionOutcome {
                action,
                id,
                result: Err(ActionError::Unsupported { action }),
            };
        };

        let result = match self.source.perform(action, &id).await {
            Ok(()) => {
                info!("{} succeeded for {}", action, id);
                Ok(StatusPatch {
                    id: id.clone(),
                    status,
                })
            }
            Err(err) => {
                warn!("{} failed for {}: {}", action, id, err);
                Err(ActionError::Remote(err))
            }
        };

        ActionOutcome { action, id, result }
    }
}
