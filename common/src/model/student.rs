use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::submission::{Submission, SubmissionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionHealth {
    Good,
    Warning,
    Critical,
}

impl SessionHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionHealth::Good => "Good",
            SessionHealth::Warning => "Warning",
            SessionHealth::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineAction {
    Login,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub time: DateTime<Utc>,
    pub action: TimelineAction,
}

/// Read-only expanded view of one examinee, built on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub submission: Submission,
    pub email: String,
    pub session_health: SessionHealth,
    pub login_logout_timeline: Vec<TimelineEntry>,
}

impl StudentDetails {
    pub fn from_submission(submission: &Submission) -> Self {
        let session_health = match (submission.status, submission.login, submission.start) {
            (SubmissionStatus::Absent, _, _) => SessionHealth::Critical,
            (_, Some(_), None) => SessionHealth::Warning,
            _ => SessionHealth::Good,
        };

        let mut timeline = Vec::new();
        if let Some(login) = submission.login {
            timeline.push(TimelineEntry {
                time: login,
                action: TimelineAction::Login,
            });
        }
        let finished = matches!(
            submission.status,
            SubmissionStatus::Completed | SubmissionStatus::StudentSubmission
        );
        if let (true, Some(start)) = (finished, submission.start) {
            timeline.push(TimelineEntry {
                time: start + TimeDelta::minutes(i64::from(submission.time_elapsed)),
                action: TimelineAction::Logout,
            });
        }

        Self {
            email: format!("{}@exam.com", submission.username),
            session_health,
            login_logout_timeline: timeline,
            submission: submission.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_timestamp;

    fn submission(status: SubmissionStatus, login: Option<&str>, start: Option<&str>) -> Submission {
        Submission {
            id: "1".to_string(),
            assessment_id: "1".to_string(),
            username: "john.doe".to_string(),
            full_name: "John Doe".to_string(),
            area: "Engineering".to_string(),
            group: "Computer Science".to_string(),
            login: login.and_then(parse_timestamp),
            start: start.and_then(parse_timestamp),
            questions_synced: 10,
            time_elapsed: 120,
            status,
        }
    }

    #[test]
    fn completed_session_has_login_and_logout() {
        let s = submission(
            SubmissionStatus::Completed,
            Some("2024-01-15T09:00:00Z"),
            Some("2024-01-15T09:05:00Z"),
        );
        let details = StudentDetails::from_submission(&s);

        assert_eq!(details.email, "john.doe@exam.com");
        assert_eq!(details.session_health, SessionHealth::Good);
        let actions: Vec<_> = details.login_logout_timeline.iter().map(|e| e.action).collect();
        assert_eq!(actions, vec![TimelineAction::Login, TimelineAction::Logout]);
        assert_eq!(
            details.login_logout_timeline[1].time,
            parse_timestamp("2024-01-15T11:05:00Z").unwrap()
        );
    }

    #[test]
    fn logged_in_but_not_started_is_a_warning() {
        let s = submission(SubmissionStatus::InProgress, Some("2024-01-15T09:00:00Z"), None);
        let details = StudentDetails::from_submission(&s);
        assert_eq!(details.session_health, SessionHealth::Warning);
        assert_eq!(details.login_logout_timeline.len(), 1);
    }

    #[test]
    fn absent_is_critical() {
        let s = submission(SubmissionStatus::Absent, Some("2024-01-15T09:20:00Z"), None);
        assert_eq!(
            StudentDetails::from_submission(&s).session_health,
            SessionHealth::Critical
        );
    }
}
