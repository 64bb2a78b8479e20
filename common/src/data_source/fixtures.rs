//! Seed data for [`super::MockDataSource`].

use chrono::{DateTime, Utc};

use crate::format::parse_timestamp;
use crate::model::{Assessment, AssessmentStatus, Submission, SubmissionStatus};

// id, name, start, end, program, course, area, status
type AssessmentRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    AssessmentStatus,
);

#[rustfmt::skip]
const ASSESSMENTS: &[AssessmentRow] = &[
    ("1", "Advanced Mathematics Final Exam", "2024-01-15", "2024-01-20", "Computer Science", "Calculus III", "Engineering", AssessmentStatus::Completed),
    ("2", "Database Systems Midterm", "2024-01-22", "2024-01-25", "Information Technology", "Database Management", "Technology", AssessmentStatus::InProgress),
    ("3", "Web Development Project", "2024-01-28", "2024-02-05", "Software Engineering", "Web Technologies", "Technology", AssessmentStatus::Pending),
    ("4", "Business Ethics Final", "2024-02-10", "2024-02-15", "Business Administration", "Business Ethics", "Business", AssessmentStatus::Completed),
    ("5", "Marketing Strategy Exam", "2024-02-18", "2024-02-22", "Marketing", "Strategic Marketing", "Business", AssessmentStatus::InProgress),
    ("6", "Organic Chemistry Lab", "2024-02-25", "2024-03-01", "Chemistry", "Organic Chemistry", "Science", AssessmentStatus::Pending),
    ("7", "Physics Mechanics Final", "2024-03-05", "2024-03-10", "Physics", "Classical Mechanics", "Science", AssessmentStatus::Completed),
    ("8", "Data Structures & Algorithms", "2024-03-12", "2024-03-18", "Computer Science", "Data Structures", "Engineering", AssessmentStatus::InProgress),
    ("9", "Financial Accounting Exam", "2024-03-20", "2024-03-25", "Accounting", "Financial Accounting", "Business", AssessmentStatus::Pending),
    ("10", "Machine Learning Project", "2024-03-28", "2024-04-05", "Artificial Intelligence", "Machine Learning", "Technology", AssessmentStatus::Completed),
    ("11", "Human Anatomy Final", "2024-04-10", "2024-04-15", "Medicine", "Human Anatomy", "Health Sciences", AssessmentStatus::InProgress),
    ("12", "Environmental Science Quiz", "2024-04-18", "2024-04-22", "Environmental Science", "Environmental Studies", "Science", AssessmentStatus::Pending),
    ("13", "Digital Marketing Campaign", "2024-04-25", "2024-05-02", "Digital Marketing", "Digital Campaigns", "Business", AssessmentStatus::Completed),
    ("14", "Software Testing Methods", "2024-05-05", "2024-05-10", "Software Engineering", "Software Testing", "Technology", AssessmentStatus::InProgress),
    ("15", "International Business Law", "2024-05-12", "2024-05-18", "International Business", "Business Law", "Business", AssessmentStatus::Pending),
];

// username, full name, area, group, login, start, questions synced, minutes, status
type RosterRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    u32,
    u32,
    SubmissionStatus,
);

#[rustfmt::skip]
const ROSTER: &[RosterRow] = &[
    ("john.doe", "John Doe", "Engineering", "Computer Science", Some("09:00"), Some("09:05"), 10, 120, SubmissionStatus::Completed),
    ("jane.smith", "Jane Smith", "Technology", "Information Technology", Some("09:10"), Some("09:15"), 7, 90, SubmissionStatus::InProgress),
    ("mike.johnson", "Mike Johnson", "Technology", "Software Engineering", Some("09:20"), None, 0, 0, SubmissionStatus::Absent),
    ("sarah.wilson", "Sarah Wilson", "Business", "Business Administration", Some("09:25"), Some("09:30"), 8, 75, SubmissionStatus::StudentSubmission),
    ("david.brown", "David Brown", "Business", "Marketing", Some("09:35"), Some("09:40"), 10, 110, SubmissionStatus::Completed),
    ("emma.davis", "Emma Davis", "Science", "Chemistry", Some("09:45"), Some("09:50"), 5, 60, SubmissionStatus::InProgress),
    ("alex.taylor", "Alex Taylor", "Science", "Physics", Some("10:00"), Some("10:05"), 10, 95, SubmissionStatus::Completed),
    ("lisa.anderson", "Lisa Anderson", "Engineering", "Computer Science", Some("10:10"), Some("10:15"), 3, 45, SubmissionStatus::InProgress),
    ("tom.martinez", "Tom Martinez", "Business", "Accounting", Some("10:20"), Some("10:25"), 10, 130, SubmissionStatus::Completed),
    ("rachel.garcia", "Rachel Garcia", "Technology", "Artificial Intelligence", Some("10:30"), Some("10:35"), 9, 85, SubmissionStatus::StudentSubmission),
    ("kevin.lee", "Kevin Lee", "Health Sciences", "Medicine", Some("10:40"), Some("10:45"), 6, 70, SubmissionStatus::InProgress),
    ("amanda.white", "Amanda White", "Science", "Environmental Science", Some("10:50"), Some("10:55"), 10, 100, SubmissionStatus::Completed),
    ("chris.rodriguez", "Chris Rodriguez", "Business", "Digital Marketing", Some("11:00"), Some("11:05"), 4, 50, SubmissionStatus::InProgress),
    ("jessica.thompson", "Jessica Thompson", "Technology", "Software Engineering", Some("11:10"), Some("11:15"), 10, 115, SubmissionStatus::Completed),
    ("ryan.clark", "Ryan Clark", "Business", "International Business", Some("11:20"), None, 0, 0, SubmissionStatus::Absent),
];

/// Which roster entries sat which assessment. Assessments not listed have
/// no examinees yet.
const ENROLMENT: &[(&str, &[usize])] = &[
    ("1", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]),
    ("2", &[1, 2, 9, 13]),
    ("5", &[3, 4, 8, 12, 14]),
    ("8", &[0, 7]),
    ("11", &[10]),
    ("14", &[2, 13, 1]),
];

fn timestamp(value: &str) -> DateTime<Utc> {
    parse_timestamp(value).unwrap_or_default()
}

pub fn fixture_assessments() -> Vec<Assessment> {
    ASSESSMENTS
        .iter()
        .map(|&(id, name, start, end, program, course, area, status)| Assessment {
            id: id.to_string(),
            area: area.to_string(),
            program: program.to_string(),
            course: course.to_string(),
            name: name.to_string(),
            start_date: timestamp(start),
            end_date: timestamp(end),
            status,
        })
        .collect()
}

pub fn fixture_submissions() -> Vec<Submission> {
    let mut out = Vec::new();
    for &(assessment_id, members) in ENROLMENT {
        let Some(day) = ASSESSMENTS
            .iter()
            .find(|row| row.0 == assessment_id)
            .map(|row| row.2)
        else {
            continue;
        };
        let at = |time: &str| timestamp(&format!("{}T{}:00Z", day, time));

        for (position, &index) in members.iter().enumerate() {
            let Some(&(username, full_name, area, group, login, start, synced, minutes, status)) =
                ROSTER.get(index)
            else {
                continue;
            };
            out.push(Submission {
                id: format!("{}-{}", assessment_id, position + 1),
                assessment_id: assessment_id.to_string(),
                username: username.to_string(),
                full_name: full_name.to_string(),
                area: area.to_string(),
                group: group.to_string(),
                login: login.map(|t| at(t)),
                start: start.map(|t| at(t)),
                questions_synced: synced,
                time_elapsed: minutes,
                status,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_fixture_timestamp_parses() {
        let epoch = DateTime::<Utc>::default();
        for a in fixture_assessments() {
            assert_ne!(a.start_date, epoch, "{}", a.id);
            assert!(a.end_date >= a.start_date, "{}", a.id);
        }
        for s in fixture_submissions() {
            assert!(s.login.is_some_and(|t| t != epoch), "{}", s.id);
            assert!(s.start.is_none_or(|t| t != epoch), "{}", s.id);
        }
    }

    #[test]
    fn submission_ids_are_unique() {
        let subs = fixture_submissions();
        let ids: HashSet<_> = subs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), subs.len());
        assert_eq!(subs.iter().filter(|s| s.assessment_id == "1").count(), ROSTER.len());
    }
}
