//! The data source contract and its in-memory implementation.
//!
//! Every fetch returns a freshly built snapshot owned by the caller. Actions
//! report only success or failure; the caller turns a success into a status
//! patch on its own copy, so no state is shared between screens or sessions.

mod fixtures;
mod mock;

use std::future::Future;
use std::time::Duration;

use crate::action::Action;
use crate::error::DataSourceError;
use crate::model::{Assessment, StudentDetails, Submission};

pub use fixtures::{fixture_assessments, fixture_submissions};
pub use mock::MockDataSource;

/// Suspends for a simulated network round-trip.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

pub trait DataSource {
    /// All assessments, most recent `start_date` first.
    fn fetch_assessments(&self) -> impl Future<Output = Result<Vec<Assessment>, DataSourceError>>;

    fn fetch_assessment(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Assessment>, DataSourceError>>;

    /// Examinee records of one assessment; an unknown id yields an empty list.
    fn fetch_submissions(
        &self,
        assessment_id: &str,
    ) -> impl Future<Output = Result<Vec<Submission>, DataSourceError>>;

    fn fetch_student_details(
        &self,
        assessment_id: &str,
        submission_id: &str,
    ) -> impl Future<Output = Result<StudentDetails, DataSourceError>>;

    /// Simulated round-trip for `action` on record `id`.
    fn perform(&self, action: Action, id: &str) -> impl Future<Output = Result<(), DataSourceError>>;
}
