use std::cell::RefCell;
use std::time::Duration;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::fixtures::{fixture_assessments, fixture_submissions};
use super::{DataSource, Delay};
use crate::action::Action;
use crate::config::{DashboardConfig, FailurePolicy, LatencyProfile, LatencyRange};
use crate::error::DataSourceError;
use crate::model::{Assessment, StudentDetails, Submission};

/// In-memory data source with simulated latency and failure injection.
///
/// The backing collections are never mutated; each call hands out a copy.
pub struct MockDataSource<D> {
    assessments: Vec<Assessment>,
    submissions: Vec<Submission>,
    delay: D,
    latency: LatencyProfile,
    failures: FailurePolicy,
    rng: RefCell<StdRng>,
}

impl<D: Delay> MockDataSource<D> {
    /// Fixture data with the latency and failure rates of `config`.
    pub fn new(delay: D, config: &DashboardConfig) -> Self {
        Self::with_data(delay, fixture_assessments(), fixture_submissions())
            .with_latency(config.latency)
            .with_failures(config.failures)
    }

    /// Instant, never failing source over the given collections.
    pub fn with_data(delay: D, assessments: Vec<Assessment>, submissions: Vec<Submission>) -> Self {
        Self {
            assessments,
            submissions,
            delay,
            latency: LatencyProfile::instant(),
            failures: FailurePolicy::never(),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_failures(mut self, failures: FailurePolicy) -> Self {
        self.failures = failures;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RefCell::new(StdRng::seed_from_u64(seed));
        self
    }

    fn latency(&self, range: LatencyRange) -> Duration {
        range.sample(&mut *self.rng.borrow_mut())
    }

    fn fails(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability.clamp(0.0, 1.0))
    }

    async fn round_trip(&self, range: LatencyRange) {
        let duration = self.latency(range);
        self.delay.sleep(duration).await;
    }

    fn load_gate(&self, what: &str) -> Result<(), DataSourceError> {
        if self.fails(self.failures.load) {
            warn!("simulated failure fetching {}", what);
            return Err(DataSourceError::LoadFailed(format!("Failed to fetch {}", what)));
        }
        Ok(())
    }
}

impl<D: Delay> DataSource for MockDataSource<D> {
    async fn fetch_assessments(&self) -> Result<Vec<Assessment>, DataSourceError> {
        self.round_trip(self.latency.fetch_assessments).await;
        self.load_gate("assessments")?;

        let mut snapshot = self.assessments.clone();
        snapshot.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        debug!("fetched {} assessments", snapshot.len());
        Ok(snapshot)
    }

    async fn fetch_assessment(&self, id: &str) -> Result<Option<Assessment>, DataSourceError> {
        self.round_trip(self.latency.fetch_assessment).await;
        Ok(self.assessments.iter().find(|a| a.id == id).cloned())
    }

    async fn fetch_submissions(&self, assessment_id: &str) -> Result<Vec<Submission>, DataSourceError> {
        self.round_trip(self.latency.fetch_submissions).await;
        self.load_gate("submissions")?;

        let snapshot: Vec<Submission> = self
            .submissions
            .iter()
            .filter(|s| s.assessment_id == assessment_id)
            .cloned()
            .collect();
        debug!("fetched {} submissions for {}", snapshot.len(), assessment_id);
        Ok(snapshot)
    }

    async fn fetch_student_details(
        &self,
        assessment_id: &str,
        submission_id: &str,
    ) -> Result<StudentDetails, DataSourceError> {
        self.round_trip(self.latency.student_details).await;
        self.submissions
            .iter()
            .find(|s| s.assessment_id == assessment_id && s.id == submission_id)
            .map(StudentDetails::from_submission)
            .ok_or_else(|| DataSourceError::NotFound(format!("examinee {}", submission_id)))
    }

    async fn perform(&self, action: Action, id: &str) -> Result<(), DataSourceError> {
        self.round_trip(self.latency.for_action(action)).await;
        if self.fails(self.failures.for_action(action)) {
            let message = match action {
                Action::Sync => "Sync failed - server unavailable".to_string(),
                other => format!("{} failed - please try again", other),
            };
            debug!("simulated failure: {} on {}", action, id);
            return Err(DataSourceError::SimulatedTransientFailure { action, message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Resolves at once but remembers what it was asked to wait for.
    #[derive(Clone, Default)]
    struct RecordingDelay(Rc<RefCell<Vec<Duration>>>);

    impl Delay for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.0.borrow_mut().push(duration);
        }
    }

    fn source() -> MockDataSource<RecordingDelay> {
        MockDataSource::new(RecordingDelay::default(), &DashboardConfig::default())
            .with_failures(FailurePolicy::never())
            .with_seed(42)
    }

    #[test]
    fn assessments_come_newest_first() {
        let list = block_on(source().fetch_assessments()).unwrap();
        assert!(!list.is_empty());
        assert!(list.windows(2).all(|w| w[0].start_date >= w[1].start_date));
    }

    #[test]
    fn fetches_are_independent_snapshots() {
        let src = source();
        let mut first = block_on(src.fetch_assessments()).unwrap();
        first[0].name = "changed".to_string();
        let second = block_on(src.fetch_assessments()).unwrap();
        assert_ne!(second[0].name, "changed");
    }

    #[test]
    fn submissions_are_scoped_and_unknown_ids_are_empty() {
        let src = source();
        let rows = block_on(src.fetch_submissions("1")).unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|s| s.assessment_id == "1"));
        assert!(block_on(src.fetch_submissions("nope")).unwrap().is_empty());
    }

    #[test]
    fn waits_within_configured_latency() {
        let delay = RecordingDelay::default();
        let src = MockDataSource::new(delay.clone(), &DashboardConfig::default())
            .with_failures(FailurePolicy::never())
            .with_seed(1);
        block_on(src.perform(Action::Sync, "1")).unwrap();
        block_on(src.fetch_submissions("1")).unwrap();

        let waits = delay.0.borrow();
        assert!(waits[0] >= Duration::from_millis(1500) && waits[0] <= Duration::from_millis(2500));
        assert_eq!(waits[1], Duration::from_millis(500));
    }

    #[test]
    fn failure_policy_is_injectable() {
        let failing = source().with_failures(FailurePolicy::always());
        let err = block_on(failing.perform(Action::ResetTimer, "1")).unwrap_err();
        assert_eq!(
            err,
            DataSourceError::SimulatedTransientFailure {
                action: Action::ResetTimer,
                message: "Reset Timer failed - please try again".to_string()
            }
        );
        assert!(matches!(
            block_on(failing.fetch_assessments()),
            Err(DataSourceError::LoadFailed(_))
        ));
        assert!(block_on(source().perform(Action::Sync, "1")).is_ok());
    }

    #[test]
    fn student_details_are_derived_on_demand() {
        let src = source();
        let rows = block_on(src.fetch_submissions("1")).unwrap();
        let details = block_on(src.fetch_student_details("1", &rows[0].id)).unwrap();
        assert_eq!(details.submission, rows[0]);
        assert!(matches!(
            block_on(src.fetch_student_details("1", "missing")),
            Err(DataSourceError::NotFound(_))
        ));
    }

    #[test]
    fn single_lookup_returns_none_for_unknown_id() {
        let src = source();
        assert!(block_on(src.fetch_assessment("1")).unwrap().is_some());
        assert!(block_on(src.fetch_assessment("404")).unwrap().is_none());
    }
}
