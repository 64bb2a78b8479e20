//! Interleavings of concurrent actions against a screen, driven by a data
//! source whose round-trips settle only when the test releases them.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use common::action::{Action, ActionExecutor, ActionTargets, Notification, NotificationKind};
use common::data_source::DataSource;
use common::error::DataSourceError;
use common::model::{Assessment, AssessmentField, AssessmentStatus, StudentDetails, Submission, SubmissionStatus};
use common::pagination::Pagination;
use common::screen::{ListScreen, Liveness, ScreenView};

type Reply = oneshot::Sender<Result<(), DataSourceError>>;

#[derive(Default)]
struct GatedSource {
    pending: RefCell<Vec<(String, Reply)>>,
}

impl GatedSource {
    fn pending_ids(&self) -> Vec<String> {
        self.pending.borrow().iter().map(|(id, _)| id.clone()).collect()
    }

    fn release(&self, id: &str, result: Result<(), DataSourceError>) {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .position(|(pending_id, _)| pending_id == id)
            .unwrap_or_else(|| panic!("no round-trip pending for {id}"));
        let (_, reply) = pending.remove(index);
        reply.send(result).unwrap();
    }
}

impl DataSource for GatedSource {
    async fn fetch_assessments(&self) -> Result<Vec<Assessment>, DataSourceError> {
        Ok(Vec::new())
    }

    async fn fetch_assessment(&self, _id: &str) -> Result<Option<Assessment>, DataSourceError> {
        Ok(None)
    }

    async fn fetch_submissions(&self, _assessment_id: &str) -> Result<Vec<Submission>, DataSourceError> {
        Ok(Vec::new())
    }

    async fn fetch_student_details(
        &self,
        _assessment_id: &str,
        submission_id: &str,
    ) -> Result<StudentDetails, DataSourceError> {
        Err(DataSourceError::NotFound(submission_id.to_string()))
    }

    async fn perform(&self, _action: Action, id: &str) -> Result<(), DataSourceError> {
        let (reply, settled) = oneshot::channel();
        self.pending.borrow_mut().push((id.to_string(), reply));
        settled
            .await
            .unwrap_or_else(|_| Err(DataSourceError::LoadFailed("round-trip dropped".into())))
    }
}

fn assessment(id: &str, status: AssessmentStatus) -> Assessment {
    let day = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    Assessment {
        id: id.to_string(),
        area: "Science".to_string(),
        program: "Physics".to_string(),
        course: "Mechanics".to_string(),
        name: format!("Assessment {id}"),
        start_date: day,
        end_date: day,
        status,
    }
}

fn examinee(id: &str, status: SubmissionStatus) -> Submission {
    Submission {
        id: id.to_string(),
        assessment_id: "1".to_string(),
        username: format!("user.{id}"),
        full_name: format!("User {id}"),
        area: "Science".to_string(),
        group: "Physics".to_string(),
        login: None,
        start: None,
        questions_synced: 0,
        time_elapsed: 0,
        status,
    }
}

/// A loaded screen plus everything needed to launch actions the way the UI
/// does it.
struct Harness<R: common::model::Record> {
    pool: LocalPool,
    source: Rc<GatedSource>,
    executor: ActionExecutor<GatedSource>,
    screen: Rc<RefCell<ListScreen<R>>>,
    notifications: Rc<RefCell<Vec<Notification>>>,
    alive: Liveness,
}

impl<R: common::model::Record + 'static> Harness<R> {
    fn new(items: Vec<R>) -> Self {
        let source = Rc::new(GatedSource::default());
        let mut screen = ListScreen::new(Pagination::new(vec![10, 25], 10).unwrap());
        let ticket = screen.begin_load();
        assert!(screen.finish_load(ticket, Ok(items)));
        Self {
            pool: LocalPool::new(),
            executor: ActionExecutor::new(Rc::clone(&source), ActionTargets::default()),
            source,
            screen: Rc::new(RefCell::new(screen)),
            notifications: Rc::default(),
            alive: Liveness::new(),
        }
    }

    fn trigger(&mut self, action: Action, id: &str) -> bool {
        if !self.screen.borrow_mut().begin_action(action, id) {
            return false;
        }
        self.launch(action, id.to_string());
        true
    }

    fn launch(&mut self, action: Action, id: String) {
        let executor = self.executor.clone();
        let screen = Rc::clone(&self.screen);
        let notifications = Rc::clone(&self.notifications);
        let alive = self.alive.clone();
        self.pool
            .spawner()
            .spawn_local(async move {
                let outcome = executor.perform::<R>(action, id).await;
                if alive.is_alive() {
                    let notification = screen.borrow_mut().settle_action(outcome);
                    notifications.borrow_mut().push(notification);
                }
            })
            .unwrap();
        self.pool.run_until_stalled();
    }

    fn release(&mut self, id: &str, result: Result<(), DataSourceError>) {
        self.source.release(id, result);
        self.pool.run_until_stalled();
    }

    fn status_of(&self, id: &str) -> R::Status {
        let screen = self.screen.borrow();
        screen.items().iter().find(|r| r.id() == id).unwrap().status()
    }
}

fn transient(action: Action) -> DataSourceError {
    DataSourceError::SimulatedTransientFailure {
        action,
        message: "Sync failed - server unavailable".to_string(),
    }
}

#[test]
fn pending_sync_marks_only_its_own_row_busy() {
    let mut h = Harness::new(vec![
        assessment("A1", AssessmentStatus::Pending),
        assessment("A2", AssessmentStatus::InProgress),
    ]);

    assert!(h.trigger(Action::Sync, "A1"));
    {
        let screen = h.screen.borrow();
        assert!(screen.is_busy("A1"));
        assert!(!screen.is_busy("A2"));
    }
    assert_eq!(h.status_of("A1"), AssessmentStatus::Pending);

    h.release("A1", Ok(()));
    assert_eq!(h.status_of("A1"), AssessmentStatus::Synced);
    assert_eq!(h.status_of("A2"), AssessmentStatus::InProgress);
    assert!(h.screen.borrow().in_flight().is_empty());
    assert_eq!(h.notifications.borrow()[0], Notification::success("Sync completed"));
}

#[test]
fn repeated_trigger_while_busy_is_a_no_op() {
    let mut h = Harness::new(vec![assessment("A1", AssessmentStatus::Pending)]);

    assert!(h.trigger(Action::Sync, "A1"));
    assert!(!h.trigger(Action::Sync, "A1"));
    assert_eq!(h.source.pending_ids(), vec!["A1".to_string()]);
    assert_eq!(h.screen.borrow().in_flight().len(), 1);

    h.release("A1", Ok(()));
    assert_eq!(h.notifications.borrow().len(), 1);
    assert_eq!(h.status_of("A1"), AssessmentStatus::Synced);
}

#[test]
fn faster_action_settles_first_without_disturbing_the_slower_one() {
    let mut h = Harness::new(vec![
        examinee("S1", SubmissionStatus::Absent),
        examinee("S2", SubmissionStatus::StudentSubmission),
    ]);

    assert!(h.trigger(Action::ResetTimer, "S1"));
    assert!(h.trigger(Action::SwitchToPaper, "S2"));

    h.release("S2", Ok(()));
    assert_eq!(h.status_of("S2"), SubmissionStatus::InProgress);
    assert_eq!(h.status_of("S1"), SubmissionStatus::Absent);
    assert!(h.screen.borrow().is_busy("S1"));
    assert!(!h.screen.borrow().is_busy("S2"));

    h.release("S1", Ok(()));
    assert_eq!(h.status_of("S1"), SubmissionStatus::InProgress);
    assert!(h.screen.borrow().in_flight().is_empty());
}

#[test]
fn failure_leaves_status_unchanged_and_clears_busy() {
    let mut h = Harness::new(vec![assessment("A1", AssessmentStatus::Completed)]);

    assert!(h.trigger(Action::Sync, "A1"));
    h.release("A1", Err(transient(Action::Sync)));

    assert_eq!(h.status_of("A1"), AssessmentStatus::Completed);
    assert!(!h.screen.borrow().is_busy("A1"));
    let notifications = h.notifications.borrow();
    assert_eq!(notifications[0].kind, NotificationKind::Error);
    assert_eq!(notifications[0].message, "Sync failed - server unavailable");
}

#[test]
fn action_can_be_retried_after_failure() {
    let mut h = Harness::new(vec![examinee("S1", SubmissionStatus::Absent)]);

    assert!(h.trigger(Action::RestartSession, "S1"));
    h.release("S1", Err(transient(Action::RestartSession)));
    assert!(h.trigger(Action::RestartSession, "S1"));
    h.release("S1", Ok(()));

    assert_eq!(h.status_of("S1"), SubmissionStatus::InProgress);
}

#[test]
fn bulk_sync_starts_independent_actions_for_eligible_rows() {
    let mut h = Harness::new(vec![
        assessment("A1", AssessmentStatus::Pending),
        assessment("A2", AssessmentStatus::Synced),
        assessment("A3", AssessmentStatus::Completed),
        assessment("A4", AssessmentStatus::InProgress),
    ]);
    assert!(h.trigger(Action::Sync, "A4"));

    let started = h
        .screen
        .borrow_mut()
        .begin_bulk(Action::Sync, |a| a.status != AssessmentStatus::Synced);
    assert_eq!(started, vec!["A1".to_string(), "A3".to_string()]);
    for id in started {
        h.launch(Action::Sync, id);
    }
    assert_eq!(h.screen.borrow().in_flight().len(), 3);

    h.release("A3", Err(transient(Action::Sync)));
    h.release("A1", Ok(()));
    h.release("A4", Ok(()));

    assert_eq!(h.status_of("A1"), AssessmentStatus::Synced);
    assert_eq!(h.status_of("A3"), AssessmentStatus::Completed);
    assert_eq!(h.status_of("A4"), AssessmentStatus::Synced);
    assert!(h.screen.borrow().in_flight().is_empty());
}

#[test]
fn sync_is_rejected_for_examinees_without_a_round_trip() {
    let mut h = Harness::new(vec![examinee("S1", SubmissionStatus::Absent)]);

    assert!(h.trigger(Action::Sync, "S1"));
    assert!(h.source.pending_ids().is_empty());
    assert!(!h.screen.borrow().is_busy("S1"));
    assert_eq!(h.notifications.borrow()[0].kind, NotificationKind::Error);
}

#[test]
fn results_after_teardown_are_dropped() {
    let mut h = Harness::new(vec![assessment("A1", AssessmentStatus::Pending)]);

    assert!(h.trigger(Action::Sync, "A1"));
    h.alive.end();
    h.release("A1", Ok(()));

    assert_eq!(h.status_of("A1"), AssessmentStatus::Pending);
    assert!(h.notifications.borrow().is_empty());
}

#[test]
fn patch_that_empties_the_last_page_pulls_the_page_back() {
    let items = (1..=11)
        .map(|n| assessment(&n.to_string(), AssessmentStatus::Pending))
        .collect();
    let mut h = Harness::new(items);
    {
        let mut screen = h.screen.borrow_mut();
        screen.set_criterion(AssessmentField::Status, "Pending");
        screen.set_page(2);
        assert_eq!(screen.pagination().page(), 2);
    }

    assert!(h.trigger(Action::Sync, "11"));
    h.release("11", Ok(()));

    let screen = h.screen.borrow();
    let ScreenView::Rows(page) = screen.view() else {
        panic!("expected rows");
    };
    assert_eq!(page.page, 1);
    assert_eq!(page.last_page, 1);
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.window.total, 10);
}

#[test]
fn patch_keeps_the_page_while_it_still_has_rows() {
    let items = (1..=12)
        .map(|n| assessment(&n.to_string(), AssessmentStatus::Pending))
        .collect();
    let mut h = Harness::new(items);
    h.screen.borrow_mut().set_criterion(AssessmentField::Status, "Pending");
    h.screen.borrow_mut().set_page(2);

    assert!(h.trigger(Action::Sync, "12"));
    h.release("12", Ok(()));

    let screen = h.screen.borrow();
    assert_eq!(screen.pagination().page(), 2);
    let ScreenView::Rows(page) = screen.view() else {
        panic!("expected rows");
    };
    assert_eq!(page.rows.len(), 1);
}
