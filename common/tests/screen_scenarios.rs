//! Load, filter and paging behaviour of the list screens.

use chrono::{TimeZone, Utc};
use futures::executor::block_on;

use common::config::{DashboardConfig, FailurePolicy};
use common::data_source::{DataSource, MockDataSource, NoDelay};
use common::grouping::TreeSelection;
use common::model::{Assessment, AssessmentField, AssessmentStatus, Submission, SubmissionField};
use common::pagination::Pagination;
use common::screen::{ListScreen, ScreenView};

fn assessment(id: &str, area: &str, program: &str, status: AssessmentStatus) -> Assessment {
    let day = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    Assessment {
        id: id.to_string(),
        area: area.to_string(),
        program: program.to_string(),
        course: "General".to_string(),
        name: format!("Assessment {id}"),
        start_date: day,
        end_date: day,
        status,
    }
}

fn loaded(items: Vec<Assessment>) -> ListScreen<Assessment> {
    let mut screen = ListScreen::new(Pagination::new(vec![10, 25, 50], 10).unwrap());
    let ticket = screen.begin_load();
    screen.finish_load(ticket, Ok(items));
    screen
}

fn row_ids<'a>(view: &ScreenView<'a, Assessment>) -> Vec<&'a str> {
    match view {
        ScreenView::Rows(page) => page.rows.iter().copied().map(|a| a.id.as_str()).collect(),
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn filtering_by_area_keeps_only_matching_rows() {
    let mut screen = loaded(vec![
        assessment("A1", "Middle East", "Law", AssessmentStatus::Pending),
        assessment("A2", "Europe", "Law", AssessmentStatus::Completed),
    ]);
    screen.set_criterion(AssessmentField::Area, "Europe");
    assert_eq!(row_ids(&screen.view()), vec!["A2"]);
}

#[test]
fn empty_collection_is_no_data_not_an_error() {
    let screen = loaded(Vec::new());
    assert!(matches!(screen.view(), ScreenView::NoData));
}

#[test]
fn excluding_everything_reports_no_matches_with_full_options() {
    let mut screen = loaded(vec![
        assessment("A1", "Middle East", "Law", AssessmentStatus::Pending),
        assessment("A2", "Europe", "Law", AssessmentStatus::Completed),
    ]);
    screen.set_criterion(AssessmentField::Area, "Europe");
    screen.set_criterion(AssessmentField::Status, "Pending");

    match screen.view() {
        ScreenView::Rows(page) => {
            assert!(page.no_matches);
            assert!(page.rows.is_empty());
            assert_eq!(page.window.total, 0);
        }
        other => panic!("expected an empty page, got {other:?}"),
    }
    assert_eq!(screen.options(AssessmentField::Area), ["Europe", "Middle East"]);
    assert_eq!(screen.options(AssessmentField::Status), ["Completed", "Pending"]);
}

#[test]
fn narrowing_filter_resets_to_the_first_page() {
    let mut items: Vec<Assessment> = (1..=20)
        .map(|n| assessment(&format!("E{n}"), "Europe", "Law", AssessmentStatus::Pending))
        .collect();
    items.extend((1..=5).map(|n| assessment(&format!("M{n}"), "Middle East", "Law", AssessmentStatus::Pending)));
    let mut screen = loaded(items);

    screen.set_page(3);
    assert_eq!(screen.pagination().page(), 3);
    assert_eq!(row_ids(&screen.view()).len(), 5);

    screen.set_criterion(AssessmentField::Area, "Middle East");
    assert_eq!(screen.pagination().page(), 1);
    assert_eq!(row_ids(&screen.view()), vec!["M1", "M2", "M3", "M4", "M5"]);
}

#[test]
fn reload_with_fewer_rows_starts_on_the_first_page() {
    let items = (1..=25)
        .map(|n| assessment(&n.to_string(), "Europe", "Law", AssessmentStatus::Pending))
        .collect();
    let mut screen = loaded(items);
    screen.set_page(3);

    let ticket = screen.begin_load();
    let shorter = (1..=4)
        .map(|n| assessment(&n.to_string(), "Europe", "Law", AssessmentStatus::Pending))
        .collect();
    assert!(screen.finish_load(ticket, Ok(shorter)));

    assert_eq!(screen.pagination().page(), 1);
    assert_eq!(row_ids(&screen.view()), vec!["1", "2", "3", "4"]);
}

#[test]
fn page_size_change_keeps_page_when_still_in_range() {
    let items = (1..=60)
        .map(|n| assessment(&n.to_string(), "Europe", "Law", AssessmentStatus::Pending))
        .collect();
    let mut screen = loaded(items);

    screen.set_page(2);
    screen.set_page_size(25).unwrap();
    assert_eq!(screen.pagination().page(), 2);

    screen.set_page(3);
    screen.set_page_size(50).unwrap();
    assert_eq!(screen.pagination().page(), 2);
    assert!(screen.set_page_size(7).is_err());
    assert_eq!(screen.pagination().page_size(), 50);
}

#[test]
fn tree_selection_drives_area_and_program_criteria() {
    let mut screen = loaded(vec![
        assessment("A1", "Europe", "Law", AssessmentStatus::Pending),
        assessment("A2", "Europe", "Medicine", AssessmentStatus::Pending),
        assessment("A3", "Asia", "Law", AssessmentStatus::Pending),
    ]);
    let (area, program) = (AssessmentField::Area, AssessmentField::Program);

    screen.apply_tree_selection(
        &TreeSelection::Inner {
            outer: "Europe".into(),
            inner: "Law".into(),
        },
        area,
        program,
    );
    assert_eq!(row_ids(&screen.view()), vec!["A1"]);

    screen.apply_tree_selection(&TreeSelection::Outer("Europe".into()), area, program);
    assert_eq!(row_ids(&screen.view()), vec!["A1", "A2"]);
    assert_eq!(screen.criteria().get(program), "");

    screen.apply_tree_selection(&TreeSelection::All, area, program);
    assert!(screen.criteria().is_empty());
}

#[test]
fn clear_all_restores_the_unfiltered_list() {
    let mut screen = loaded(vec![
        assessment("A1", "Europe", "Law", AssessmentStatus::Pending),
        assessment("A2", "Asia", "Law", AssessmentStatus::Synced),
    ]);
    screen.set_criterion(AssessmentField::Status, "Synced");
    assert_eq!(row_ids(&screen.view()), vec!["A2"]);
    screen.clear_criteria();
    assert_eq!(row_ids(&screen.view()), vec!["A1", "A2"]);
}

#[test]
fn examinee_screen_searches_fixture_roster() {
    let source = MockDataSource::new(NoDelay, &DashboardConfig::default())
        .with_failures(FailurePolicy::never());
    let mut screen: ListScreen<Submission> =
        ListScreen::new(Pagination::from_config(&DashboardConfig::default().examinees).unwrap());

    let ticket = screen.begin_load();
    let submissions = block_on(source.fetch_submissions("1"));
    assert!(screen.finish_load(ticket, submissions));

    screen.set_criterion(SubmissionField::Examinee, "JOHN");
    match screen.view() {
        ScreenView::Rows(page) => {
            assert!(!page.rows.is_empty());
            assert!(page.rows.iter().all(|s| {
                s.username.to_lowercase().contains("john") || s.full_name.to_lowercase().contains("john")
            }));
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn forced_load_failure_surfaces_message() {
    let failures = FailurePolicy {
        load: 1.0,
        ..FailurePolicy::never()
    };
    let source = MockDataSource::new(NoDelay, &DashboardConfig::default()).with_failures(failures);
    let mut screen: ListScreen<Assessment> = ListScreen::new(Pagination::new(vec![10], 10).unwrap());

    let ticket = screen.begin_load();
    screen.finish_load(ticket, block_on(source.fetch_assessments()));
    assert!(matches!(screen.view(), ScreenView::Failed("Failed to fetch assessments")));
}
