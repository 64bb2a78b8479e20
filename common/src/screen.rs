//! Per-screen view controller.
//!
//! A [`ListScreen`] owns everything one list screen shows: the load state
//! and full collection, filter criteria, pagination, the option lists for
//! the filter controls, the in-flight set and the selected record. It is a
//! plain synchronous state machine; the hosting component starts the async
//! work and feeds results back through [`ListScreen::finish_load`] and
//! [`ListScreen::settle_action`].

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::action::{Action, ActionOutcome, Notification};
use crate::error::{DataSourceError, PaginationError};
use crate::filter::{filter, option_values, Criteria};
use crate::grouping::TreeSelection;
use crate::in_flight::InFlight;
use crate::model::Record;
use crate::pagination::{PageWindow, Pagination};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<R> {
    Idle,
    Loading,
    Loaded(Vec<R>),
    LoadFailed(String),
}

/// Identifies one load attempt. Results carrying an outdated ticket are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What the screen should render right now.
#[derive(Debug)]
pub enum ScreenView<'a, R> {
    Idle,
    Loading,
    Failed(&'a str),
    /// Loaded, but the data source returned nothing.
    NoData,
    Rows(PageView<'a, R>),
}

#[derive(Debug)]
pub struct PageView<'a, R> {
    pub rows: Vec<&'a R>,
    /// The full collection is non-empty but the criteria exclude everything.
    pub no_matches: bool,
    pub window: PageWindow,
    pub page: usize,
    pub last_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

pub struct ListScreen<R: Record> {
    load: LoadState<R>,
    generation: u64,
    criteria: Criteria<R::Field>,
    pagination: Pagination,
    options: BTreeMap<R::Field, Vec<String>>,
    in_flight: InFlight,
    selected: Option<String>,
}

impl<R: Record> ListScreen<R> {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            load: LoadState::Idle,
            generation: 0,
            criteria: Criteria::new(),
            pagination,
            options: BTreeMap::new(),
            in_flight: InFlight::new(),
            selected: None,
        }
    }

    pub fn state(&self) -> &LoadState<R> {
        &self.load
    }

    /// The full collection; empty unless loaded.
    pub fn items(&self) -> &[R] {
        match &self.load {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Enters `Loading`. Any load still pending is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.load = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Stores the result of the load identified by `ticket`. Returns `false`
    /// when the ticket is stale and the result was discarded.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<R>, DataSourceError>) -> bool {
        if ticket.0 != self.generation || !matches!(self.load, LoadState::Loading) {
            debug!("discarding result of superseded load {}", ticket.0);
            return false;
        }
        match result {
            Ok(items) => {
                info!("loaded {} records", items.len());
                self.load = LoadState::Loaded(items);
                self.pagination.reset();
                self.refresh_options();
            }
            Err(err) => {
                warn!("load failed: {}", err);
                self.load = LoadState::LoadFailed(err.to_string());
            }
        }
        true
    }

    pub fn criteria(&self) -> &Criteria<R::Field> {
        &self.criteria
    }

    pub fn set_criterion(&mut self, field: R::Field, value: impl Into<String>) {
        let value = value.into();
        self.update_criteria(|criteria| criteria.set(field, value));
    }

    pub fn clear_criteria(&mut self) {
        self.update_criteria(Criteria::clear);
    }

    pub fn apply_tree_selection(&mut self, selection: &TreeSelection, outer: R::Field, inner: R::Field) {
        self.update_criteria(|criteria| selection.apply(criteria, outer, inner));
    }

    fn update_criteria(&mut self, change: impl FnOnce(&mut Criteria<R::Field>) -> bool) {
        if change(&mut self.criteria) {
            self.pagination.reset();
        }
    }

    pub fn filtered(&self) -> Vec<&R> {
        filter(self.items(), &self.criteria)
    }

    /// Option list for `field`, derived from the full collection.
    pub fn options(&self, field: R::Field) -> &[String] {
        self.options.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    fn refresh_options(&mut self) {
        let items = self.items();
        let options = R::FACETS
            .iter()
            .map(|&field| (field, option_values(items, field)))
            .collect();
        self.options = options;
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.filtered().len();
        self.pagination.set_page(page, total);
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), PaginationError> {
        let total = self.filtered().len();
        self.pagination.set_page_size(page_size, total)
    }

    pub fn view(&self) -> ScreenView<'_, R> {
        match &self.load {
            LoadState::Idle => ScreenView::Idle,
            LoadState::Loading => ScreenView::Loading,
            LoadState::LoadFailed(message) => ScreenView::Failed(message),
            LoadState::Loaded(items) if items.is_empty() => ScreenView::NoData,
            LoadState::Loaded(items) => {
                let filtered = filter(items, &self.criteria);
                let total = filtered.len();
                ScreenView::Rows(PageView {
                    rows: self.pagination.slice(&filtered).to_vec(),
                    no_matches: total == 0,
                    window: self.pagination.window(total),
                    page: self.pagination.page(),
                    last_page: self.pagination.last_page(total),
                    has_previous: self.pagination.has_previous(),
                    has_next: self.pagination.has_next(total),
                })
            }
        }
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&R> {
        let id = self.selected.as_deref()?;
        self.items().iter().find(|record| record.id() == id)
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.in_flight.is_busy(id)
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Marks `id` busy for `action`. Returns `false`, and the caller must not
    /// start the action, when `id` already has one in flight.
    pub fn begin_action(&mut self, action: Action, id: &str) -> bool {
        if !self.in_flight.begin(id) {
            debug!("{} on {} ignored: another action is in flight", action, id);
            return false;
        }
        debug!("{} on {} started", action, id);
        true
    }

    /// Begins `action` on every record of the current page that `eligible`
    /// accepts and that is not already busy. Returns the ids started.
    pub fn begin_bulk(&mut self, action: Action, eligible: impl Fn(&R) -> bool) -> Vec<String> {
        let candidates: Vec<String> = match self.view() {
            ScreenView::Rows(page) => page
                .rows
                .into_iter()
                .filter(|record| eligible(record))
                .map(|record| record.id().to_string())
                .collect(),
            _ => Vec::new(),
        };
        candidates
            .into_iter()
            .filter(|id| self.begin_action(action, id))
            .collect()
    }

    /// Applies a settled action: patches the record on success, then clears
    /// its busy flag whatever the outcome.
    ///
    /// A patch can move the record out of the active criteria, so the page is
    /// pulled back into range afterwards.
    pub fn settle_action(&mut self, outcome: ActionOutcome<R::Status>) -> Notification {
        let applied = match (&outcome.result, &mut self.load) {
            (Ok(patch), LoadState::Loaded(items)) => patch.apply(items),
            _ => false,
        };
        if applied {
            self.refresh_options();
            let total = self.filtered().len();
            let page = self.pagination.page();
            self.pagination.set_page(page, total);
        } else if outcome.succeeded() {
            debug!("{} on {} settled after the record went away", outcome.action, outcome.id);
        }
        self.in_flight.end(&outcome.id);
        outcome.notification()
    }
}

/// Overlay showing one record's expanded details, fetched on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Closed,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Holds the detail overlay of a screen. Closing it, or opening another
/// record, orphans the pending fetch.
#[derive(Debug)]
pub struct DetailPanel<T> {
    state: DetailState<T>,
    generation: u64,
}

impl<T> Default for DetailPanel<T> {
    fn default() -> Self {
        Self {
            state: DetailState::Closed,
            generation: 0,
        }
    }
}

impl<T> DetailPanel<T> {
    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    pub fn open(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = DetailState::Loading;
        LoadTicket(self.generation)
    }

    pub fn finish(&mut self, ticket: LoadTicket, result: Result<T, DataSourceError>) -> bool {
        if ticket.0 != self.generation || !matches!(self.state, DetailState::Loading) {
            debug!("discarding details for closed overlay");
            return false;
        }
        self.state = match result {
            Ok(details) => DetailState::Loaded(details),
            Err(err) => {
                warn!("details failed: {}", err);
                DetailState::Failed(err.to_string())
            }
        };
        true
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.state = DetailState::Closed;
    }
}

/// Cleared when the owning view is torn down. Async continuations check it
/// before touching view state.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}
