use std::rc::Rc;

use common::action::ActionExecutor;
use common::model::Assessment;
use common::pagination::Pagination;
use common::screen::{ListScreen, Liveness};
use log::warn;

use crate::services::{Services, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Grouped,
}

pub struct AssessmentList {
    pub screen: ListScreen<Assessment>,
    pub executor: ActionExecutor<Source>,
    /// Cleared on unmount so late loads and actions are dropped.
    pub alive: Liveness,
    pub view_mode: ViewMode,
}

impl AssessmentList {
    pub fn new(services: &Services) -> Self {
        let pagination = Pagination::from_config(&services.config.assessments).unwrap_or_else(|err| {
            warn!("assessment page sizes rejected: {}", err);
            Pagination::default()
        });
        Self {
            screen: ListScreen::new(pagination),
            executor: ActionExecutor::new(Rc::clone(&services.source), services.config.targets.clone()),
            alive: Liveness::new(),
            view_mode: ViewMode::Table,
        }
    }
}
