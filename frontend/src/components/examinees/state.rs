use std::rc::Rc;

use common::action::ActionExecutor;
use common::model::{Assessment, StudentDetails, Submission};
use common::pagination::Pagination;
use common::screen::{DetailPanel, ListScreen, Liveness};
use log::warn;

use crate::services::{Services, Source};

/// Title area above the examinee table.
#[derive(Debug, Clone, PartialEq)]
pub enum Header {
    Loading,
    Found(Assessment),
    /// Unknown id or failed lookup; the list still loads.
    Missing,
}

pub struct ExamineeList {
    pub header: Header,
    pub screen: ListScreen<Submission>,
    pub details: DetailPanel<StudentDetails>,
    pub executor: ActionExecutor<Source>,
    pub alive: Liveness,
}

impl ExamineeList {
    pub fn new(services: &Services) -> Self {
        let pagination = Pagination::from_config(&services.config.examinees).unwrap_or_else(|err| {
            warn!("examinee page sizes rejected: {}", err);
            Pagination::default()
        });
        Self {
            header: Header::Loading,
            screen: ListScreen::new(pagination),
            details: DetailPanel::default(),
            executor: ActionExecutor::new(Rc::clone(&services.source), services.config.targets.clone()),
            alive: Liveness::new(),
        }
    }
}
