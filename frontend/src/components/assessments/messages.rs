use common::action::ActionOutcome;
use common::error::DataSourceError;
use common::grouping::TreeSelection;
use common::model::{Assessment, AssessmentField, AssessmentStatus};
use common::screen::LoadTicket;

use super::state::ViewMode;

pub enum Msg {
    Load,
    Loaded(LoadTicket, Result<Vec<Assessment>, DataSourceError>),
    SetFilter(AssessmentField, String),
    /// Pick from the group tree dropdown.
    SelectGroup(TreeSelection),
    /// Group opened from the grouped view; also switches back to the table.
    OpenGroup(TreeSelection),
    ClearFilters,
    SetPage(usize),
    SetPageSize(usize),
    SetViewMode(ViewMode),
    Sync(String),
    SyncAll,
    Settled(ActionOutcome<AssessmentStatus>),
    Track(String),
}
