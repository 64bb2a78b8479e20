use common::action::{Action, ActionOutcome};
use common::error::DataSourceError;
use common::model::{Assessment, StudentDetails, Submission, SubmissionField, SubmissionStatus};
use common::screen::LoadTicket;

pub enum Msg {
    LoadHeader,
    HeaderLoaded(Result<Option<Assessment>, DataSourceError>),
    Load,
    Loaded(LoadTicket, Result<Vec<Submission>, DataSourceError>),
    SetFilter(SubmissionField, String),
    ClearFilters,
    SetPage(usize),
    SetPageSize(usize),
    Act(Action, String),
    Settled(ActionOutcome<SubmissionStatus>),
    ShowDetails(String),
    DetailsLoaded(LoadTicket, Result<StudentDetails, DataSourceError>),
    CloseDetails,
    Back,
}
