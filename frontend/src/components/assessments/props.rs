use common::route::Route;
use yew::prelude::*;

use crate::services::Services;

#[derive(Properties, PartialEq, Clone)]
pub struct AssessmentListProps {
    pub services: Services,
    /// Receives the examinee screen route when an assessment is opened.
    pub on_navigate: Callback<Route>,
}
