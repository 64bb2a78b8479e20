use common::route::Route;
use yew::prelude::*;

use crate::services::Services;

#[derive(Properties, PartialEq, Clone)]
pub struct ExamineeListProps {
    pub services: Services,
    pub assessment_id: AttrValue,
    pub on_navigate: Callback<Route>,
}
