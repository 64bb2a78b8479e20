pub mod assessments;
pub mod examinees;
pub mod widgets;
