mod student_details;
mod top_sheet;

pub use student_details::student_details_sheet;
