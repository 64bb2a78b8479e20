//! Building blocks shared by the two list screens.

mod filters;
mod grouped_view;
mod pagination;
mod status;
mod tree_dropdown;

pub use filters::{search_filter, select_filter};
pub use grouped_view::GroupedView;
pub use pagination::PaginationFooter;
pub use status::{empty_state, error_panel, loading_indicator};
pub use tree_dropdown::GroupTreeDropdown;
