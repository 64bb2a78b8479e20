use thiserror::Error;

use crate::action::Action;

/// Failures reported by a [`crate::data_source::DataSource`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataSourceError {
    /// A collection fetch was rejected.
    #[error("{0}")]
    LoadFailed(String),

    /// An action round-trip was rejected by the injected failure policy.
    #[error("{message}")]
    SimulatedTransientFailure { action: Action, message: String },

    #[error("{0} not found")]
    NotFound(String),
}

/// Why an action settled without producing a status patch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// The action has no target status for this kind of record.
    #[error("{action} is not available here")]
    Unsupported { action: Action },

    #[error(transparent)]
    Remote(#[from] DataSourceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page size {size} is not one of {offered:?}")]
    UnsupportedPageSize { size: usize, offered: Vec<usize> },
}

/// Rejections from [`crate::config::DashboardConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a probability between 0 and 1, got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("{screen} offers no page sizes")]
    EmptyPageSizes { screen: &'static str },

    #[error("{screen} default page size {size} is not offered")]
    DefaultPageSizeNotOffered { screen: &'static str, size: usize },

    #[error("latency {name} has min {min_ms}ms above max {max_ms}ms")]
    InvalidLatency {
        name: &'static str,
        min_ms: u64,
        max_ms: u64,
    },
}
