//! UI-independent core of the exam monitoring dashboard.
//!
//! Everything the screens need that is not rendering lives here: the data
//! model, the filter/pagination/grouping engines, the in-flight tracker and
//! action executor, the data source contract with its in-memory mock, and the
//! per-screen controller that ties them together. The crate compiles both
//! natively (where its tests run) and to wasm for the Yew frontend.

pub mod action;
pub mod config;
pub mod data_source;
pub mod error;
pub mod filter;
pub mod format;
pub mod grouping;
pub mod in_flight;
pub mod model;
pub mod pagination;
pub mod route;
pub mod screen;
