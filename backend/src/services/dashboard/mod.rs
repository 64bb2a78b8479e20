//! # Dashboard Configuration Service
//!
//! Serves the configuration the browser dashboard starts with: page sizes,
//! simulated latency, failure rates and the status each action resolves to.
//! The frontend falls back to its built-in defaults when this endpoint is
//! unreachable, so the route is read-only and never fails.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the dashboard configuration endpoint.
const API_PATH: &str = "/api/config";

/// Registers `GET /api/config`, answered by `get::process` with the
/// `DashboardConfig` stored as app data.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
