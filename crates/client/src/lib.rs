//! Presentation client for the finance dashboard.
//!
//! [`ApiClient`] speaks the HTTP API; [`Dashboard`] holds the view state a
//! front-end renders from (cached years, selection, edit buffer).

pub mod api;
pub mod dashboard;
pub mod error;

pub use api::{ApiClient, SessionUser};
pub use dashboard::Dashboard;
pub use error::ClientError;
