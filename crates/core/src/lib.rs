//! Domain vocabulary shared by the server and the client.
//!
//! Holds the fixed category catalog, the month calendar, role names, the
//! wire-level views of a month, and the pure validation and totals logic.
//! Nothing here performs I/O.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod period;
pub mod roles;
pub mod totals;
pub mod types;
