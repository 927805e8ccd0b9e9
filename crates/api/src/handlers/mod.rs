pub mod auth;
pub mod catalog;
pub mod fallback;
pub mod ledger;
pub mod summary;
