//! Row structs and DTOs.
//!
//! Each submodule contains `FromRow` structs matching the database rows and,
//! where needed, the conversion into the shared views of `finboard_core`.

pub mod category;
pub mod month;
pub mod user;
