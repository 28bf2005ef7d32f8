//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the risk assessment domain.

mod errors;
mod percentage;

pub use errors::{CatalogError, ValidationError};
pub use percentage::Percentage;
