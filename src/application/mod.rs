//! Application layer - The assessment service.
//!
//! Wraps the catalogs and classifier behind one entry point for the
//! adapters.

mod service;

pub use service::{AssessmentService, CompletenessReport};
