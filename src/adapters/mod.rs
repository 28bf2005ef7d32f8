//! Adapters - Surfaces that expose the assessment engine.
//!
//! - `http` - REST API over axum

pub mod http;
