//! Domain layer containing the pure assessment logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `catalog` - The question catalog: questions, options, categories
//! - `profile` - Risk tiers, asset allocations, and the profile catalog
//! - `scoring` - The classifier: answers in, risk result out

pub mod catalog;
pub mod foundation;
pub mod profile;
pub mod scoring;
