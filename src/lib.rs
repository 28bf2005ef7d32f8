//! Risk Appetite - Assessment engine for financial advisory
//!
//! This crate implements a weighted questionnaire classifier that maps a
//! respondent's answers to one of six ordered risk-profile tiers, each
//! carrying a recommended asset allocation and product list.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
