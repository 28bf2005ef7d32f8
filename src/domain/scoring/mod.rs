//! Scoring - The risk classifier and its input/output types.

mod answers;
mod classifier;
mod result;

pub use answers::{AnswerSet, AnswerValue};
pub use classifier::RiskClassifier;
pub use result::{CategoryBreakdown, RiskResult};
