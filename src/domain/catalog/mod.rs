//! Question catalog - The immutable battery of weighted questions.
//!
//! The catalog is defined once (in code or loaded from YAML at startup),
//! validated at construction, and passed explicitly to the classifier.

mod catalog;
mod defaults;
mod question;

pub use catalog::QuestionCatalog;
pub use question::{Category, Question, QuestionId, QuestionKind, QuestionOption};

/// The maximum score a single question can contribute before weighting.
pub const MAX_QUESTION_SCORE: u8 = 10;
