//! Answer types - The respondent's transient input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::{QuestionCatalog, QuestionId};

/// A respondent-supplied value for one question.
///
/// Untagged so a JSON form post maps naturally: numbers become
/// `Number`, strings become `Choice`, arrays become `MultiChoice`.
/// A value of the wrong shape for its question scores zero rather
/// than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Choice(String),
    MultiChoice(Vec<String>),
}

impl AnswerValue {
    /// Whether this counts as a real answer: finite number, non-blank
    /// token, or a selection with at least one non-blank token.
    pub fn is_real(&self) -> bool {
        match self {
            AnswerValue::Number(n) => n.is_finite(),
            AnswerValue::Choice(token) => !token.trim().is_empty(),
            AnswerValue::MultiChoice(tokens) => {
                tokens.iter().any(|t| !t.trim().is_empty())
            }
        }
    }
}

/// A mapping from question id to answer value, supplied per request.
///
/// Not persisted by this component; storage is a collaborator's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous value for the id.
    pub fn insert(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }

    /// Removes an answer.
    pub fn remove(&mut self, id: QuestionId) -> Option<AnswerValue> {
        self.answers.remove(&id)
    }

    /// Looks up the answer for a question.
    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.answers.get(&id)
    }

    /// Number of entries, answered or not.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Counts catalog questions with a real answer.
    ///
    /// Used by callers to gate submission; the scorer itself never
    /// consults completeness.
    pub fn answered_count(&self, catalog: &QuestionCatalog) -> usize {
        catalog
            .questions()
            .iter()
            .filter(|q| self.get(q.id).map(AnswerValue::is_real).unwrap_or(false))
            .count()
    }

    /// Whether every catalog question has a real answer.
    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        self.answered_count(catalog) == catalog.len()
    }
}

impl From<HashMap<QuestionId, AnswerValue>> for AnswerSet {
    fn from(answers: HashMap<QuestionId, AnswerValue>) -> Self {
        Self { answers }
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
