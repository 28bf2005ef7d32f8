//! The validated, immutable question catalog.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::CatalogError;

use super::defaults;
use super::question::{Question, QuestionId};

/// An immutable collection of weighted questions.
///
/// Validated once at construction: ids must be unique, every question
/// well-formed, and the catalog non-empty. The catalog is owned by the
/// caller and passed explicitly into the classifier; the scoring code
/// never consults global state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Creates a catalog from a list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::EmptyQuestionCatalog);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId(question.id.value()));
            }
            question
                .validate()
                .map_err(|source| CatalogError::InvalidQuestion {
                    question: question.id.value(),
                    source,
                })?;
        }

        Ok(Self { questions })
    }

    /// Parses a catalog from YAML, then validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
        Self::new(questions)
    }

    /// The standard question battery, cached for the process lifetime.
    pub fn standard() -> &'static Self {
        defaults::standard_questions()
    }

    /// Returns the questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by id.
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog is empty. Construction forbids this, but the
    /// scorer still guards its division.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The maximum possible weighted total for this catalog.
    ///
    /// Depends only on the weights, never on any answer set: a
    /// hypothetical perfect answer to every question. This is what makes
    /// missing answers lower the percentage rather than being excluded.
    pub fn max_possible_score(&self) -> u32 {
        self.questions.iter().map(Question::max_weighted_score).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Category, QuestionKind, QuestionOption};

    fn question(id: u16, weight: u32) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {}", id),
            Category::RiskTolerance,
            QuestionKind::Radio {
                options: vec![QuestionOption::new("yes", "Yes", 10).unwrap()],
            },
            weight,
        )
        .unwrap()
    }

    #[test]
    fn catalog_rejects_empty_list() {
        let result = QuestionCatalog::new(vec![]);
        assert!(matches!(result, Err(CatalogError::EmptyQuestionCatalog)));
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let result = QuestionCatalog::new(vec![question(1, 2), question(1, 3)]);
        assert!(matches!(result, Err(CatalogError::DuplicateQuestionId(1))));
    }

    #[test]
    fn catalog_max_possible_score_sums_weighted_maxima() {
        let catalog = QuestionCatalog::new(vec![question(1, 2), question(2, 3)]).unwrap();
        // 10*2 + 10*3
        assert_eq!(catalog.max_possible_score(), 50);
    }

    #[test]
    fn catalog_get_finds_question_by_id() {
        let catalog = QuestionCatalog::new(vec![question(1, 2), question(2, 3)]).unwrap();
        assert!(catalog.get(QuestionId::new(2)).is_some());
        assert!(catalog.get(QuestionId::new(9)).is_none());
    }

    #[test]
    fn catalog_parses_from_yaml() {
        let yaml = r#"
- id: 1
  prompt: "What is your age?"
  category: financial_capacity
  kind: slider
  min: 18.0
  max: 70.0
  initial: 30.0
  weight: 3
- id: 2
  prompt: "How long will you stay invested?"
  category: time_horizon
  kind: radio
  options:
    - value: short
      label: "Under a year"
      score: 1
    - value: long
      label: "Over ten years"
      score: 10
  weight: 3
"#;
        let catalog = QuestionCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.max_possible_score(), 60);
    }

    #[test]
    fn catalog_yaml_rejects_invalid_question() {
        let yaml = r#"
- id: 1
  prompt: "Over-scored option"
  category: knowledge
  kind: radio
  options:
    - value: bad
      label: "Bad"
      score: 11
  weight: 1
"#;
        let result = QuestionCatalog::from_yaml_str(yaml);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidQuestion { question: 1, .. })
        ));
    }

    #[test]
    fn standard_catalog_is_valid_and_stable() {
        let catalog = QuestionCatalog::standard();
        assert!(!catalog.is_empty());
        // Max score is a pure function of the weights.
        assert_eq!(
            catalog.max_possible_score(),
            QuestionCatalog::standard().max_possible_score()
        );
    }
}
