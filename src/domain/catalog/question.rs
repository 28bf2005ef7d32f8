//! Question types - Catalog entries, options, and the category taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::MAX_QUESTION_SCORE;

/// Ordinal identifier for a catalog question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(u16);

impl QuestionId {
    /// Creates a new question id.
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw ordinal value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category a question contributes to.
///
/// Every question carries an explicit category so results can surface
/// per-category sub-scores alongside the grand total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Willingness to accept portfolio swings.
    RiskTolerance,
    /// Ability to absorb losses: income, savings, dependents.
    FinancialCapacity,
    /// How long the money stays invested.
    TimeHorizon,
    /// Familiarity with investment products.
    Knowledge,
}

impl Category {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::RiskTolerance => "Risk Tolerance",
            Category::FinancialCapacity => "Financial Capacity",
            Category::TimeHorizon => "Time Horizon",
            Category::Knowledge => "Knowledge",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A selectable option on a radio or checkbox question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Opaque value token submitted by the form.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Score contributed when selected (0-10).
    pub score: u8,
}

impl QuestionOption {
    /// Creates a new option, validating the score range.
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        score: u8,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("option value"));
        }
        if score > MAX_QUESTION_SCORE {
            return Err(ValidationError::out_of_range(
                "option score",
                0.0,
                MAX_QUESTION_SCORE as f64,
                score as f64,
            ));
        }
        Ok(Self {
            value,
            label: label.into(),
            score,
        })
    }
}

/// Input kind of a question, with kind-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Numeric range input. Currently used only for age; slider values
    /// are scored through the fixed age band table.
    Slider { min: f64, max: f64, initial: f64 },
    /// Single-choice set.
    Radio { options: Vec<QuestionOption> },
    /// Multi-select set (reserved). Selected scores are summed and
    /// capped at the per-question maximum.
    Checkbox { options: Vec<QuestionOption> },
}

impl QuestionKind {
    /// Returns the options of a radio or checkbox question.
    pub fn options(&self) -> Option<&[QuestionOption]> {
        match self {
            QuestionKind::Slider { .. } => None,
            QuestionKind::Radio { options } | QuestionKind::Checkbox { options } => {
                Some(options)
            }
        }
    }
}

/// Immutable catalog entry: a weighted question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub category: Category,
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// Relative importance multiplier, at least 1. No fixed upper bound.
    pub weight: u32,
}

impl Question {
    /// Creates a new question, validating prompt and weight.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        category: Category,
        kind: QuestionKind,
        weight: u32,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id,
            prompt: prompt.into(),
            category,
            kind,
            weight,
        };
        question.validate()?;
        Ok(question)
    }

    /// Validates the question's own fields. Called again by the catalog
    /// for questions that arrive through deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        if self.weight == 0 {
            return Err(ValidationError::out_of_range(
                "weight",
                1.0,
                u32::MAX as f64,
                0.0,
            ));
        }
        if let Some(options) = self.kind.options() {
            if options.is_empty() {
                return Err(ValidationError::empty_field("options"));
            }
            for option in options {
                if option.value.trim().is_empty() {
                    return Err(ValidationError::empty_field("option value"));
                }
                if option.score > MAX_QUESTION_SCORE {
                    return Err(ValidationError::out_of_range(
                        "option score",
                        0.0,
                        MAX_QUESTION_SCORE as f64,
                        option.score as f64,
                    ));
                }
            }
        }
        Ok(())
    }

    /// The maximum weighted contribution this question can make.
    pub fn max_weighted_score(&self) -> u32 {
        MAX_QUESTION_SCORE as u32 * self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radio_kind() -> QuestionKind {
        QuestionKind::Radio {
            options: vec![
                QuestionOption::new("hold", "Hold", 6).unwrap(),
                QuestionOption::new("sell", "Sell", 0).unwrap(),
            ],
        }
    }

    #[test]
    fn question_option_rejects_score_over_ten() {
        let result = QuestionOption::new("token", "Label", 11);
        assert!(result.is_err());
    }

    #[test]
    fn question_option_rejects_empty_value() {
        let result = QuestionOption::new("  ", "Label", 5);
        assert!(result.is_err());
    }

    #[test]
    fn question_option_accepts_boundary_scores() {
        assert!(QuestionOption::new("a", "A", 0).is_ok());
        assert!(QuestionOption::new("b", "B", 10).is_ok());
    }

    #[test]
    fn question_rejects_empty_prompt() {
        let result = Question::new(
            QuestionId::new(1),
            "  ",
            Category::RiskTolerance,
            radio_kind(),
            2,
        );
        assert!(result.is_err());
    }

    #[test]
    fn question_rejects_zero_weight() {
        let result = Question::new(
            QuestionId::new(1),
            "Prompt",
            Category::RiskTolerance,
            radio_kind(),
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn question_rejects_radio_without_options() {
        let result = Question::new(
            QuestionId::new(1),
            "Prompt",
            Category::RiskTolerance,
            QuestionKind::Radio { options: vec![] },
            2,
        );
        assert!(result.is_err());
    }

    #[test]
    fn question_max_weighted_score_uses_weight() {
        let question = Question::new(
            QuestionId::new(1),
            "Prompt",
            Category::RiskTolerance,
            radio_kind(),
            4,
        )
        .unwrap();
        assert_eq!(question.max_weighted_score(), 40);
    }

    #[test]
    fn category_labels_are_human_readable() {
        assert_eq!(Category::RiskTolerance.label(), "Risk Tolerance");
        assert_eq!(Category::FinancialCapacity.label(), "Financial Capacity");
        assert_eq!(Category::TimeHorizon.label(), "Time Horizon");
        assert_eq!(Category::Knowledge.label(), "Knowledge");
    }

    #[test]
    fn question_serializes_with_flattened_kind() {
        let question = Question::new(
            QuestionId::new(3),
            "If your portfolio lost 20%, what would you do?",
            Category::RiskTolerance,
            radio_kind(),
            4,
        )
        .unwrap();

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["kind"], "radio");
        assert_eq!(json["options"][0]["value"], "hold");
        assert_eq!(json["weight"], 4);
    }

    #[test]
    fn question_deserializes_slider_kind() {
        let json = serde_json::json!({
            "id": 1,
            "prompt": "What is your age?",
            "category": "financial_capacity",
            "kind": "slider",
            "min": 18.0,
            "max": 70.0,
            "initial": 30.0,
            "weight": 3
        });

        let question: Question = serde_json::from_value(json).unwrap();
        assert_eq!(question.id, QuestionId::new(1));
        assert!(matches!(question.kind, QuestionKind::Slider { .. }));
    }
}
