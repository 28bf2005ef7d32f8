//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that occur when constructing a question or profile catalog.
///
/// Catalogs are validated once at construction; the classifier itself
/// never fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Question catalog cannot be empty")]
    EmptyQuestionCatalog,

    #[error("Profile catalog cannot be empty")]
    EmptyProfileCatalog,

    #[error("Duplicate question id {0}")]
    DuplicateQuestionId(u16),

    #[error("Question {question}: {source}")]
    InvalidQuestion {
        question: u16,
        #[source]
        source: ValidationError,
    },

    #[error("Asset allocation sums to {sum}, expected 100")]
    AllocationSum { sum: u16 },

    #[error("Tier thresholds must be strictly ascending: {prev} followed by {next}")]
    NonAscendingThresholds { prev: f64, next: f64 },

    #[error("Only the final profile band may be open-ended")]
    NonFinalOpenBand,

    #[error("The final profile band must be open-ended")]
    BoundedFinalBand,

    #[error("Catalog could not be parsed: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("prompt");
        assert_eq!(format!("{}", err), "Field 'prompt' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("score", 0.0, 10.0, 15.0);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 0 and 10, got 15"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("value", "contains whitespace");
        assert_eq!(
            format!("{}", err),
            "Field 'value' has invalid format: contains whitespace"
        );
    }

    #[test]
    fn catalog_error_allocation_sum_displays_correctly() {
        let err = CatalogError::AllocationSum { sum: 95 };
        assert_eq!(format!("{}", err), "Asset allocation sums to 95, expected 100");
    }

    #[test]
    fn catalog_error_wraps_validation_error_with_question_id() {
        let err = CatalogError::InvalidQuestion {
            question: 3,
            source: ValidationError::empty_field("prompt"),
        };
        assert_eq!(format!("{}", err), "Question 3: Field 'prompt' cannot be empty");
    }
}
