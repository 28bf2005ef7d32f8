//! Assessment service - Catalog ownership and scoring entry point.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::QuestionCatalog;
use crate::domain::profile::ProfileCatalog;
use crate::domain::scoring::{AnswerSet, RiskClassifier, RiskResult};

/// How much of the questionnaire carries a real answer.
///
/// Callers use this to gate submission; the scorer never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

/// Owns the immutable catalogs and exposes the classifier to adapters.
///
/// The catalogs are injected at construction; nothing here reads global
/// state, so the service is freely cloneable and shareable across
/// request handlers.
#[derive(Clone)]
pub struct AssessmentService {
    questions: Arc<QuestionCatalog>,
    profiles: Arc<ProfileCatalog>,
}

impl AssessmentService {
    /// Creates a service over caller-supplied catalogs.
    pub fn new(questions: QuestionCatalog, profiles: ProfileCatalog) -> Self {
        Self {
            questions: Arc::new(questions),
            profiles: Arc::new(profiles),
        }
    }

    /// Creates a service over the standard catalogs.
    pub fn standard() -> Self {
        Self::new(
            QuestionCatalog::standard().clone(),
            ProfileCatalog::standard().clone(),
        )
    }

    /// Classifies an answer set.
    pub fn assess(&self, answers: &AnswerSet) -> RiskResult {
        let result = RiskClassifier::classify(&self.questions, &self.profiles, answers);
        tracing::debug!(
            total_score = result.total_score,
            max_possible_score = result.max_possible_score,
            percentage = result.percentage.value(),
            tier = %result.tier,
            "assessment classified"
        );
        result
    }

    /// Reports how many questions carry a real answer.
    pub fn completeness(&self, answers: &AnswerSet) -> CompletenessReport {
        let answered = answers.answered_count(&self.questions);
        let total = self.questions.len();
        CompletenessReport {
            answered,
            total,
            complete: answered == total,
        }
    }

    /// The question catalog served to form renderers.
    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    /// The profile catalog served to result renderers.
    pub fn profiles(&self) -> &ProfileCatalog {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionId;
    use crate::domain::profile::RiskTier;
    use crate::domain::scoring::AnswerValue;

    #[test]
    fn service_assesses_empty_answers_as_most_conservative() {
        let service = AssessmentService::standard();
        let result = service.assess(&AnswerSet::new());
        assert_eq!(result.tier, RiskTier::VeryConservative);
    }

    #[test]
    fn service_reports_completeness() {
        let service = AssessmentService::standard();
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::new(1), AnswerValue::Number(30.0));
        answers.insert(QuestionId::new(3), AnswerValue::Choice("hold".to_string()));

        let report = service.completeness(&answers);
        assert_eq!(report.answered, 2);
        assert_eq!(report.total, 10);
        assert!(!report.complete);
    }

    #[test]
    fn service_reports_complete_when_all_answered() {
        let service = AssessmentService::standard();
        let answers: AnswerSet = service
            .questions()
            .questions()
            .iter()
            .map(|q| (q.id, AnswerValue::Number(30.0)))
            .collect();

        let report = service.completeness(&answers);
        assert!(report.complete);
    }

    #[test]
    fn cloned_services_share_the_same_catalogs() {
        let service = AssessmentService::standard();
        let clone = service.clone();
        assert_eq!(
            service.questions().max_possible_score(),
            clone.questions().max_possible_score()
        );
    }
}
