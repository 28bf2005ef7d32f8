//! HTTP handlers for assessment endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::AssessmentService;

use super::dto::{AssessmentRequest, AssessmentResponse, ProfilesResponse, QuestionsResponse};

/// POST /api/assessment - Score a questionnaire.
///
/// Malformed answer values never reject: unknown tokens and
/// wrong-shaped values score zero, so any well-typed body classifies.
pub async fn submit_assessment(
    State(service): State<AssessmentService>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    let result = service.assess(&request.answers);
    let completeness = service.completeness(&request.answers);
    let response = AssessmentResponse::from_result(result, completeness);
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/assessment/questions - The question catalog for the form.
pub async fn list_questions(State(service): State<AssessmentService>) -> Response {
    let response = QuestionsResponse {
        questions: service.questions().questions().to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/assessment/profiles - The profile tiers for result display.
pub async fn list_profiles(State(service): State<AssessmentService>) -> Response {
    let response = ProfilesResponse {
        profiles: service
            .profiles()
            .bands()
            .iter()
            .map(|band| band.profile.clone().into())
            .collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionId;
    use crate::domain::scoring::{AnswerSet, AnswerValue};

    #[tokio::test]
    async fn submit_assessment_returns_ok_for_empty_answers() {
        let service = AssessmentService::standard();
        let request = AssessmentRequest {
            answers: AnswerSet::new(),
        };

        let response = submit_assessment(State(service), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn submit_assessment_returns_ok_for_nonsense_answers() {
        let service = AssessmentService::standard();
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::new(1), AnswerValue::Choice("not-a-number".into()));
        answers.insert(QuestionId::new(3), AnswerValue::Number(42.0));
        let request = AssessmentRequest { answers };

        // Totality: semantically nonsensical input still classifies.
        let response = submit_assessment(State(service), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn list_questions_returns_ok() {
        let service = AssessmentService::standard();
        let response = list_questions(State(service)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn list_profiles_returns_ok() {
        let service = AssessmentService::standard();
        let response = list_profiles(State(service)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
