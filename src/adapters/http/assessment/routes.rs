//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::AssessmentService;

use super::handlers::{list_profiles, list_questions, submit_assessment};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(service: AssessmentService) -> Router {
    Router::new()
        .route("/", post(submit_assessment))
        .route("/questions", get(list_questions))
        .route("/profiles", get(list_profiles))
        .with_state(service)
}
