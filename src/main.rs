//! Risk Appetite server binary.
//!
//! Loads configuration, initializes tracing, builds the catalogs, and
//! serves the assessment API.

use tracing_subscriber::EnvFilter;

use risk_appetite::adapters::http::app_router;
use risk_appetite::application::AssessmentService;
use risk_appetite::config::AppConfig;
use risk_appetite::domain::catalog::QuestionCatalog;
use risk_appetite::domain::profile::ProfileCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let questions = match config.assessment.load_question_catalog()? {
        Some(catalog) => {
            tracing::info!(
                questions = catalog.len(),
                max_possible_score = catalog.max_possible_score(),
                "loaded question catalog override"
            );
            catalog
        }
        None => QuestionCatalog::standard().clone(),
    };

    let service = AssessmentService::new(questions, ProfileCatalog::standard().clone());
    let app = app_router(service, &config.server);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "risk-appetite listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
