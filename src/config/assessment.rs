//! Assessment configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::catalog::QuestionCatalog;

use super::error::CatalogFileError;

/// Assessment engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentConfig {
    /// Optional path to a YAML question catalog overriding the standard
    /// battery. When unset, the built-in catalog is used.
    pub question_catalog_path: Option<PathBuf>,
}

impl AssessmentConfig {
    /// Loads the configured question catalog, if any.
    ///
    /// Returns `Ok(None)` when no override path is configured. A
    /// configured path that is missing or invalid is an error: a
    /// misconfigured catalog should fail startup rather than silently
    /// fall back.
    pub fn load_question_catalog(&self) -> Result<Option<QuestionCatalog>, CatalogFileError> {
        let Some(path) = &self.question_catalog_path else {
            return Ok(None);
        };
        let yaml = std::fs::read_to_string(path)?;
        let catalog = QuestionCatalog::from_yaml_str(&yaml)?;
        Ok(Some(catalog))
    }
}
