//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::CompletenessReport;
use crate::domain::catalog::{Category, Question};
use crate::domain::profile::{AssetAllocation, RiskProfile, RiskTier};
use crate::domain::scoring::{AnswerSet, CategoryBreakdown, RiskResult};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to score a questionnaire.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    pub answers: AnswerSet,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Asset allocation percentages for UI rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationDto {
    pub equity: u8,
    pub debt: u8,
    pub gold: u8,
    pub cash: u8,
}

impl From<AssetAllocation> for AllocationDto {
    fn from(allocation: AssetAllocation) -> Self {
        Self {
            equity: allocation.equity,
            debt: allocation.debt,
            gold: allocation.gold,
            cash: allocation.cash,
        }
    }
}

/// Profile metadata for UI display.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDto {
    pub tier: RiskTier,
    pub name: String,
    pub description: String,
    pub allocation: AllocationDto,
    pub products: Vec<String>,
    pub color: String,
}

impl From<RiskProfile> for ProfileDto {
    fn from(profile: RiskProfile) -> Self {
        Self {
            tier: profile.tier,
            name: profile.tier.label().to_string(),
            description: profile.description,
            allocation: profile.allocation.into(),
            products: profile.products,
            color: profile.color,
        }
    }
}

/// Per-category sub-score.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreDto {
    pub category: Category,
    pub label: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
}

impl From<CategoryBreakdown> for CategoryScoreDto {
    fn from(breakdown: CategoryBreakdown) -> Self {
        Self {
            category: breakdown.category,
            label: breakdown.category.label().to_string(),
            score: breakdown.score,
            max_score: breakdown.max_score,
            percentage: breakdown.percentage.value(),
        }
    }
}

/// Completeness block echoed alongside the result.
#[derive(Debug, Clone, Serialize)]
pub struct CompletenessDto {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

impl From<CompletenessReport> for CompletenessDto {
    fn from(report: CompletenessReport) -> Self {
        Self {
            answered: report.answered,
            total: report.total,
            complete: report.complete,
        }
    }
}

/// Response for a scored questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub total_score: u32,
    pub max_possible_score: u32,
    pub percentage: f64,
    pub tier: RiskTier,
    pub profile: ProfileDto,
    pub categories: Vec<CategoryScoreDto>,
    pub completeness: CompletenessDto,
}

impl AssessmentResponse {
    /// Assembles the wire response from the domain result.
    pub fn from_result(result: RiskResult, completeness: CompletenessReport) -> Self {
        Self {
            total_score: result.total_score,
            max_possible_score: result.max_possible_score,
            percentage: result.percentage.value(),
            tier: result.tier,
            profile: result.profile.into(),
            categories: result.categories.into_iter().map(Into::into).collect(),
            completeness: completeness.into(),
        }
    }
}

/// The question catalog for form rendering.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// The profile tiers for result rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<ProfileDto>,
}
