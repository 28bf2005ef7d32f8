//! Risk classifier - Weighted scoring over the question catalog.

use std::collections::BTreeMap;

use crate::domain::catalog::{
    Category, Question, QuestionCatalog, QuestionKind, MAX_QUESTION_SCORE,
};
use crate::domain::foundation::Percentage;
use crate::domain::profile::ProfileCatalog;

use super::answers::{AnswerSet, AnswerValue};
use super::result::{CategoryBreakdown, RiskResult};

/// Pure classification over the catalogs and an answer set.
///
/// Total over its input domain: malformed values, unknown tokens, and
/// missing answers all score zero rather than failing. Unanswered
/// questions still contribute their full weighted maximum to the
/// denominator, so partial submissions score lower instead of being
/// pro-rated.
pub struct RiskClassifier;

impl RiskClassifier {
    /// Computes the risk result for an answer set.
    ///
    /// # Algorithm
    /// For each question: contribution = score(answer) × weight.
    /// percentage = Σ contributions / Σ (10 × weight) × 100, then the
    /// profile catalog's bands select the tier (inclusive upper bounds,
    /// first match wins).
    ///
    /// # Edge Cases
    /// - Empty answer set: 0%, most conservative tier
    /// - Zero-weight catalog maximum: falls back to 0%
    /// - Unknown option tokens and wrong-shaped values: score 0
    pub fn classify(
        questions: &QuestionCatalog,
        profiles: &ProfileCatalog,
        answers: &AnswerSet,
    ) -> RiskResult {
        let mut total_score: u32 = 0;
        let mut by_category: BTreeMap<Category, (u32, u32)> = BTreeMap::new();

        for question in questions.questions() {
            let score = Self::question_score(question, answers.get(question.id)) as u32;
            let contribution = score * question.weight;
            total_score += contribution;

            let entry = by_category.entry(question.category).or_insert((0, 0));
            entry.0 += contribution;
            entry.1 += question.max_weighted_score();
        }

        let max_possible_score = questions.max_possible_score();
        let percentage = Self::ratio(total_score, max_possible_score);
        let profile = profiles.profile_for(percentage).clone();

        let categories = by_category
            .into_iter()
            .map(|(category, (score, max_score))| CategoryBreakdown {
                category,
                score,
                max_score,
                percentage: Self::ratio(score, max_score),
            })
            .collect();

        RiskResult {
            total_score,
            max_possible_score,
            percentage,
            tier: profile.tier,
            profile,
            categories,
        }
    }

    /// Scores a single question (0-10) from its answer, by kind.
    fn question_score(question: &Question, answer: Option<&AnswerValue>) -> u8 {
        let Some(answer) = answer else {
            return 0;
        };
        if !answer.is_real() {
            return 0;
        }

        match (&question.kind, answer) {
            (QuestionKind::Slider { .. }, AnswerValue::Number(value)) => {
                Self::age_score(*value)
            }
            (QuestionKind::Radio { options }, AnswerValue::Choice(token)) => options
                .iter()
                .find(|o| o.value == *token)
                .map(|o| o.score)
                .unwrap_or(0),
            (QuestionKind::Checkbox { options }, AnswerValue::MultiChoice(tokens)) => {
                // Sum over matched options so duplicate tokens cannot
                // double count, then cap at the per-question maximum.
                let sum: u32 = options
                    .iter()
                    .filter(|o| tokens.contains(&o.value))
                    .map(|o| o.score as u32)
                    .sum();
                sum.min(MAX_QUESTION_SCORE as u32) as u8
            }
            // Wrong-shaped value for the question kind scores zero.
            _ => 0,
        }
    }

    /// The fixed age-to-score step function for slider questions.
    ///
    /// Six discrete bands with inclusive upper ends; younger respondents
    /// score higher. Banding, not interpolation, is the documented
    /// behavior.
    fn age_score(age: f64) -> u8 {
        if age <= 25.0 {
            10
        } else if age <= 35.0 {
            8
        } else if age <= 45.0 {
            6
        } else if age <= 55.0 {
            4
        } else if age <= 65.0 {
            2
        } else {
            1
        }
    }

    fn ratio(score: u32, max_score: u32) -> Percentage {
        if max_score == 0 {
            return Percentage::ZERO;
        }
        Percentage::new(score as f64 / max_score as f64 * 100.0)
    }
}
