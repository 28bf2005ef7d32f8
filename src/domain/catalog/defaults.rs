//! The standard question battery.
//!
//! Ten questions covering risk tolerance, financial capacity, time
//! horizon, and product knowledge. Weights are relative importance
//! multipliers; the loss-reaction question carries the highest weight.

use once_cell::sync::Lazy;

use super::catalog::QuestionCatalog;
use super::question::{Category, Question, QuestionId, QuestionKind, QuestionOption};

static STANDARD: Lazy<QuestionCatalog> = Lazy::new(|| {
    build_standard().expect("standard question catalog must be valid")
});

/// The cached standard catalog.
pub(super) fn standard_questions() -> &'static QuestionCatalog {
    &STANDARD
}

fn option(value: &str, label: &str, score: u8) -> QuestionOption {
    QuestionOption::new(value, label, score).expect("standard option must be valid")
}

fn build_standard() -> Result<QuestionCatalog, crate::domain::foundation::CatalogError> {
    let questions = vec![
        Question {
            id: QuestionId::new(1),
            prompt: "What is your age?".to_string(),
            category: Category::FinancialCapacity,
            kind: QuestionKind::Slider {
                min: 18.0,
                max: 70.0,
                initial: 30.0,
            },
            weight: 3,
        },
        Question {
            id: QuestionId::new(2),
            prompt: "How long do you plan to stay invested before you need this money?"
                .to_string(),
            category: Category::TimeHorizon,
            kind: QuestionKind::Radio {
                options: vec![
                    option("less_than_1_year", "Less than 1 year", 1),
                    option("1_to_3_years", "1 to 3 years", 3),
                    option("3_to_5_years", "3 to 5 years", 5),
                    option("5_to_10_years", "5 to 10 years", 8),
                    option("more_than_10_years", "More than 10 years", 10),
                ],
            },
            weight: 3,
        },
        Question {
            id: QuestionId::new(3),
            prompt: "If your portfolio lost 20% of its value in a month, what would you do?"
                .to_string(),
            category: Category::RiskTolerance,
            kind: QuestionKind::Radio {
                options: vec![
                    option("sell_everything", "Sell everything to avoid further losses", 0),
                    option("sell_some", "Sell a portion and move to safer assets", 3),
                    option("hold", "Hold and wait for recovery", 6),
                    option("buy_more", "Buy more at the lower price", 10),
                ],
            },
            weight: 4,
        },
        Question {
            id: QuestionId::new(4),
            prompt: "How stable is your current income?".to_string(),
            category: Category::FinancialCapacity,
            kind: QuestionKind::Radio {
                options: vec![
                    option("very_unstable", "Very unstable or irregular", 1),
                    option("somewhat_unstable", "Somewhat unstable", 4),
                    option("stable", "Stable", 7),
                    option("very_stable", "Very stable with regular growth", 10),
                ],
            },
            weight: 2,
        },
        Question {
            id: QuestionId::new(5),
            prompt: "How many months of expenses do you hold as an emergency fund?"
                .to_string(),
            category: Category::FinancialCapacity,
            kind: QuestionKind::Radio {
                options: vec![
                    option("none", "No emergency fund", 0),
                    option("under_3_months", "Under 3 months", 3),
                    option("3_to_6_months", "3 to 6 months", 7),
                    option("over_6_months", "Over 6 months", 10),
                ],
            },
            weight: 2,
        },
        Question {
            id: QuestionId::new(6),
            prompt: "How would you rate your investment knowledge?".to_string(),
            category: Category::Knowledge,
            kind: QuestionKind::Radio {
                options: vec![
                    option("beginner", "Beginner - new to investing", 2),
                    option("basic", "Basic - familiar with deposits and funds", 4),
                    option("comfortable", "Comfortable - understand equity and debt", 7),
                    option("advanced", "Advanced - follow markets actively", 10),
                ],
            },
            weight: 2,
        },
        Question {
            id: QuestionId::new(7),
            prompt: "Which portfolio would you be most comfortable holding?".to_string(),
            category: Category::RiskTolerance,
            kind: QuestionKind::Radio {
                options: vec![
                    option("steady_small_gains", "Steady returns with small gains", 1),
                    option("mostly_steady", "Mostly steady with occasional dips", 4),
                    option("balanced_swings", "Balanced growth with moderate swings", 7),
                    option("large_swings", "High growth with large swings", 10),
                ],
            },
            weight: 3,
        },
        Question {
            id: QuestionId::new(8),
            prompt: "What share of your monthly income can you set aside for investing?"
                .to_string(),
            category: Category::FinancialCapacity,
            kind: QuestionKind::Radio {
                options: vec![
                    option("under_10_percent", "Under 10%", 2),
                    option("10_to_25_percent", "10% to 25%", 5),
                    option("25_to_50_percent", "25% to 50%", 8),
                    option("over_50_percent", "Over 50%", 10),
                ],
            },
            weight: 2,
        },
        Question {
            id: QuestionId::new(9),
            prompt: "How many people depend on your income?".to_string(),
            category: Category::FinancialCapacity,
            kind: QuestionKind::Radio {
                options: vec![
                    option("three_or_more", "Three or more", 2),
                    option("two", "Two", 4),
                    option("one", "One", 7),
                    option("none", "None", 10),
                ],
            },
            weight: 2,
        },
        Question {
            id: QuestionId::new(10),
            prompt: "What is the primary goal for this investment?".to_string(),
            category: Category::TimeHorizon,
            kind: QuestionKind::Radio {
                options: vec![
                    option("capital_preservation", "Preserve capital", 1),
                    option("regular_income", "Generate regular income", 4),
                    option("balanced_growth", "Balanced long-term growth", 7),
                    option("aggressive_growth", "Maximize long-term growth", 10),
                ],
            },
            weight: 3,
        },
    ];

    QuestionCatalog::new(questions)
}
