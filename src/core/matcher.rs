use crate::core::{
    aggregate::{insights_and_risks, weighted_overall},
    scoring::{round_one_decimal, score_category},
    similarity::PairMeasures,
};
use crate::models::{Category, CategoryScores, CoFounderProfile, CompatibilityReport, ScoringWeights};

pub const DEFAULT_GOOD_MATCH_THRESHOLD: f64 = 0.70;

/// Closed-form compatibility matcher over synthetic profiles
///
/// # Pipeline Stages
/// 1. Pairwise set measures
/// 2. Category scores and descriptions
/// 3. Weighted overall score and good-match flag
/// 4. Insights and risks
#[derive(Debug, Clone)]
pub struct CompatibilityMatcher {
    weights: ScoringWeights,
    good_match_threshold: f64,
}

impl CompatibilityMatcher {
    pub fn new(weights: ScoringWeights, good_match_threshold: f64) -> Self {
        Self {
            weights,
            good_match_threshold,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_GOOD_MATCH_THRESHOLD)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Build the compatibility report for two profiles
    pub fn evaluate(&self, a: &CoFounderProfile, b: &CoFounderProfile) -> CompatibilityReport {
        let measures = PairMeasures::between(a, b);
        let score = |category: Category| score_category(category, a, b, &measures);

        let scores = CategoryScores {
            skill_capability_compatibility: score(Category::SkillCapabilityCompatibility),
            vision_values_alignment: score(Category::VisionValuesAlignment),
            working_dynamic: score(Category::WorkingDynamic),
            growth_potential: score(Category::GrowthPotential),
        };

        let overall = weighted_overall(&scores, &self.weights);
        let (match_insights, potential_risks) = insights_and_risks(&scores);

        tracing::debug!(
            "Evaluated {} vs {}: overall={:.3}, insights={}, risks={}",
            a.name,
            b.name,
            overall,
            match_insights.len(),
            potential_risks.len()
        );

        CompatibilityReport {
            overall_match_score: round_one_decimal(overall * 100.0),
            is_good_match: overall >= self.good_match_threshold,
            scores,
            match_insights,
            potential_risks,
        }
    }
}

impl Default for CompatibilityMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
