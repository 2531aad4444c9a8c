// Core algorithm exports
pub mod aggregate;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod synthetic;

pub use aggregate::{effective_score, insights_and_risks, mean_with_inversion, summarize, weighted_overall};
pub use matcher::{CompatibilityMatcher, DEFAULT_GOOD_MATCH_THRESHOLD};
pub use scoring::{calculate_category_score, round_one_decimal, score_category};
pub use similarity::{complementarity, overlap_over_max, overlap_over_min, PairMeasures};
pub use synthetic::SyntheticProfileResolver;
