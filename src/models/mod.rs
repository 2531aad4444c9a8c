// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod tags;

pub use domain::{
    Card, Category, CategoryScore, CategoryScores, CoFounderProfile, CompatibilityReport,
    Dimension, MatchResult, PersonInfo, ScoringWeights, StartupIdea,
};
pub use requests::{CompatibilityRequest, FindMatchRequest, SyntheticProfileQuery};
pub use responses::{ErrorResponse, HealthResponse};
pub use tags::{Interest, Skill, Strength, Value, Weakness, WorkStyle};
