//! Cofounder Match - co-founder compatibility service
//!
//! Two paths produce a match report for a pair of people:
//! - a model-backed path that resolves profiles through web search, scores
//!   six dimensions with a generative model and proposes startup ideas;
//! - a closed-form path that fabricates deterministic synthetic profiles
//!   from profile links and scores four categories with set arithmetic.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{CompatibilityMatcher, SyntheticProfileResolver, mean_with_inversion, weighted_overall};
pub use models::{Card, CoFounderProfile, CompatibilityReport, Dimension, MatchResult, PersonInfo, StartupIdea};
pub use services::{MatchError, Matchmaker};
