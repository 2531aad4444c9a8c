use futures::future::try_join_all;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::core::aggregate::{mean_with_inversion, summarize};
use crate::models::{Card, Dimension, MatchResult, PersonInfo, StartupIdea};
use crate::services::llm::{generate_structured, LanguageModel, LlmError};
use crate::services::prompts::{card_prompt, startup_ideas_prompt};
use crate::services::resolver::ProfileResolver;
use crate::services::search::SearchError;

pub const STARTUP_IDEA_COUNT: usize = 3;

/// Errors that abort a match request
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    #[error("Model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("No search results for {0}")]
    NoSearchResults(String),

    #[error("Invalid card: {0}")]
    InvalidCard(String),
}

impl MatchError {
    /// True when a collaborator answered but broke the output contract
    pub fn is_schema_violation(&self) -> bool {
        match self {
            MatchError::Llm(e) => e.is_schema_violation(),
            MatchError::InvalidCard(_) => true,
            MatchError::Search(SearchError::InvalidResponse(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CardContent {
    score: i64,
    insight: String,
}

#[derive(Debug, Deserialize)]
struct Ideas {
    #[serde(default)]
    ideas: Vec<StartupIdea>,
}

/// Assembles the model-backed match report
///
/// # Pipeline Stages
/// 1. Resolve both profiles concurrently
/// 2. Score every dimension concurrently
/// 3. Generate startup ideas
/// 4. Aggregate and assemble
///
/// Each stage is joined strictly: the first failing branch fails the request.
#[derive(Clone)]
pub struct Matchmaker {
    resolver: Arc<dyn ProfileResolver>,
    model: Arc<dyn LanguageModel>,
}

impl Matchmaker {
    pub fn new(resolver: Arc<dyn ProfileResolver>, model: Arc<dyn LanguageModel>) -> Self {
        Self { resolver, model }
    }

    pub async fn find_match(&self, first: &str, second: &str) -> Result<MatchResult, MatchError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("find_match", %request_id);

        self.run_match(first, second).instrument(span).await
    }

    async fn run_match(&self, first: &str, second: &str) -> Result<MatchResult, MatchError> {
        tracing::info!("Matching {:?} with {:?}", first, second);

        let (profile_a, profile_b) =
            tokio::try_join!(self.resolver.resolve(first), self.resolver.resolve(second))?;

        tracing::debug!("Resolved profiles: {} and {}", profile_a.name, profile_b.name);

        let cards = try_join_all(
            Dimension::ALL
                .iter()
                .map(|dimension| self.score_dimension(&profile_a, &profile_b, *dimension)),
        )
        .await?;

        let startup_ideas = self.startup_ideas(&profile_a, &profile_b).await?;

        let result = assemble(cards, startup_ideas)?;

        tracing::info!(
            "Match complete: overall={}, ideas={}",
            result.overall_match_score,
            result.startup_ideas.len()
        );

        Ok(result)
    }

    /// Ask the model for one dimension's card
    pub async fn score_dimension(
        &self,
        a: &PersonInfo,
        b: &PersonInfo,
        dimension: Dimension,
    ) -> Result<Card, MatchError> {
        let prompt = card_prompt(a, b, dimension);
        let content = generate_structured::<CardContent>(self.model.as_ref(), &prompt).await?;

        let score = u8::try_from(content.score)
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| {
                MatchError::InvalidCard(format!(
                    "{} score {} is outside 0-100",
                    dimension, content.score
                ))
            })?;

        tracing::debug!("Scored {}: {}", dimension, score);

        Ok(Card {
            title: dimension,
            score,
            insight: content.insight,
        })
    }

    /// Ask the model for startup ideas the pair could build
    pub async fn startup_ideas(
        &self,
        a: &PersonInfo,
        b: &PersonInfo,
    ) -> Result<Vec<StartupIdea>, MatchError> {
        let prompt = startup_ideas_prompt(a, b);
        let ideas = generate_structured::<Ideas>(self.model.as_ref(), &prompt).await?;

        if ideas.ideas.len() != STARTUP_IDEA_COUNT {
            tracing::warn!(
                "Expected {} startup ideas, model returned {}",
                STARTUP_IDEA_COUNT,
                ideas.ideas.len()
            );
        }

        Ok(ideas.ideas)
    }
}

/// Slot each card under its own dimension and aggregate
pub fn assemble(cards: Vec<Card>, startup_ideas: Vec<StartupIdea>) -> Result<MatchResult, MatchError> {
    let overall_match_score = mean_with_inversion(&cards);
    let summary = summarize(&cards, overall_match_score);

    let mut skill = None;
    let mut industry = None;
    let mut conflict = None;
    let mut growth = None;
    let mut culture = None;
    let mut critique = None;

    for card in cards {
        let slot = match card.title {
            Dimension::SkillComplementarity => &mut skill,
            Dimension::IndustryExperienceAlignment => &mut industry,
            Dimension::ConflictProbability => &mut conflict,
            Dimension::GrowthCatalystPotential => &mut growth,
            Dimension::CulturalFitIndex => &mut culture,
            Dimension::CritiqueOpenness => &mut critique,
        };
        if slot.replace(card).is_some() {
            return Err(MatchError::InvalidCard("duplicate dimension".to_string()));
        }
    }

    let require = |card: Option<Card>, dimension: Dimension| {
        card.ok_or_else(|| MatchError::InvalidCard(format!("missing {}", dimension)))
    };

    Ok(MatchResult {
        overall_match_score,
        summary,
        skill_complementarity: require(skill, Dimension::SkillComplementarity)?,
        industry_experience_alignment: require(industry, Dimension::IndustryExperienceAlignment)?,
        conflict_probability: require(conflict, Dimension::ConflictProbability)?,
        growth_catalyst_potential: require(growth, Dimension::GrowthCatalystPotential)?,
        cultural_fit_index: require(culture, Dimension::CulturalFitIndex)?,
        critique_openness: require(critique, Dimension::CritiqueOpenness)?,
        startup_ideas,
    })
}
