use async_trait::async_trait;
use std::sync::Arc;

use crate::models::PersonInfo;
use crate::services::llm::{generate_structured, LanguageModel};
use crate::services::matchmaker::MatchError;
use crate::services::prompts::profile_extraction_prompt;
use crate::services::search::{SearchOptions, SearchProvider};

/// Maps a person identifier (name or profile link) to a profile
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    async fn resolve(&self, identifier: &str) -> Result<PersonInfo, MatchError>;
}

/// Searches the professional network and lets the model extract a profile
pub struct SearchProfileResolver {
    search: Arc<dyn SearchProvider>,
    model: Arc<dyn LanguageModel>,
    options: SearchOptions,
}

impl SearchProfileResolver {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        model: Arc<dyn LanguageModel>,
        options: SearchOptions,
    ) -> Self {
        Self {
            search,
            model,
            options,
        }
    }
}

#[async_trait]
impl ProfileResolver for SearchProfileResolver {
    async fn resolve(&self, identifier: &str) -> Result<PersonInfo, MatchError> {
        let identifier = identifier.trim();
        let query = format!("{} information", identifier);
        let found = self.search.search(&query, &self.options).await?;

        if !found.has_content() {
            tracing::warn!("Search returned no usable content for {:?}", identifier);
            return Err(MatchError::NoSearchResults(identifier.to_string()));
        }

        tracing::debug!("Extracting profile for {:?} from {} results", identifier, found.results.len());

        let prompt = profile_extraction_prompt(identifier, &found.render());
        let profile = generate_structured::<PersonInfo>(self.model.as_ref(), &prompt).await?;

        Ok(profile)
    }
}

/// Returns a fixed placeholder profile without calling any collaborator
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProfileResolver;

#[async_trait]
impl ProfileResolver for StaticProfileResolver {
    async fn resolve(&self, identifier: &str) -> Result<PersonInfo, MatchError> {
        Ok(PersonInfo {
            name: identifier.trim().to_string(),
            location: "San Francisco, CA".to_string(),
            current_role: "Software Engineer".to_string(),
            past_roles: "Backend engineer at two SaaS startups".to_string(),
            education: "B.S. Computer Science".to_string(),
            skills: "Distributed systems, APIs, cloud infrastructure".to_string(),
            industries: "SaaS, developer tools".to_string(),
            notable_keywords: "scalable systems, efficiency".to_string(),
            potential_flags: "None found".to_string(),
        })
    }
}
