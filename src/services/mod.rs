// Service exports
pub mod llm;
pub mod matchmaker;
pub mod prompts;
pub mod resolver;
pub mod search;

pub use llm::{generate_structured, GeminiClient, LanguageModel, LlmError, StructuredPrompt};
pub use matchmaker::{MatchError, Matchmaker};
pub use resolver::{ProfileResolver, SearchProfileResolver, StaticProfileResolver};
pub use search::{SearchError, SearchOptions, SearchProvider, SearchResponse, SearchResult, TavilyClient};
