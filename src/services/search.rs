use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the search API
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Per-query search options
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub max_results: u8,
    pub include_domains: Vec<String>,
    pub include_answer: bool,
    pub include_raw_content: bool,
    pub include_image_descriptions: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 10,
            include_domains: vec!["https://www.linkedin.com/".to_string()],
            include_answer: true,
            include_raw_content: true,
            include_image_descriptions: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub raw_content: Option<String>,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// True when there is any text worth handing to the model
    pub fn has_content(&self) -> bool {
        self.results.iter().any(|r| {
            !r.content.trim().is_empty()
                || r.raw_content.as_deref().is_some_and(|raw| !raw.trim().is_empty())
        })
    }

    /// Render the answer and results as plain text for a prompt
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(answer) = self.answer.as_deref().filter(|a| !a.trim().is_empty()) {
            let _ = writeln!(out, "Summary: {}\n", answer.trim());
        }

        for (i, result) in self.results.iter().enumerate() {
            let _ = writeln!(out, "[{}] {} ({})", i + 1, result.title, result.url);
            let body = result
                .raw_content
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .unwrap_or(result.content.as_str());
            let _ = writeln!(out, "{}\n", body.trim());
        }

        out
    }
}

/// Web search collaborator
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse, SearchError>;
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    topic: &'a str,
    max_results: u8,
    include_answer: bool,
    include_raw_content: bool,
    include_images: bool,
    include_image_descriptions: bool,
    include_domains: &'a [String],
}

/// Tavily search API client
pub struct TavilyClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl TavilyClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));

        let body = TavilyRequest {
            query,
            topic: "general",
            max_results: options.max_results,
            include_answer: options.include_answer,
            include_raw_content: options.include_raw_content,
            include_images: false,
            include_image_descriptions: options.include_image_descriptions,
            include_domains: &options.include_domains,
        };

        tracing::debug!("Searching for {:?} (max {} results)", query, options.max_results);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&text)
            .map_err(|e| SearchError::InvalidResponse(format!("Failed to parse search response: {}", e)))?;

        tracing::debug!("Search for {:?} returned {} results", query, parsed.results.len());

        Ok(parsed)
    }
}
