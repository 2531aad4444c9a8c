use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::ScoringWeights;
use crate::services::SearchOptions;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub profiles: ProfileSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    pub timeout_secs: Option<u64>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            api_key: String::new(),
            model: default_llm_model(),
            temperature: default_temperature(),
            timeout_secs: None,
        }
    }
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(60))
    }
}

fn default_llm_endpoint() -> String { "https://generativelanguage.googleapis.com/v1beta".to_string() }
fn default_llm_model() -> String { crate::services::llm::DEFAULT_MODEL.to_string() }
fn default_temperature() -> f32 { 0.7 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_max_results")]
    pub max_results: u8,
    #[serde(default = "default_include_domains")]
    pub include_domains: Vec<String>,
    #[serde(default = "default_true")]
    pub include_answer: bool,
    #[serde(default = "default_true")]
    pub include_raw_content: bool,
    #[serde(default = "default_true")]
    pub include_image_descriptions: bool,
    pub timeout_secs: Option<u64>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            api_key: String::new(),
            max_results: default_max_results(),
            include_domains: default_include_domains(),
            include_answer: true,
            include_raw_content: true,
            include_image_descriptions: true,
            timeout_secs: None,
        }
    }
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            max_results: self.max_results,
            include_domains: self.include_domains.clone(),
            include_answer: self.include_answer,
            include_raw_content: self.include_raw_content,
            include_image_descriptions: self.include_image_descriptions,
        }
    }
}

fn default_search_endpoint() -> String { "https://api.tavily.com".to_string() }
fn default_max_results() -> u8 { 10 }
fn default_include_domains() -> Vec<String> { vec!["https://www.linkedin.com/".to_string()] }
fn default_true() -> bool { true }

/// Where model-backed profiles come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileBackend {
    #[default]
    Search,
    Static,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSettings {
    #[serde(default)]
    pub backend: ProfileBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_good_match_threshold")]
    pub good_match_threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            good_match_threshold: default_good_match_threshold(),
        }
    }
}

fn default_good_match_threshold() -> f64 { crate::core::DEFAULT_GOOD_MATCH_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_capability_weight")]
    pub skill_capability: f64,
    #[serde(default = "default_vision_values_weight")]
    pub vision_values: f64,
    #[serde(default = "default_working_dynamic_weight")]
    pub working_dynamic: f64,
    #[serde(default = "default_growth_potential_weight")]
    pub growth_potential: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill_capability: default_skill_capability_weight(),
            vision_values: default_vision_values_weight(),
            working_dynamic: default_working_dynamic_weight(),
            growth_potential: default_growth_potential_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skill_capability: config.skill_capability,
            vision_values: config.vision_values,
            working_dynamic: config.working_dynamic,
            growth_potential: config.growth_potential,
        }
    }
}

impl ScoringSettings {
    /// Weights must be non-negative and sum to 1 so the overall stays in 0-100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        let weights = [w.skill_capability, w.vision_values, w.working_dynamic, w.growth_potential];

        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(ConfigError::Message(format!(
                "scoring weights must be between 0 and 1, got {:?}",
                weights
            )));
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 1.0, got {:.3}",
                sum
            )));
        }

        if !(0.0..=1.0).contains(&self.good_match_threshold) {
            return Err(ConfigError::Message(format!(
                "scoring.good_match_threshold must be between 0 and 1, got {}",
                self.good_match_threshold
            )));
        }

        Ok(())
    }
}

fn default_skill_capability_weight() -> f64 { 0.30 }
fn default_vision_values_weight() -> f64 { 0.30 }
fn default_working_dynamic_weight() -> f64 { 0.25 }
fn default_growth_potential_weight() -> f64 { 0.15 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COFOUNDER)
    /// 5. GOOGLE_API_KEY / TAVILY_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COFOUNDER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        finish(settings, env_var)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        finish(settings, env_var)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Substitute provider keys, deserialize and validate
fn finish(settings: Config, lookup: impl Fn(&str) -> Option<String>) -> Result<Settings, ConfigError> {
    let settings: Settings = substitute_api_keys(settings, lookup)?.try_deserialize()?;
    settings.scoring.validate()?;
    Ok(settings)
}

fn environment() -> Environment {
    Environment::with_prefix("COFOUNDER")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("search.include_domains")
        .try_parsing(true)
}

/// Fill API keys from the conventional provider variables when not configured
fn substitute_api_keys(
    settings: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let configured = |key: &str| {
        settings
            .get_string(key)
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    };

    let google_key = lookup("GOOGLE_API_KEY").filter(|_| !configured("llm.api_key"));
    let tavily_key = lookup("TAVILY_API_KEY").filter(|_| !configured("search.api_key"));

    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = google_key {
        builder = builder.set_override("llm.api_key", key)?;
    }
    if let Some(key) = tavily_key {
        builder = builder.set_override("search.api_key", key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skill_capability, 0.30);
        assert_eq!(weights.vision_values, 0.30);
        assert_eq!(weights.working_dynamic, 0.25);
        assert_eq!(weights.growth_potential, 0.15);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_search_options_from_settings() {
        let options = SearchSettings::default().options();
        assert_eq!(options.max_results, 10);
        assert_eq!(options.include_domains, vec!["https://www.linkedin.com/"]);
        assert!(options.include_raw_content);
    }

    fn bundled_config() -> Config {
        Config::builder()
            .add_source(File::with_name("config/default"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_provider_keys_fill_unset_api_keys() {
        let lookup = |name: &str| match name {
            "GOOGLE_API_KEY" => Some("google-key".to_string()),
            "TAVILY_API_KEY" => Some("tavily-key".to_string()),
            _ => None,
        };

        let settings = finish(bundled_config(), lookup).unwrap();

        assert_eq!(settings.llm.api_key, "google-key");
        assert_eq!(settings.search.api_key, "tavily-key");
    }

    #[test]
    fn test_configured_api_key_wins_over_provider_key() {
        let config = Config::builder()
            .add_source(bundled_config())
            .set_override("llm.api_key", "configured")
            .unwrap()
            .build()
            .unwrap();

        let settings = finish(config, |_| Some("from-env".to_string())).unwrap();

        assert_eq!(settings.llm.api_key, "configured");
        assert_eq!(settings.search.api_key, "from-env");
    }

    #[test]
    fn test_scoring_validation_rejects_bad_weights() {
        let mut scoring = ScoringSettings::default();
        assert!(scoring.validate().is_ok());

        scoring.weights.skill_capability = 0.60;
        assert!(scoring.validate().is_err());

        let mut scoring = ScoringSettings::default();
        scoring.weights.growth_potential = -0.15;
        scoring.weights.skill_capability = 0.60;
        assert!(scoring.validate().is_err());

        let mut scoring = ScoringSettings::default();
        scoring.good_match_threshold = 70.0;
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_invalid_weights_fail_loading() {
        let config = Config::builder()
            .add_source(bundled_config())
            .set_override("scoring.weights.vision_values", 0.9)
            .unwrap()
            .build()
            .unwrap();

        let err = finish(config, |_| None).unwrap_err();

        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_load_bundled_config() {
        let settings = Settings::load_from("config/default.toml").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.llm.model, "gemini-2.0-flash-lite");
        assert_eq!(settings.profiles.backend, ProfileBackend::Search);
        assert_eq!(settings.scoring.good_match_threshold, 0.70);
    }
}
