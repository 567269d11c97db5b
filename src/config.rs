use crate::models::ScoringWeights;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_candidate_pool")]
    pub candidate_pool: usize,
    #[serde(default = "default_evaluation_window")]
    pub evaluation_window: usize,
    #[serde(default = "default_match_limit")]
    pub default_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            candidate_pool: default_candidate_pool(),
            evaluation_window: default_evaluation_window(),
            default_limit: default_match_limit(),
        }
    }
}

fn default_candidate_pool() -> usize { 20 }
fn default_evaluation_window() -> usize { 10 }
fn default_match_limit() -> usize { 3 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_token_weight")]
    pub token_preference: f64,
    #[serde(default = "default_risk_weight")]
    pub risk_tolerance: f64,
    #[serde(default = "default_traits_weight")]
    pub personality_traits: f64,
    #[serde(default = "default_ideal_match_weight")]
    pub ideal_match: f64,
    #[serde(default = "default_vibe_weight")]
    pub community_vibe: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            token_preference: default_token_weight(),
            risk_tolerance: default_risk_weight(),
            personality_traits: default_traits_weight(),
            ideal_match: default_ideal_match_weight(),
            community_vibe: default_vibe_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            token_preference: config.token_preference,
            risk_tolerance: config.risk_tolerance,
            personality_traits: config.personality_traits,
            ideal_match: config.ideal_match,
            community_vibe: config.community_vibe,
        }
    }
}

fn default_token_weight() -> f64 { 0.30 }
fn default_risk_weight() -> f64 { 0.25 }
fn default_traits_weight() -> f64 { 0.20 }
fn default_ideal_match_weight() -> f64 { 0.15 }
fn default_vibe_weight() -> f64 { 0.10 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CHAINMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CHAINMATCH__MATCHING__CANDIDATE_POOL -> matching.candidate_pool
            .add_source(
                Environment::with_prefix("CHAINMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CHAINMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
