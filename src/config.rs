use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::{MatchingRules, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub bookmarks: BookmarkSettings,
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
fn default_port() -> u16 { 8000 }

/// Where postings come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Bundled dataset
    #[default]
    Static,
    /// JSON or TOML file at `catalog.path`
    File,
    /// HTTP API at `catalog.remote_url`
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub source: CatalogSource,
    pub path: Option<String>,
    pub remote_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: CatalogSource::default(),
            path: None,
            remote_url: None,
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 { 10 }
fn default_cache_ttl_secs() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_max_score")]
    pub max_score: u8,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_skill_gap_limit")]
    pub skill_gap_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_score: default_max_score(),
            max_results: default_max_results(),
            skill_gap_limit: default_skill_gap_limit(),
        }
    }
}

impl From<&MatchingSettings> for MatchingRules {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            min_score: settings.min_score,
            max_score: settings.max_score,
            max_results: settings.max_results,
            skill_gap_limit: settings.skill_gap_limit,
        }
    }
}

fn default_min_score() -> u8 { 30 }
fn default_max_score() -> u8 { 95 }
fn default_max_results() -> usize { 5 }
fn default_skill_gap_limit() -> usize { 6 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_sector_weight")]
    pub sector: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_base_weight")]
    pub base: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            sector: default_sector_weight(),
            location: default_location_weight(),
            base: default_base_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            sector: config.sector,
            location: config.location,
            base: config.base,
        }
    }
}

fn default_skills_weight() -> f64 { 40.0 }
fn default_sector_weight() -> f64 { 30.0 }
fn default_location_weight() -> f64 { 20.0 }
fn default_base_weight() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkSettings {
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for BookmarkSettings {
    fn default() -> Self {
        Self {
            session_idle_secs: default_session_idle_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_session_idle_secs() -> u64 { 3600 }
fn default_max_sessions() -> u64 { 10_000 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with INTERNSHIP__)
    /// 4. CATALOG_API_URL for the remote catalog endpoint
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERNSHIP__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("INTERNSHIP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    pub fn matching_rules(&self) -> MatchingRules {
        MatchingRules::from(&self.matching)
    }
}

/// Apply well-known environment variables that do not follow the prefix scheme
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("CATALOG_API_URL") {
        builder = builder.set_override("catalog.remote_url", url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skills, 40.0);
        assert_eq!(weights.sector, 30.0);
        assert_eq!(weights.location, 20.0);
        assert_eq!(weights.base, 10.0);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_matching_rules() {
        let settings = Settings::default();
        assert_eq!(settings.matching_rules(), MatchingRules::default());
        assert_eq!(settings.catalog.source, CatalogSource::Static);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                port = 9000

                [catalog]
                source = "remote"
                remote_url = "http://catalog.local"

                [scoring.weights]
                skills = 50.0
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.catalog.source, CatalogSource::Remote);
        assert_eq!(settings.scoring.weights.skills, 50.0);
        assert_eq!(settings.scoring.weights.sector, 30.0);
        assert_eq!(settings.matching.max_results, 5);
    }
}
