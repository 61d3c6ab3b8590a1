use config::{Config, ConfigError, Environment, File};
use domain::DomainError;
use serde::{Deserialize, Serialize};

/// Where the controller keeps its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryBackend {
    /// Lost on exit; useful for demos and tests
    Memory,
    Sqlite,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RepositoryConfig {
    #[serde(default = "default_backend")]
    pub backend: RepositoryBackend,
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_backend() -> RepositoryBackend {
    RepositoryBackend::Sqlite
}
fn default_database_url() -> String {
    "sqlite://data/security.db?mode=rwc".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database_url: default_database_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImageConfig {
    /// Percent confidence at which an image counts as a cat
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
    /// Score reported by the stand-in classifier when no score is supplied
    #[serde(default)]
    pub default_score: f32,
}

fn default_confidence_threshold() -> f32 {
    50.0
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            default_score: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ControllerConfig {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

impl ControllerConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default settings
            .set_default("repository.backend", "sqlite")?
            .set_default("repository.database_url", default_database_url())?
            .set_default("image.confidence_threshold", 50.0)?
            .set_default("image.default_score", 0.0)?
            // Site-wide file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run-mode overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. ALARM__IMAGE__CONFIDENCE_THRESHOLD=65)
            .add_source(Environment::with_prefix("ALARM").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let threshold = self.image.confidence_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(DomainError::InvalidConfiguration(format!(
                "image.confidence_threshold must be within 0..=100, got {threshold}"
            )));
        }

        let score = self.image.default_score;
        if !(0.0..=100.0).contains(&score) {
            return Err(DomainError::InvalidConfiguration(format!(
                "image.default_score must be within 0..=100, got {score}"
            )));
        }

        if self.repository.backend == RepositoryBackend::Sqlite
            && self.repository.database_url.trim().is_empty()
        {
            return Err(DomainError::InvalidConfiguration(
                "repository.database_url is required for the sqlite backend".to_string(),
            ));
        }

        Ok(())
    }
}
