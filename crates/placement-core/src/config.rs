//! Configuration management for placement services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`PLACEMENT__` prefix, `__` separator)
//! 2. Config file (`placement.toml`)
//! 3. Defaults

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{PlacementError, Result};

/// Destination company used when none is configured.
pub const DEFAULT_TARGET_COMPANY: &str = "CIT";

/// Top-level settings, one field per config section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub neo4j: Neo4jSettings,
}

/// The `[placement]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementConfig {
    /// Company a student path must reach for placement to be possible.
    #[serde(default = "default_target_company")]
    pub target_company: String,

    /// Which record store backs the engine.
    #[serde(default)]
    pub store: StoreBackend,

    /// JSON file used to seed the in-memory store.
    #[serde(default)]
    pub seed_file: Option<String>,
}

/// Record store backends.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Neo4j,
}

/// The `[neo4j]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

fn default_target_company() -> String {
    DEFAULT_TARGET_COMPANY.to_string()
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "placement-dev".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            target_company: default_target_company(),
            store: StoreBackend::default(),
            seed_file: None,
        }
    }
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl Settings {
    /// Load settings from `<file_prefix>.toml` (optional) and the environment.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(file_prefix).required(false))
            .add_source(
                Environment::with_prefix("PLACEMENT")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder)
    }

    /// Load settings from an inline TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(contents, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        tracing::debug!(
            target_company = %settings.placement.target_company,
            store = ?settings.placement.store,
            "Loaded placement settings"
        );
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.placement.target_company.trim().is_empty() {
            return Err(PlacementError::InvalidConfig(
                "placement.target_company must not be empty".to_string(),
            ));
        }
        if self.placement.store == StoreBackend::Neo4j && self.neo4j.uri.is_empty() {
            return Err(PlacementError::InvalidConfig(
                "neo4j.uri is required for the neo4j store".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.placement.target_company, "CIT");
        assert_eq!(settings.placement.store, StoreBackend::Memory);
        assert!(settings.placement.seed_file.is_none());
        assert_eq!(settings.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(settings.neo4j.max_connections, 16);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.placement.target_company, DEFAULT_TARGET_COMPANY);
        assert_eq!(settings.neo4j.fetch_size, 256);
    }

    #[test]
    fn test_sections_override_defaults() {
        let settings = Settings::from_toml(
            r#"
            [placement]
            target_company = "Initech"
            store = "neo4j"

            [neo4j]
            uri = "bolt://graph:7687"
            password = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(settings.placement.target_company, "Initech");
        assert_eq!(settings.placement.store, StoreBackend::Neo4j);
        assert_eq!(settings.neo4j.uri, "bolt://graph:7687");
        assert_eq!(settings.neo4j.password, "secret");
        assert_eq!(settings.neo4j.user, "neo4j");
    }

    #[test]
    fn test_blank_target_rejected() {
        let err = Settings::from_toml(
            r#"
            [placement]
            target_company = "   "
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, PlacementError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file_is_optional() {
        let settings = Settings::load("does-not-exist-placement-config").unwrap();
        assert!(!settings.placement.target_company.is_empty());
    }
}
