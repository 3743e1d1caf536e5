//! CLI configuration loader for LLM Council
//!
//! Merges the `.env` definitions file into the process environment exactly
//! once, then builds and validates the council configuration. The default
//! file is `./.env`; `--env-file` or `COUNCIL_ENV_FILE` point elsewhere.

use anyhow::{anyhow, Context, Result};
use council_core::config::DEFAULT_ENV_FILE;
use council_core::{CouncilConfig, EnvFileReport};
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration together with the record of how the environment was populated
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CouncilConfig,
    pub env_file: EnvFileReport,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override definitions file path
    env_file_override: Option<PathBuf>,
    /// Treat a chairman outside the council as an error
    strict: bool,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            env_file_override: None,
            strict: false,
        }
    }

    /// Set definitions file override
    pub fn with_env_file_override(mut self, path: PathBuf) -> Self {
        self.env_file_override = Some(path);
        self
    }

    /// Require the chairman to be a council member
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Definitions file this loader will read
    pub fn env_file(&self) -> PathBuf {
        self.env_file_override
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
    }

    /// Load and validate configuration
    pub fn load(&self) -> Result<LoadedConfig> {
        let env_file = self.env_file();
        debug!("Loading environment from {}", env_file.display());

        let (config, report) = CouncilConfig::load(&env_file).with_context(|| {
            format!("Failed to load environment file: {}", env_file.display())
        })?;

        self.check(&config)?;

        info!(
            "Council of {} model(s) chaired by {}",
            config.council_models().len(),
            config.chairman_model()
        );

        Ok(LoadedConfig {
            config,
            env_file: report,
        })
    }

    /// Validate a configuration, applying strict chairman membership if requested
    pub fn check(&self, config: &CouncilConfig) -> Result<()> {
        config
            .validate()
            .context("Configuration validation failed")?;

        if self.strict && !config.chairman_in_council() {
            return Err(anyhow!(
                "Chairman model '{}' is not one of the council models: {}",
                config.chairman_model(),
                config.council_models().join(", ")
            ));
        }

        Ok(())
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_env_file() {
        assert_eq!(CliConfigLoader::new().env_file(), PathBuf::from(".env"));
    }

    #[test]
    fn test_load_with_missing_override() {
        let dir = tempdir().unwrap();
        let loader = CliConfigLoader::new()
            .with_env_file_override(dir.path().join("missing.env"))
            .with_strict(true);

        let loaded = loader.load().unwrap();

        assert!(!loaded.env_file.found);
        assert_eq!(
            loaded.config.council_models(),
            CouncilConfig::default().council_models()
        );
        assert_eq!(loaded.config.chairman_model(), "google/gemini-3-pro-preview");
        assert_eq!(loaded.config.data_dir_str(), "data/conversations");
    }

    fn outside_chairman() -> CouncilConfig {
        CouncilConfig::new(
            vec!["openai/gpt-5.1".to_string(), "x-ai/grok-4".to_string()],
            "google/gemini-3-pro-preview",
            "data/conversations",
        )
    }

    #[test]
    fn test_strict_rejects_outside_chairman() {
        let err = CliConfigLoader::new()
            .with_strict(true)
            .check(&outside_chairman())
            .unwrap_err();

        assert!(err
            .to_string()
            .contains("Chairman model 'google/gemini-3-pro-preview' is not one of the council models"));
    }

    #[test]
    fn test_lenient_accepts_outside_chairman() {
        assert!(CliConfigLoader::new().check(&outside_chairman()).is_ok());
    }

    #[test]
    fn test_check_reports_validation_failure() {
        let config = CouncilConfig::new(
            vec!["a/one".to_string(), "a/one".to_string()],
            "a/one",
            "data/conversations",
        );

        let err = CliConfigLoader::new().check(&config).unwrap_err();

        assert_eq!(err.to_string(), "Configuration validation failed");
        assert!(format!("{:#}", err).contains("Duplicate council model: a/one"));
    }
}
