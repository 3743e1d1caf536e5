//! Council configuration types
//!
//! A `CouncilConfig` is built once at startup and handed to consumers by
//! reference. Accessors are read-only: the member list, chairman and data
//! directory are fixed for the lifetime of the process.

use crate::config::api::ApiSettings;
use crate::config::env_file::{EnvFileLoader, EnvFileReport};
use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Models consulted by the council, in presentation order
pub const COUNCIL_MODELS: [&str; 4] = [
    "openai/gpt-5.1",
    "google/gemini-3-pro-preview",
    "anthropic/claude-sonnet-4.5",
    "x-ai/grok-4",
];

/// Model that synthesizes the final answer
pub const CHAIRMAN_MODEL: &str = "google/gemini-3-pro-preview";

/// Directory conversations are stored under
pub const DATA_DIR: &str = "data/conversations";

/// Default council membership
pub fn default_council_models() -> Vec<String> {
    COUNCIL_MODELS.iter().map(|m| m.to_string()).collect()
}

/// Default chairman model
pub fn default_chairman_model() -> String {
    CHAIRMAN_MODEL.to_string()
}

/// Default conversation storage directory
pub fn default_data_dir() -> String {
    DATA_DIR.to_string()
}

/// Resolved council configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouncilConfig {
    /// Council members; order decides presentation and voting order
    council_models: Vec<String>,
    /// Chairman model identifier
    chairman_model: String,
    /// Conversation storage directory, neither checked nor created here
    data_dir: String,
    /// Settings for the model gateway
    api: ApiSettings,
}

impl CouncilConfig {
    /// Create a configuration with explicit membership and storage location
    pub fn new(
        council_models: Vec<String>,
        chairman_model: impl Into<String>,
        data_dir: impl Into<String>,
    ) -> Self {
        Self {
            council_models,
            chairman_model: chairman_model.into(),
            data_dir: data_dir.into(),
            api: ApiSettings::default(),
        }
    }

    /// Replace the model gateway settings
    pub fn with_api(mut self, api: ApiSettings) -> Self {
        self.api = api;
        self
    }

    /// Merge the definitions file into the environment, then build the configuration.
    ///
    /// This is the single startup entry point; call it once and pass the
    /// result to whatever needs it.
    pub fn load<P: AsRef<Path>>(env_file: P) -> Result<(Self, EnvFileReport)> {
        let report = EnvFileLoader::new(env_file).load()?;
        let config = Self::default().with_api(ApiSettings::from_env());
        debug!(
            "Council configuration loaded: {} member(s), chairman {}",
            config.council_models.len(),
            config.chairman_model
        );
        Ok((config, report))
    }

    /// Council members in order
    pub fn council_models(&self) -> &[String] {
        &self.council_models
    }

    /// Chairman model identifier
    pub fn chairman_model(&self) -> &str {
        &self.chairman_model
    }

    /// Conversation storage directory
    pub fn data_dir(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Conversation storage directory as a string
    pub fn data_dir_str(&self) -> &str {
        &self.data_dir
    }

    /// Model gateway settings
    pub fn api(&self) -> &ApiSettings {
        &self.api
    }

    /// Whether the chairman also sits on the council
    pub fn chairman_in_council(&self) -> bool {
        self.council_models.iter().any(|m| m == &self.chairman_model)
    }

    /// File a conversation with the given id is stored in
    pub fn conversation_path(&self, conversation_id: &str) -> Result<PathBuf> {
        if conversation_id.is_empty()
            || conversation_id == "."
            || conversation_id.contains("..")
            || conversation_id.contains('/')
            || conversation_id.contains('\\')
        {
            return Err(ConfigError::InvalidValue {
                field: "conversation_id".to_string(),
                value: conversation_id.to_string(),
            }
            .into());
        }

        Ok(self.data_dir().join(format!("{}.json", conversation_id)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.council_models.is_empty() {
            return Err(ConfigError::MissingField {
                field: "council_models".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for (index, model) in self.council_models.iter().enumerate() {
            if model.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("council_models[{}]", index),
                    value: model.clone(),
                }
                .into());
            }
            if !seen.insert(model.as_str()) {
                return Err(ConfigError::DuplicateModel {
                    model: model.clone(),
                }
                .into());
            }
        }

        if self.chairman_model.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "chairman_model".to_string(),
            }
            .into());
        }

        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "data_dir".to_string(),
            }
            .into());
        }

        // Membership is a convention only
        if !self.chairman_in_council() {
            warn!(
                "Chairman model {} is not a council member",
                self.chairman_model
            );
        }

        Ok(())
    }
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self::new(
            default_council_models(),
            default_chairman_model(),
            default_data_dir(),
        )
    }
}
