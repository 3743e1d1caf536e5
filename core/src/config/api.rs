//! Model gateway settings read from the environment after the definitions file is merged

use serde::Serialize;

/// Variable holding the OpenRouter API key
pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Variable overriding the OpenRouter endpoint
pub const OPENROUTER_API_URL_VAR: &str = "OPENROUTER_API_URL";

/// Default OpenRouter chat completions endpoint
pub const DEFAULT_OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Settings for the OpenRouter gateway all council models are reached through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSettings {
    /// API key; never serialized
    #[serde(skip_serializing)]
    pub openrouter_api_key: Option<String>,
    /// Chat completions endpoint
    pub openrouter_api_url: String,
}

impl ApiSettings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            openrouter_api_key: non_empty(OPENROUTER_API_KEY_VAR),
            openrouter_api_url: non_empty(OPENROUTER_API_URL_VAR)
                .unwrap_or_else(|| DEFAULT_OPENROUTER_API_URL.to_string()),
        }
    }

    /// Whether an API key is available
    pub fn has_api_key(&self) -> bool {
        self.openrouter_api_key.is_some()
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            openrouter_api_url: DEFAULT_OPENROUTER_API_URL.to_string(),
        }
    }
}
