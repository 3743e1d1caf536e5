//! Text and JSON formatters for the council configuration

use crate::config::LoadedConfig;
use anyhow::Result;
use clap::ValueEnum;
use council_core::EnvFileReport;
use serde::Serialize;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Serializable snapshot; the API key itself is reduced to a flag
#[derive(Debug, Serialize)]
struct ConfigView<'a> {
    council_models: &'a [String],
    chairman_model: &'a str,
    data_dir: &'a str,
    openrouter_api_url: &'a str,
    openrouter_api_key_set: bool,
    env_file: &'a EnvFileReport,
}

impl<'a> From<&'a LoadedConfig> for ConfigView<'a> {
    fn from(loaded: &'a LoadedConfig) -> Self {
        let config = &loaded.config;
        Self {
            council_models: config.council_models(),
            chairman_model: config.chairman_model(),
            data_dir: config.data_dir_str(),
            openrouter_api_url: &config.api().openrouter_api_url,
            openrouter_api_key_set: config.api().has_api_key(),
            env_file: &loaded.env_file,
        }
    }
}

/// Render the configuration in the requested format
pub fn render(loaded: &LoadedConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(loaded)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ConfigView::from(loaded))?),
    }
}

fn render_text(loaded: &LoadedConfig) -> String {
    let config = &loaded.config;
    let api = config.api();

    let mut out = String::from("Council models:\n");
    for (index, model) in config.council_models().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, model));
    }
    out.push_str(&format!("Chairman model: {}\n", config.chairman_model()));
    out.push_str(&format!("Data directory: {}\n", config.data_dir_str()));
    out.push_str(&format!("OpenRouter endpoint: {}\n", api.openrouter_api_url));
    out.push_str(&format!(
        "OpenRouter API key: {}\n",
        if api.has_api_key() { "set" } else { "unset" }
    ));
    out.push_str(&format!(
        "Environment file: {}",
        describe_env_file(&loaded.env_file)
    ));

    out
}

fn describe_env_file(report: &EnvFileReport) -> String {
    if !report.found {
        return format!("{} (not found)", report.path.display());
    }

    let mut description = format!(
        "{} ({} applied, {} preserved",
        report.path.display(),
        report.applied.len(),
        report.preserved.len()
    );
    if report.malformed_lines > 0 {
        description.push_str(&format!(", {} malformed", report.malformed_lines));
    }
    description.push(')');
    description
}
