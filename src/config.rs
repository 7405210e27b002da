use crate::ai::ModelRoutes;
use crate::prompt::SYSTEM_INSTRUCTION;
use crate::session::AssistantSettings;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `MEETING_ASSISTANT__SERVICE__HTTP__PORT=9000`
pub const ENV_PREFIX: &str = "MEETING_ASSISTANT";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub ai: AiConfig,
    pub assistant: AssistantSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Generative Language API root
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub system_instruction: String,
    pub models: ModelRoutes,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "meeting-assistant".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::ai::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 120,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            models: ModelRoutes::default(),
        }
    }
}

impl Config {
    /// Load `path` (any format the `config` crate recognises, extension
    /// optional) layered under `MEETING_ASSISTANT__*` environment variables.
    /// A missing file falls back to defaults.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read config from {path}"))?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }
}
