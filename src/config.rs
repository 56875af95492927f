//! Configuration management for the resume optimizer

use crate::error::{Result, ResumeOptimizerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted first during credential resolution.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Default OpenAI API endpoint prefix.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API endpoint prefix; override to route through a proxy
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    pub key_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                model: "gpt-3.5-turbo-0125".to_string(),
                max_tokens: 300,
                temperature: 0.7,
                request_timeout_secs: 30,
                key_file: PathBuf::from("api_key"),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeOptimizerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeOptimizerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-optimizer")
            .join("config.toml")
    }

    /// Resolve the OpenAI API key: environment variable first, then the
    /// configured key file in the working directory. Returns an error when
    /// neither is available; callers decide whether that is fatal (scoring
    /// works without a key, recommendations do not).
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            let key = key.trim().to_string();
            if !key.is_empty() {
                return Ok(key);
            }
        }

        match std::fs::read_to_string(&self.api.key_file) {
            Ok(contents) => {
                let key = contents.trim().to_string();
                if key.is_empty() {
                    Err(ResumeOptimizerError::Credential(format!(
                        "API key file '{}' is empty",
                        self.api.key_file.display()
                    )))
                } else {
                    Ok(key)
                }
            }
            Err(_) => Err(ResumeOptimizerError::Credential(format!(
                "Set {} or place a key in '{}'",
                API_KEY_ENV_VAR,
                self.api.key_file.display()
            ))),
        }
    }
}
