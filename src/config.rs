//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL, DEFAULT_PUBLIC_JUDGE_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub judge: JudgeConfig,
    pub assistant: AssistantConfig,
    pub firebase: FirebaseConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Remote judge configuration
///
/// When both `host` and `api_key` are present the asynchronous submit/poll
/// path is used; otherwise submissions go to the public endpoint with
/// `wait=true`.
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    pub host: Option<String>,
    pub api_key: Option<String>,
    pub public_url: String,
}

/// Generative-provider configuration for the assistant.
///
/// Each API key is optional; a missing key simply removes that provider from
/// the fallback chain.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

/// Identity provider + document store configuration
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub project_id: String,
    pub api_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            assistant: AssistantConfig::from_env()?,
            firebase: FirebaseConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("JUDGE_API_HOST").ok().filter(|v| !v.is_empty()),
            api_key: env::var("JUDGE_API_KEY").ok().filter(|v| !v.is_empty()),
            public_url: env::var("JUDGE_PUBLIC_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_JUDGE_URL.to_string()),
        })
    }

    /// True when the authenticated high-limit host can be used
    pub fn has_authenticated_host(&self) -> bool {
        self.host.is_some() && self.api_key.is_some()
    }
}

impl AssistantConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|v| !v.is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
        })
    }
}

impl FirebaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: env::var("FIREBASE_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("FIREBASE_PROJECT_ID".to_string()))?,
            api_key: env::var("FIREBASE_API_KEY")
                .map_err(|_| ConfigError::Missing("FIREBASE_API_KEY".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_judge_path_selection() {
        let sync_only = JudgeConfig {
            host: None,
            api_key: None,
            public_url: DEFAULT_PUBLIC_JUDGE_URL.to_string(),
        };
        assert!(!sync_only.has_authenticated_host());

        let keyed = JudgeConfig {
            host: Some("judge.example.com".to_string()),
            api_key: Some("secret".to_string()),
            public_url: DEFAULT_PUBLIC_JUDGE_URL.to_string(),
        };
        assert!(keyed.has_authenticated_host());

        // A host without a key is not enough for the authenticated path
        let host_only = JudgeConfig {
            host: Some("judge.example.com".to_string()),
            api_key: None,
            public_url: DEFAULT_PUBLIC_JUDGE_URL.to_string(),
        };
        assert!(!host_only.has_authenticated_host());
    }
}
