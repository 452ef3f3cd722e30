// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_SESSION_TTL_SECS: u64 = 1800;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// The subset of the Firebase web config the backend needs. The full
/// JSON blob from the Firebase console is accepted; extra keys are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
}

/// Runtime configuration, read once at startup from the environment
/// (`.env` supported via dotenvy).
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub firebase: FirebaseConfig,
    pub identity_base_url: String,
    pub elections_base_url: String,
    pub elections_api_key: Option<String>,
    pub secret_key: String,
    pub session_ttl: Duration,
    pub upstream_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let temperature = match env::var("TEMPERATURE") {
            Ok(raw) => raw.parse::<f32>().map_err(|e| ConfigError::InvalidVar {
                name: "TEMPERATURE",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_TEMPERATURE,
        };

        let firebase_raw =
            env::var("FIREBASE_CONFIG").map_err(|_| ConfigError::MissingVar("FIREBASE_CONFIG"))?;
        let firebase: FirebaseConfig =
            serde_json::from_str(&firebase_raw).map_err(|e| ConfigError::InvalidVar {
                name: "FIREBASE_CONFIG",
                reason: e.to_string(),
            })?;

        let session_ttl_secs = match env::var("SESSION_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidVar {
                name: "SESSION_TTL_SECS",
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|_| ConfigError::MissingVar("OPENAI_API_KEY"))?,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature,
            firebase,
            identity_base_url: env::var("IDENTITY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_BASE_URL.to_string()),
            elections_base_url: env::var("ELECTIONS_API_URL")
                .map_err(|_| ConfigError::MissingVar("ELECTIONS_API_URL"))?,
            elections_api_key: env::var("ELECTIONS_API_KEY").ok(),
            // Kept because deployments document it; nothing server-side signs
            // cookies yet.
            secret_key: env::var("SECRET_KEY")
                .unwrap_or_else(|_| "a-very-secret-key-for-development".to_string()),
            session_ttl: Duration::from_secs(session_ttl_secs),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firebase_config_accepts_full_console_blob() {
        let raw = r#"{
            "apiKey": "AIzaTest",
            "authDomain": "vote-buddy.firebaseapp.com",
            "projectId": "vote-buddy",
            "appId": "1:234:web:abc"
        }"#;
        let cfg: FirebaseConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.api_key, "AIzaTest");
    }

    #[test]
    fn firebase_config_rejects_missing_api_key() {
        let raw = r#"{"projectId": "vote-buddy"}"#;
        assert!(serde_json::from_str::<FirebaseConfig>(raw).is_err());
    }
}
