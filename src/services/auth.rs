// src/services/auth.rs
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token rejected by identity provider")]
    Rejected,

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Identity attached to the request after a successful verification.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub uid: String,
    pub email: Option<String>,
}

/// Verifies bearer tokens against the identity provider's REST
/// `accounts:lookup` endpoint (Firebase Identity Toolkit shape).
#[derive(Debug, Clone)]
pub struct AuthVerifier {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
}

impl AuthVerifier {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        }
    }

    pub async fn verify(&self, id_token: &str) -> Result<UserIdentity, AuthError> {
        let url = format!("{}/accounts:lookup", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({ "idToken": id_token }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected);
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        let user = body.users.into_iter().next().ok_or(AuthError::Rejected)?;

        Ok(UserIdentity {
            uid: user.local_id,
            email: user.email,
        })
    }
}
