// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::services::auth::AuthVerifier;
use crate::services::elections::ElectionsClient;
use crate::services::llm::LlmClient;
use crate::services::metrics_manager::MetricsManager;
use crate::services::session_manager::SessionManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sessions: SessionManager,
    pub metrics: MetricsManager,
    pub llm: LlmClient,
    pub elections: ElectionsClient,
    pub auth: AuthVerifier,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sessions: SessionManager::new(settings.session_ttl),
            metrics: MetricsManager::new(),
            llm: LlmClient::new(
                settings.openai_base_url.clone(),
                settings.openai_api_key.clone(),
                settings.model.clone(),
                settings.temperature,
                settings.upstream_timeout,
            ),
            elections: ElectionsClient::new(
                settings.elections_base_url.clone(),
                settings.elections_api_key.clone(),
                settings.upstream_timeout,
            ),
            auth: AuthVerifier::new(
                settings.identity_base_url.clone(),
                settings.firebase.api_key.clone(),
                settings.upstream_timeout,
            ),
        }
    }
}
