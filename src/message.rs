// src/message.rs
use serde::{Deserialize, Serialize};

/// Languages the assistant can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub text: String,
    pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub status: String,
    pub message: String,
}

/// Query string for `GET /polling-station`. Exactly one of the two
/// fields must be present.
#[derive(Debug, Deserialize)]
pub struct PollingStationQuery {
    pub address: Option<String>,
    pub voter_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingStation {
    pub station_name: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateQuery {
    pub constituency_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub party: String,
    pub symbol: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateList {
    pub candidates: Vec<Candidate>,
}
