// src/services/elections.rs
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::message::{Candidate, Coordinates, PollingStation};

#[derive(Debug, Error)]
pub enum ElectionsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned {0}")]
    Status(StatusCode),

    #[error("no polling station matched the query")]
    NotFound,

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// What to look a polling station up by.
#[derive(Debug, Clone)]
pub enum StationLookup {
    Address(String),
    VoterId(String),
}

/// Client for the election-commission data API. Responses are
/// normalized into the fixed local shapes; nothing is cached.
#[derive(Debug, Clone)]
pub struct ElectionsClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

// Upstream wire shapes, kept private to the client.
#[derive(Deserialize)]
struct UpstreamStation {
    name: String,
    address: String,
    location: Option<UpstreamLocation>,
}

#[derive(Deserialize)]
struct UpstreamLocation {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct UpstreamCandidates {
    candidates: Vec<UpstreamCandidate>,
}

#[derive(Deserialize)]
struct UpstreamCandidate {
    name: String,
    party: String,
    symbol: String,
}

impl ElectionsClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.into(),
            api_key,
            client,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url);
        if let Some(key) = &self.api_key {
            req = req.header("X-Api-Key", key);
        }
        req
    }

    pub async fn find_polling_station(
        &self,
        lookup: &StationLookup,
    ) -> Result<PollingStation, ElectionsError> {
        let (param, value) = match lookup {
            StationLookup::Address(a) => ("address", a.as_str()),
            StationLookup::VoterId(v) => ("voter_id", v.as_str()),
        };

        let url = format!("{}/polling-stations", self.base_url.trim_end_matches('/'));
        tracing::debug!(%param, "polling station lookup");

        let response = self.get(&url).query(&[(param, value)]).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ElectionsError::NotFound),
            status if !status.is_success() => return Err(ElectionsError::Status(status)),
            _ => {}
        }

        let station: UpstreamStation = response
            .json()
            .await
            .map_err(|e| ElectionsError::InvalidResponse(e.to_string()))?;

        Ok(PollingStation {
            station_name: station.name,
            address: station.address,
            coordinates: station.location.map(|l| Coordinates {
                lat: l.lat,
                lon: l.lng,
            }),
        })
    }

    /// Candidates for a constituency, in upstream order. An unknown
    /// constituency id is an empty list, not an error.
    pub async fn list_candidates(
        &self,
        constituency_id: &str,
    ) -> Result<Vec<Candidate>, ElectionsError> {
        let url = format!(
            "{}/constituencies/{}/candidates",
            self.base_url.trim_end_matches('/'),
            constituency_id
        );

        let response = self.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(Vec::new()),
            status if !status.is_success() => return Err(ElectionsError::Status(status)),
            _ => {}
        }

        let body: UpstreamCandidates = response
            .json()
            .await
            .map_err(|e| ElectionsError::InvalidResponse(e.to_string()))?;

        Ok(body
            .candidates
            .into_iter()
            .map(|c| Candidate {
                name: c.name,
                party: c.party,
                symbol: c.symbol,
            })
            .collect())
    }
}
