// src/routes/lookup.rs
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::AppError,
    message::{CandidateList, CandidateQuery, PollingStation, PollingStationQuery},
    services::elections::{ElectionsError, StationLookup},
    state::SharedState,
};

pub async fn polling_station_handler(
    State(state): State<SharedState>,
    Query(query): Query<PollingStationQuery>,
) -> Result<Json<PollingStation>, AppError> {
    let lookup = match (query.address, query.voter_id) {
        (Some(a), None) if !a.trim().is_empty() => StationLookup::Address(a),
        (None, Some(v)) if !v.trim().is_empty() => StationLookup::VoterId(v),
        _ => {
            return Err(AppError::BadRequest(
                "Provide exactly one of 'address' or 'voter_id'".to_string(),
            ));
        }
    };

    state.metrics.record_endpoint("/polling-station").await;

    match state.elections.find_polling_station(&lookup).await {
        Ok(station) => Ok(Json(station)),
        Err(ElectionsError::NotFound) => Err(AppError::NotFound(
            "No polling station found for that query".to_string(),
        )),
        Err(err) => Err(lookup_error(err)),
    }
}

pub async fn candidates_handler(
    State(state): State<SharedState>,
    Query(query): Query<CandidateQuery>,
) -> Result<Json<CandidateList>, AppError> {
    let constituency_id = query.constituency_id.trim();
    if constituency_id.is_empty() {
        return Err(AppError::BadRequest(
            "'constituency_id' must not be empty".to_string(),
        ));
    }

    state.metrics.record_endpoint("/candidates").await;

    let candidates = state
        .elections
        .list_candidates(constituency_id)
        .await
        .map_err(lookup_error)?;

    Ok(Json(CandidateList { candidates }))
}

fn lookup_error(err: ElectionsError) -> AppError {
    match err {
        ElectionsError::Status(code) => AppError::Upstream(code),
        other => {
            tracing::error!(error = %other, "election data lookup failed");
            AppError::Unavailable("Election data is unavailable right now. Please try again shortly.")
        }
    }
}
