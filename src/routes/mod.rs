// src/routes/mod.rs
pub mod chat;
pub mod lookup;

use crate::error::AppError;
use crate::services::auth::AuthError;
use crate::state::SharedState;
use axum::{
    Router,
    extract::{Request, State},
    http::header,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler, reset_handler};
use lookup::{candidates_handler, polling_station_handler};
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let protected = Router::new()
        .route("/chat/reset", post(reset_handler))
        .route("/admin/metrics", get(get_metrics_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/polling-station", get(polling_station_handler))
        .route("/candidates", get(candidates_handler))
        .route("/health", get(|| async { "OK" }))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Bearer-token check against the identity provider.
async fn auth_middleware(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
        .ok_or(AppError::Unauthorized)?;

    match state.auth.verify(&token).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Err(AuthError::Request(err)) => {
            tracing::warn!(error = %err, "identity provider unreachable");
            Err(AppError::Unavailable(
                "Sign-in verification is unavailable right now. Please try again shortly.",
            ))
        }
        Err(err) => {
            tracing::debug!(error = %err, "token rejected");
            Err(AppError::Unauthorized)
        }
    }
}
