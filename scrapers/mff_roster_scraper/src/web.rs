use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info, warn};

use crate::{
    assembler::RosterAssembler,
    fetcher::HtmlFetcher,
    metrics::MetricsCollector,
    types::PlayerRecord,
};

pub struct AppState<F: HtmlFetcher> {
    pub assembler: Arc<RosterAssembler<F>>,
    pub metrics: MetricsCollector,
    /// Last roster that was assembled without a listing failure.
    pub latest: Arc<RwLock<Vec<PlayerRecord>>>,
}

impl<F: HtmlFetcher> AppState<F> {
    pub fn new(assembler: RosterAssembler<F>, metrics: MetricsCollector) -> Self {
        Self {
            assembler: Arc::new(assembler),
            metrics,
            latest: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<F: HtmlFetcher> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            assembler: Arc::clone(&self.assembler),
            metrics: self.metrics.clone(),
            latest: Arc::clone(&self.latest),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub url: String,
}

fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

#[axum::debug_handler]
pub async fn index_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "MFF Player API is running" }))
}

pub async fn players_handler<F: HtmlFetcher + 'static>(State(state): State<AppState<F>>) -> Response {
    info!("Request received for /players");
    match state.assembler.build_roster().await {
        Ok(players) => {
            *state.latest.write().unwrap_or_else(PoisonError::into_inner) = players.clone();
            Json(players).into_response()
        }
        Err(e) => {
            error!("Error scraping players: {}", e);
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch players")
        }
    }
}

pub async fn latest_players_handler<F: HtmlFetcher + 'static>(
    State(state): State<AppState<F>>,
) -> Json<Vec<PlayerRecord>> {
    let players = state.latest.read().unwrap_or_else(PoisonError::into_inner).clone();
    Json(players)
}

pub async fn player_details_handler<F: HtmlFetcher + 'static>(
    State(state): State<AppState<F>>,
    Query(query): Query<DetailsQuery>,
) -> Response {
    match state.assembler.player_details(&query.url).await {
        Ok(details) => Json(details).into_response(),
        Err(e) => {
            warn!("Error scraping details: {}", e);
            detail_response(StatusCode::NOT_FOUND, "Player not found")
        }
    }
}

/// Placeholder login so clients expecting a bearer token can proceed.
#[axum::debug_handler]
pub async fn token_handler() -> Json<TokenResponse> {
    Json(TokenResponse {
        access_token: "mock-jwt-token".to_string(),
        token_type: "bearer".to_string(),
    })
}

pub async fn stats_handler<F: HtmlFetcher + 'static>(State(state): State<AppState<F>>) -> impl IntoResponse {
    Json(state.metrics.get_metrics())
}

pub fn router<F: HtmlFetcher + 'static>(state: AppState<F>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/players", get(players_handler::<F>))
        .route("/players/latest", get(latest_players_handler::<F>))
        .route("/players/details", get(player_details_handler::<F>))
        .route("/token", post(token_handler))
        .route("/stats", get(stats_handler::<F>))
        .with_state(state)
}

pub async fn serve<F: HtmlFetcher + 'static>(state: AppState<F>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("MFF Player API listening on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
