use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{PlayerCount, RegisterPlayerRequest, RegisteredPlayer};

pub async fn list_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.players() {
        Ok(players) => Json(players).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> impl IntoResponse {
    match state.service.register_player(&request.name) {
        Ok(player) => (
            StatusCode::CREATED,
            Json(RegisteredPlayer {
                id: player.id,
                name: player.name,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn count_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.count_players() {
        Ok(count) => Json(PlayerCount { count }).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.delete_players() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
