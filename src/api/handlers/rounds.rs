use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.standings() {
        Ok(standings) => Json(standings).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_pairings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.pairings() {
        Ok(pairings) => Json(pairings).into_response(),
        Err(e) => error_response(e),
    }
}
