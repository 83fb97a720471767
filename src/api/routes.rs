use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    matches::{delete_matches, report_match},
    players::{count_players, delete_players, list_players, register_player},
    rounds::{get_pairings, get_standings},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/players",
            get(list_players).post(register_player).delete(delete_players),
        )
        .route("/api/players/count", get(count_players))
        .route("/api/matches", post(report_match).delete(delete_matches))
        .route("/api/standings", get(get_standings))
        .route("/api/pairings", get(get_pairings))
        .with_state(state)
}
