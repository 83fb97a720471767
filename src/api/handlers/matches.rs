use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::Value;
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::ReportMatchRequest;
use crate::errors::{Result, TournamentError};
use crate::sanitize;
use crate::swiss::PlayerId;

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> impl IntoResponse {
    let result = match_ids(&request)
        .and_then(|(winner, loser)| state.service.report_match(winner, loser));

    match result {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.delete_matches() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn match_ids(request: &ReportMatchRequest) -> Result<(PlayerId, PlayerId)> {
    let winner = player_id_from_json(&request.winner)?;
    let loser = player_id_from_json(&request.loser)?;
    Ok((winner, loser))
}

fn player_id_from_json(value: &Value) -> Result<PlayerId> {
    match value {
        Value::String(raw) => sanitize::parse_player_id(raw),
        Value::Number(number) => match number.as_i64() {
            Some(id) => sanitize::validate_player_id(id),
            None => Err(TournamentError::InvalidId(number.to_string())),
        },
        other => Err(TournamentError::InvalidId(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_id_from_json() {
        assert_eq!(player_id_from_json(&json!(7)).unwrap(), 7);
        assert_eq!(player_id_from_json(&json!("7")).unwrap(), 7);
        assert!(matches!(player_id_from_json(&json!("abc")), Err(TournamentError::InvalidId(s)) if s == "abc"));
        assert!(matches!(player_id_from_json(&json!(1.5)), Err(TournamentError::InvalidId(s)) if s == "1.5"));
        assert!(matches!(player_id_from_json(&json!(null)), Err(TournamentError::InvalidId(_))));
        assert!(matches!(player_id_from_json(&json!(-2)), Err(TournamentError::InvalidId(_))));
    }
}
