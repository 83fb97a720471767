use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorBody;
use crate::database::SqliteStore;
use crate::errors::TournamentError;
use crate::services::TournamentService;

pub mod matches;
pub mod players;
pub mod rounds;

pub struct AppState {
    pub service: TournamentService<SqliteStore>,
}

pub fn error_response(err: TournamentError) -> Response {
    let status = match &err {
        TournamentError::OddPlayerCount(_) => StatusCode::CONFLICT,
        TournamentError::InvalidId(_) | TournamentError::InvalidName => StatusCode::BAD_REQUEST,
        TournamentError::PersistenceUnavailable(_) => {
            log::error!("Request failed: {:?}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}
