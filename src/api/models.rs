use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::swiss::PlayerId;

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredPlayer {
    pub id: PlayerId,
    pub name: String,
}

/// Ids stay raw JSON so that strings and non-integers reach id validation.
#[derive(Debug, Deserialize)]
pub struct ReportMatchRequest {
    pub winner: Value,
    pub loser: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerCount {
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
