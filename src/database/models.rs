use chrono::NaiveDateTime;

use crate::swiss::{MatchResult, Player};

#[derive(Debug, Clone)]
pub struct DbPlayer {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct DbMatch {
    pub id: i64,
    pub winner: i64,
    pub loser: i64,
    pub created_at: Option<NaiveDateTime>,
}

impl From<DbPlayer> for Player {
    fn from(row: DbPlayer) -> Self {
        Player::new(row.id, row.name)
    }
}

impl From<DbMatch> for MatchResult {
    fn from(row: DbMatch) -> Self {
        MatchResult::new(row.winner, row.loser)
    }
}
