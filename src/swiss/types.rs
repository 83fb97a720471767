use serde::{Deserialize, Serialize};

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl MatchResult {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self { winner, loser }
    }

    pub fn is_self_match(&self) -> bool {
        self.winner == self.loser
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRecord {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRecord {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl PairingRecord {
    pub fn from_standings(first: &StandingRecord, second: &StandingRecord) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}
