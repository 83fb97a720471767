use log::debug;

use super::types::{PairingRecord, StandingRecord};
use crate::errors::{Result, TournamentError};

/// Pairs each player with their neighbour in the standings.
///
/// Positions (0, 1), (2, 3), ... become the next round's matches, so every
/// pair shares an equal or adjacent win count as long as the input is sorted.
/// Previous opponents are not taken into account.
pub fn compute_pairings(standings: &[StandingRecord]) -> Result<Vec<PairingRecord>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairings: Vec<PairingRecord> = standings
        .chunks_exact(2)
        .map(|pair| PairingRecord::from_standings(&pair[0], &pair[1]))
        .collect();

    debug!("Paired {} players into {} matches", standings.len(), pairings.len());
    Ok(pairings)
}
