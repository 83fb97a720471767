use std::collections::HashMap;
use log::debug;

use super::types::{MatchResult, Player, PlayerId, StandingRecord};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u32,
    matches_played: u32,
}

/// Builds one standing per registered player, ordered by wins descending.
/// Players with equal wins are ordered by id ascending.
pub fn compute_standings(players: &[Player], matches: &[MatchResult]) -> Vec<StandingRecord> {
    debug!(
        "Computing standings for {} players over {} matches",
        players.len(),
        matches.len()
    );

    let tallies = tally_matches(players, matches);

    let mut standings: Vec<StandingRecord> = players
        .iter()
        .map(|player| {
            let tally = tallies.get(&player.id).copied().unwrap_or_default();
            StandingRecord {
                id: player.id,
                name: player.name.clone(),
                wins: tally.wins,
                matches_played: tally.matches_played,
            }
        })
        .collect();

    sort_standings(&mut standings);
    standings
}

fn tally_matches(players: &[Player], matches: &[MatchResult]) -> HashMap<PlayerId, Tally> {
    let mut tallies: HashMap<PlayerId, Tally> = players
        .iter()
        .map(|p| (p.id, Tally::default()))
        .collect();

    for game in matches {
        if let Some(tally) = tallies.get_mut(&game.winner) {
            tally.wins += 1;
            tally.matches_played += 1;
        }
        // A self-match is one participation, not two
        if game.is_self_match() {
            continue;
        }
        if let Some(tally) = tallies.get_mut(&game.loser) {
            tally.matches_played += 1;
        }
    }

    tallies
}

fn sort_standings(standings: &mut [StandingRecord]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}
