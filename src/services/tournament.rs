use log::{debug, info};

use crate::database::TournamentStore;
use crate::errors::Result;
use crate::sanitize;
use crate::swiss::{self, PairingRecord, Player, PlayerId, StandingRecord};

pub struct TournamentService<S> {
    store: S,
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores the sanitized name and returns the player as registered.
    pub fn register_player(&self, name: &str) -> Result<Player> {
        let clean_name = sanitize::sanitize_name(name)?;
        let id = self.store.insert_player(&clean_name)?;
        info!("Registered player {} ({})", id, clean_name);
        Ok(Player::new(id, clean_name))
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        let winner = sanitize::validate_player_id(winner)?;
        let loser = sanitize::validate_player_id(loser)?;
        self.store.insert_match(winner, loser)?;
        info!("Recorded match: {} beat {}", winner, loser);
        Ok(())
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        self.store.fetch_all_players()
    }

    pub fn count_players(&self) -> Result<usize> {
        self.store.count_players()
    }

    pub fn delete_matches(&self) -> Result<()> {
        self.store.clear_matches()?;
        info!("All matches deleted");
        Ok(())
    }

    pub fn delete_players(&self) -> Result<()> {
        self.store.clear_players()?;
        info!("All players deleted");
        Ok(())
    }

    pub fn standings(&self) -> Result<Vec<StandingRecord>> {
        let (players, matches) = self.store.fetch_snapshot()?;
        Ok(swiss::compute_standings(&players, &matches))
    }

    pub fn pairings(&self) -> Result<Vec<PairingRecord>> {
        let standings = self.standings()?;
        let pairings = swiss::compute_pairings(&standings)?;
        debug!("Next round has {} pairings", pairings.len());
        Ok(pairings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, SqliteStore};
    use crate::errors::TournamentError;

    fn service() -> TournamentService<SqliteStore> {
        let store = SqliteStore::open(create_memory_pool().unwrap()).unwrap();
        TournamentService::new(store)
    }

    #[test]
    fn test_register_sanitizes_name() {
        let service = service();

        let registered = service.register_player("  <b>Bold</b>  Name ").unwrap();

        let players = service.players().unwrap();
        assert_eq!(players, vec![registered]);
        assert_eq!(players[0].name, "&lt;b&gt;Bold&lt;/b&gt; Name");
    }

    #[test]
    fn test_blank_name_is_not_stored() {
        let service = service();

        assert!(matches!(service.register_player("   "), Err(TournamentError::InvalidName)));
        assert_eq!(service.count_players().unwrap(), 0);
    }

    #[test]
    fn test_report_rejects_non_positive_ids() {
        let service = service();
        let id = service.register_player("A").unwrap().id;

        assert!(matches!(service.report_match(id, 0), Err(TournamentError::InvalidId(_))));
        assert!(matches!(service.report_match(-1, id), Err(TournamentError::InvalidId(_))));
    }

    #[test]
    fn test_report_unknown_player_is_a_persistence_error() {
        let service = service();
        let id = service.register_player("A").unwrap().id;

        let result = service.report_match(id, id + 10);

        assert!(matches!(result, Err(TournamentError::PersistenceUnavailable(_))));
    }

    #[test]
    fn test_standings_and_pairings_example() {
        let service = service();
        let a = service.register_player("A").unwrap().id;
        let b = service.register_player("B").unwrap().id;
        let c = service.register_player("C").unwrap().id;
        let d = service.register_player("D").unwrap().id;
        service.report_match(a, b).unwrap();
        service.report_match(c, d).unwrap();

        let standings = service.standings().unwrap();
        let summary: Vec<(PlayerId, u32, u32)> = standings
            .iter()
            .map(|s| (s.id, s.wins, s.matches_played))
            .collect();
        assert_eq!(summary, vec![(a, 1, 1), (c, 1, 1), (b, 0, 1), (d, 0, 1)]);

        let pairings = service.pairings().unwrap();
        let ids: Vec<(PlayerId, PlayerId)> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(ids, vec![(a, c), (b, d)]);
        assert_eq!(pairings[0].name2, "C");
    }

    #[test]
    fn test_odd_player_count_fails_pairing() {
        let service = service();
        for name in ["A", "B", "C"] {
            service.register_player(name).unwrap();
        }

        assert!(matches!(service.pairings(), Err(TournamentError::OddPlayerCount(3))));
    }

    #[test]
    fn test_empty_tournament() {
        let service = service();

        assert!(service.standings().unwrap().is_empty());
        assert!(service.pairings().unwrap().is_empty());
    }

    #[test]
    fn test_standings_are_idempotent() {
        let service = service();
        let a = service.register_player("A").unwrap().id;
        let b = service.register_player("B").unwrap().id;
        service.report_match(b, a).unwrap();

        assert_eq!(service.standings().unwrap(), service.standings().unwrap());
    }
}
