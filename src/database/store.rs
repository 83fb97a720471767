use anyhow::Context;
use log::{debug, warn};

use super::connection::{get_connection, DbConn, DbPool};
use super::models::{DbMatch, DbPlayer};
use super::{matches, players, setup};
use crate::errors::Result;
use crate::swiss::{MatchResult, Player, PlayerId};

/// Storage the tournament service reads facts from and writes them to.
pub trait TournamentStore {
    fn fetch_all_players(&self) -> Result<Vec<Player>>;
    fn fetch_all_matches(&self) -> Result<Vec<MatchResult>>;
    fn insert_player(&self, name: &str) -> Result<PlayerId>;
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()>;
    fn count_players(&self) -> Result<usize>;
    fn clear_matches(&self) -> Result<()>;
    fn clear_players(&self) -> Result<()>;

    /// Players and matches as one consistent view.
    fn fetch_snapshot(&self) -> Result<(Vec<Player>, Vec<MatchResult>)> {
        Ok((self.fetch_all_players()?, self.fetch_all_matches()?))
    }
}

/// SQLite-backed store sharing a connection pool owned by the application.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Wraps the pool and creates the schema if it does not exist yet.
    pub fn open(pool: DbPool) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;
        drop(conn);
        Ok(Self::new(pool))
    }
}

impl TournamentStore for SqliteStore {
    fn fetch_all_players(&self) -> Result<Vec<Player>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = players::list_all(&mut conn)?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    fn fetch_all_matches(&self) -> Result<Vec<MatchResult>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = matches::list_all(&mut conn)?;
        Ok(rows.into_iter().map(MatchResult::from).collect())
    }

    fn insert_player(&self, name: &str) -> Result<PlayerId> {
        let mut conn = get_connection(&self.pool)?;
        let player = players::insert_player(&mut conn, name)?;
        debug!("Registered player {} as id {}", player.name, player.id);
        Ok(player.id)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let row = matches::insert_match(&mut conn, winner, loser)?;
        debug!("Recorded match {}: {} beat {}", row.id, row.winner, row.loser);
        Ok(())
    }

    fn count_players(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(players::count_all(&mut conn)?)
    }

    fn clear_matches(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let removed = matches::delete_all(&mut conn)?;
        debug!("Deleted {} matches", removed);
        Ok(())
    }

    fn clear_players(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let removed = players::delete_all(&mut conn)?;
        debug!("Deleted {} players", removed);
        Ok(())
    }

    fn fetch_snapshot(&self) -> Result<(Vec<Player>, Vec<MatchResult>)> {
        let mut conn = get_connection(&self.pool)?;
        // One read transaction so both lists see the same committed state
        conn.execute_batch("BEGIN DEFERRED")
            .context("Failed to begin snapshot transaction")?;

        let (player_rows, match_rows) = match read_snapshot(&mut conn) {
            Ok(rows) => {
                conn.execute_batch("COMMIT")
                    .context("Failed to commit snapshot transaction")?;
                rows
            }
            Err(read_error) => {
                if let Err(rollback_error) = conn.execute_batch("ROLLBACK") {
                    warn!("Snapshot rollback failed: {}", rollback_error);
                    return Err(read_error
                        .context(format!("Rollback also failed: {}", rollback_error))
                        .into());
                }
                return Err(read_error.into());
            }
        };
        Ok((
            player_rows.into_iter().map(Player::from).collect(),
            match_rows.into_iter().map(MatchResult::from).collect(),
        ))
    }
}

fn read_snapshot(conn: &mut DbConn) -> anyhow::Result<(Vec<DbPlayer>, Vec<DbMatch>)> {
    let player_rows = players::list_all(conn)?;
    let match_rows = matches::list_all(conn)?;
    Ok((player_rows, match_rows))
}
