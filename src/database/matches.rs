use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::DbMatch;

pub fn insert_match(conn: &mut DbConn, winner: i64, loser: i64) -> Result<DbMatch> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser, created_at";

    conn.query_row(sql, params![winner, loser], parse_match_row)
        .with_context(|| format!("Failed to insert match {} vs {}", winner, loser))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<DbMatch> {
    Ok(DbMatch {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<DbMatch>> {
    let sql = "SELECT id, winner, loser, created_at FROM matches ORDER BY id";

    let mut stmt = conn
        .prepare(sql)
        .context("Failed to prepare matches query")?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches")?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}
