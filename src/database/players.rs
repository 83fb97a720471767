use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::DbPlayer;

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<DbPlayer> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<DbPlayer> {
    Ok(DbPlayer {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<DbPlayer>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn
        .prepare(sql)
        .context("Failed to prepare players query")?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

pub fn count_all(conn: &mut DbConn) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .context("Failed to count players")?;
    Ok(count as usize)
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, setup, DbPool};

    fn setup_pool() -> DbPool {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        setup::ensure_schema(&mut conn).unwrap();
        pool
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let pool = setup_pool();
        let mut conn = get_connection(&pool).unwrap();

        let first = insert_player(&mut conn, "Chandra Nalaar").unwrap();
        let second = insert_player(&mut conn, "Chandra Nalaar").unwrap();

        assert!(second.id > first.id);
        assert_eq!(second.name, "Chandra Nalaar");
        assert!(first.created_at.is_some());
    }

    #[test]
    fn test_list_count_and_delete() {
        let pool = setup_pool();
        let mut conn = get_connection(&pool).unwrap();

        let player = insert_player(&mut conn, "Markov Chaney").unwrap();
        insert_player(&mut conn, "Joe Malik").unwrap();

        assert_eq!(count_all(&mut conn).unwrap(), 2);
        let listed = list_all(&mut conn).unwrap();
        assert_eq!(listed[0].id, player.id);
        assert_eq!(listed[0].name, "Markov Chaney");

        assert_eq!(delete_all(&mut conn).unwrap(), 2);
        assert_eq!(count_all(&mut conn).unwrap(), 0);
        assert!(list_all(&mut conn).unwrap().is_empty());
    }
}
