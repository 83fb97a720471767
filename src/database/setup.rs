use anyhow::{Context, Result};

use super::connection::DbConn;

const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players;";

/// Creates missing tables and indexes, leaving existing data alone.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    execute_statements(conn, include_str!("schema.sql"))?;
    log::debug!("Database schema ensured");
    Ok(())
}

/// Drops every table and recreates the schema from scratch.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    execute_statements(conn, DROP_SQL)?;
    execute_statements(conn, include_str!("schema.sql"))?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn execute_statements(conn: &mut DbConn, sql: &str) -> Result<()> {
    let statements = split_sql_statements(sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(strip_comments)
        .filter(|s| !s.is_empty())
        .collect()
}

fn strip_comments(statement: &str) -> String {
    statement
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, players};

    #[test]
    fn test_split_skips_comments_and_blanks() {
        let statements = split_sql_statements("-- header\nCREATE TABLE a (x);\n\n;SELECT 1;");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "SELECT 1"]);
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        ensure_schema(&mut conn).unwrap();
        players::insert_player(&mut conn, "Kept").unwrap();
        ensure_schema(&mut conn).unwrap();

        assert_eq!(players::count_all(&mut conn).unwrap(), 1);
    }

    #[test]
    fn test_reset_drops_existing_rows() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        ensure_schema(&mut conn).unwrap();
        players::insert_player(&mut conn, "Gone").unwrap();
        reset_database(&mut conn).unwrap();

        assert_eq!(players::count_all(&mut conn).unwrap(), 0);
    }
}
