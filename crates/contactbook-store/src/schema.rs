//! Database schema bootstrap for SQLite.
//!
//! The medium needs a single key-value table. The layout revision is kept
//! in SQLite's `user_version` pragma so an existing file is recognised and
//! left alone.

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Current layout revision.
pub const CURRENT_VERSION: u32 = 1;

/// Create the key-value table if needed.
///
/// This function is idempotent - it can be called multiple times safely.
pub fn bootstrap(conn: &mut Connection) -> Result<()> {
    let current: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current > CURRENT_VERSION {
        return Err(StoreError::Schema(format!(
            "database layout {} is newer than supported layout {}",
            current, CURRENT_VERSION
        )));
    }

    if current < CURRENT_VERSION {
        let tx = conn.transaction()?;
        tx.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,            -- collection key
                value TEXT NOT NULL,             -- opaque encoded value
                updated_at INTEGER NOT NULL      -- local write time (Unix ms)
            );
            "#,
        )?;
        tx.pragma_update(None, "user_version", CURRENT_VERSION)?;
        tx.commit()?;
        tracing::debug!(version = CURRENT_VERSION, "sqlite layout created");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_creates_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        bootstrap(&mut conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"kv".to_string()));
    }

    #[test]
    fn test_bootstrap_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        bootstrap(&mut conn).unwrap();
        bootstrap(&mut conn).unwrap();
        bootstrap(&mut conn).unwrap();

        let version: u32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn test_bootstrap_rejects_newer_layout() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", CURRENT_VERSION + 1)
            .unwrap();

        assert!(matches!(bootstrap(&mut conn), Err(StoreError::Schema(_))));
    }
}
