use std::path::Path;

use anyhow::{Error, Result};
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

/// Open an async connection to the sqlite db at `db_path`, creating
/// the parent directory if needed. `:memory:` opens an in-memory db.
pub async fn async_db(db_path: &str) -> Result<Connection, Error> {
    if db_path != ":memory:" {
        if let Some(parent) = Path::new(db_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let db = Connection::open(db_path).await?;
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await?;
    Ok(db)
}

pub fn initialize_db(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )
}

pub async fn kv_get(db: &Connection, key: &str) -> Result<Option<String>, Error> {
    let key = key.to_owned();
    let value = db
        .call(move |conn| {
            let value: Option<String> = conn
                .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| row.get(0))
                .optional()?;
            Ok(value)
        })
        .await?;
    Ok(value)
}

pub async fn kv_set(db: &Connection, key: &str, value: &str) -> Result<(), Error> {
    let key = key.to_owned();
    let value = value.to_owned();
    db.call(move |conn| {
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_kv_get_missing_key() {
        let db = async_db(":memory:").await.unwrap();
        assert_eq!(kv_get(&db, "nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_kv_set_overwrites() {
        let db = async_db(":memory:").await.unwrap();
        kv_set(&db, "k", "first").await.unwrap();
        kv_set(&db, "k", "second").await.unwrap();
        assert_eq!(kv_get(&db, "k").await.unwrap(), Some("second".to_string()));
    }
}
