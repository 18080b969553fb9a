use std::time::{SystemTime, UNIX_EPOCH};

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::SqliteConnection;

use crate::db::establish;
use crate::error::{Result, StarterError};

#[derive(QueryableByName)]
struct SettingRow {
    #[diesel(sql_type = Text)]
    value: String,
}

fn ensure_table(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS app_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
    )
    .execute(conn)
    .map_err(|e| StarterError::Database(e.to_string()))?;
    Ok(())
}

pub fn get_setting(db_path: &str, key: &str) -> Result<Option<String>> {
    let mut conn = establish(db_path)?;
    ensure_table(&mut conn)?;

    let row: Option<SettingRow> = diesel::sql_query("SELECT value FROM app_settings WHERE key = ?1")
        .bind::<Text, _>(key)
        .get_result(&mut conn)
        .optional()
        .map_err(|e| StarterError::Database(e.to_string()))?;
    Ok(row.map(|row| row.value))
}

pub fn set_setting(db_path: &str, key: &str, value: &str) -> Result<()> {
    let mut conn = establish(db_path)?;
    ensure_table(&mut conn)?;

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| StarterError::Runtime(e.to_string()))?
        .as_secs() as i64;

    diesel::sql_query(
        "INSERT INTO app_settings (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind::<Text, _>(key)
    .bind::<Text, _>(value)
    .bind::<BigInt, _>(ts)
    .execute(&mut conn)
    .map_err(|e| StarterError::Database(e.to_string()))?;

    Ok(())
}

pub fn remove_setting(db_path: &str, key: &str) -> Result<bool> {
    let mut conn = establish(db_path)?;
    ensure_table(&mut conn)?;

    let count = diesel::sql_query("DELETE FROM app_settings WHERE key = ?1")
        .bind::<Text, _>(key)
        .execute(&mut conn)
        .map_err(|e| StarterError::Database(e.to_string()))?;
    Ok(count > 0)
}
