#![allow(dead_code)]

use tempfile::TempDir;

use desktop_starter::db::Database;

/// Fresh database file inside its own temp dir. Keep the dir alive for the test.
pub async fn temp_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("app.db");
    let db = Database::open(path.to_string_lossy().to_string())
        .await
        .unwrap();
    (dir, db)
}

pub fn temp_db_path(dir: &TempDir) -> String {
    dir.path().join("app.db").to_string_lossy().to_string()
}
