mod common;

use desktop_starter::settings_store::{get_setting, remove_setting, set_setting};
use desktop_starter::theme::{load_theme, save_theme, Theme, THEME_STORAGE_KEY};

#[test]
fn theme_defaults_to_dark_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::temp_db_path(&dir);

    assert_eq!(load_theme(&path), Theme::Dark);

    save_theme(&path, Theme::Light).unwrap();
    assert_eq!(load_theme(&path), Theme::Light);
    assert_eq!(
        get_setting(&path, THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn invalid_stored_theme_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::temp_db_path(&dir);

    set_setting(&path, THEME_STORAGE_KEY, "solarized").unwrap();
    assert_eq!(load_theme(&path), Theme::Dark);
}

#[test]
fn settings_upsert_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::temp_db_path(&dir);

    assert_eq!(get_setting(&path, "greeting").unwrap(), None);
    set_setting(&path, "greeting", "hi").unwrap();
    set_setting(&path, "greeting", "hello").unwrap();
    assert_eq!(get_setting(&path, "greeting").unwrap().as_deref(), Some("hello"));

    assert!(remove_setting(&path, "greeting").unwrap());
    assert!(!remove_setting(&path, "greeting").unwrap());
    assert_eq!(get_setting(&path, "greeting").unwrap(), None);
}
