//! Theme preference persistence across sessions.

use std::fs;

use folio_config::FilePreferenceStore;
use folio_engine::{PreferenceStore, THEME_KEY, ThemePreference};
use tempfile::tempdir;

use crate::common::mount_with_file;

#[test]
fn toggled_theme_survives_restart() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");

    let mut first = mount_with_file(&path, None);
    assert_eq!(first.theme(), ThemePreference::Light);
    assert_eq!(first.on_toggle_theme(), ThemePreference::Dark);
    first.unmount();
    drop(first);

    let second = mount_with_file(&path, Some(ThemePreference::Light));
    assert_eq!(second.theme(), ThemePreference::Dark);
    assert!(second.theme_surface().is_dark());
}

#[test]
fn startup_theme_is_written_on_mount() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");

    let page = mount_with_file(&path, Some(ThemePreference::Dark));
    assert_eq!(page.theme(), ThemePreference::Dark);

    let store = FilePreferenceStore::new(&path);
    assert_eq!(
        store.load(THEME_KEY).expect("readable"),
        Some("dark".to_owned())
    );
}

#[test]
fn toggling_twice_from_empty_file_restores_persisted_value() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");

    let mut page = mount_with_file(&path, Some(ThemePreference::Dark));
    let store = FilePreferenceStore::new(&path);
    let before = store.load(THEME_KEY).expect("readable");

    page.on_toggle_theme();
    page.on_toggle_theme();

    assert_eq!(page.theme(), ThemePreference::Dark);
    assert_eq!(store.load(THEME_KEY).expect("readable"), before);
}

#[test]
fn toggling_twice_restores_value_and_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");

    let mut page = mount_with_file(&path, None);
    page.on_toggle_theme();
    page.on_toggle_theme();
    assert_eq!(page.theme(), ThemePreference::Light);

    let store = FilePreferenceStore::new(&path);
    assert_eq!(
        store.load(THEME_KEY).expect("readable"),
        Some("light".to_owned())
    );
}

#[test]
fn unrecognised_persisted_value_falls_back_to_hint() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");
    fs::write(&path, "theme = \"sepia\"\n").expect("seed");

    let page = mount_with_file(&path, Some(ThemePreference::Dark));
    assert_eq!(page.theme(), ThemePreference::Dark);
}

#[test]
fn malformed_file_does_not_block_the_session() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");
    fs::write(&path, "theme = [").expect("seed");

    let mut page = mount_with_file(&path, None);
    assert_eq!(page.theme(), ThemePreference::Light);

    assert_eq!(page.on_toggle_theme(), ThemePreference::Dark);
    let store = FilePreferenceStore::new(&path);
    assert_eq!(
        store.load(THEME_KEY).expect("rewritten"),
        Some("dark".to_owned())
    );
}

#[test]
fn unwritable_store_keeps_session_value() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").expect("seed");

    let mut page = mount_with_file(&blocker.join("preferences.toml"), None);
    assert_eq!(page.on_toggle_theme(), ThemePreference::Dark);
    assert!(page.theme_surface().is_dark());
}
