//! Config file handling as seen by the application shell.

use std::fs;

use circles_engine::{App, CirclesConfig, GameStatus};

#[test]
fn default_points_prefill_the_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[game]\ndefault_points = 12\n").unwrap();

    let config = CirclesConfig::load_from(&path).unwrap();
    let mut app = App::new(config.as_ref());
    assert_eq!(app.points_text(), "12");
    assert_eq!(app.notice(), None);

    let count = app.press_start().unwrap();
    assert_eq!(count.get(), 12);
    assert_eq!(app.status(), GameStatus::Playing);
    assert_eq!(app.game().circle_count(), 12);
}

#[test]
fn oversized_default_points_leave_the_field_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[game]\ndefault_points = 123456\n").unwrap();

    let mut app = App::from_load_result(CirclesConfig::load_from(&path));
    assert_eq!(app.points_text(), "");
    assert!(app.notice().unwrap().starts_with("Ignoring default_points = 123456"));
    assert!(app.press_start().is_err());
    assert_eq!(app.status(), GameStatus::Idle);
}

#[test]
fn missing_config_means_empty_field() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::from_load_result(CirclesConfig::load_from(&dir.path().join("config.toml")));
    assert_eq!(app.points_text(), "");
    assert_eq!(app.notice(), None);
    assert_eq!(app.status(), GameStatus::Idle);
}

#[test]
fn broken_config_falls_back_with_notice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[game\ndefault_points = ").unwrap();

    let app = App::from_load_result(CirclesConfig::load_from(&path));
    let notice = app.notice().unwrap();
    assert!(notice.starts_with("Couldn't parse"));
    assert!(!notice.contains('\n'));
    assert!(notice.ends_with("Using defaults."));
    assert_eq!(app.points_text(), "");
}
