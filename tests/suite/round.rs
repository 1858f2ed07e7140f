//! Whole rounds played through the application shell.

use std::time::Duration;

use circles_engine::{Activation, CircleId, GameStatus, ValidationError};

use crate::common::{spread_app, type_points};

#[test]
fn clearing_every_circle_in_order_wins() {
    let mut app = spread_app(5);
    type_points(&mut app, "5");
    app.press_start().unwrap();

    for id in 1..5 {
        assert_eq!(app.activate(CircleId::new(id)), Activation::Cleared);
        assert_eq!(app.game().circle_count(), (5 - id) as usize);
        assert_eq!(app.game().next_expected(), CircleId::new(id + 1));
    }
    assert_eq!(app.activate(CircleId::new(5)), Activation::Won);
    assert_eq!(app.status(), GameStatus::Won);
    assert_eq!(app.game().circle_count(), 0);
    assert_eq!(app.status().banner(), Some("ALL CLEARED"));
}

#[test]
fn wrong_circle_loses_and_leaves_the_rest() {
    let mut app = spread_app(4);
    type_points(&mut app, "4");
    app.press_start().unwrap();

    app.activate(CircleId::new(1));
    assert_eq!(app.activate(CircleId::new(3)), Activation::Lost);
    assert_eq!(app.status(), GameStatus::Lost);
    assert_eq!(app.status().banner(), Some("GAME OVER"));
    let remaining: Vec<u32> = app.game().circles().map(|c| c.id().value()).collect();
    assert_eq!(remaining, vec![2, 3, 4]);

    // Further clicks do nothing once the round is over.
    assert_eq!(app.activate(CircleId::new(2)), Activation::Ignored);
    assert_eq!(app.game().circle_count(), 3);
}

#[test]
fn timer_counts_tenths_while_playing_and_freezes_after() {
    let mut app = spread_app(2);
    type_points(&mut app, "2");
    app.press_start().unwrap();

    for _ in 0..25 {
        app.advance(Duration::from_millis(100));
    }
    assert_eq!(app.game().elapsed_ticks(), 25);
    assert_eq!(format!("{:.1}", app.game().elapsed_seconds()), "2.5");

    app.activate(CircleId::new(2));
    assert_eq!(app.status(), GameStatus::Lost);
    assert!(!app.game().timer_armed());

    app.advance(Duration::from_secs(10));
    assert_eq!(app.game().elapsed_ticks(), 25);
}

#[test]
fn partial_periods_carry_over() {
    let mut app = spread_app(1);
    type_points(&mut app, "1");
    app.press_start().unwrap();

    app.advance(Duration::from_millis(60));
    assert_eq!(app.game().elapsed_ticks(), 0);
    app.advance(Duration::from_millis(60));
    assert_eq!(app.game().elapsed_ticks(), 1);
    app.advance(Duration::from_millis(380));
    assert_eq!(app.game().elapsed_ticks(), 5);
}

#[test]
fn restart_after_loss_starts_clean() {
    let mut app = spread_app(3);
    type_points(&mut app, "3");
    app.press_start().unwrap();
    app.advance(Duration::from_millis(700));
    app.activate(CircleId::new(3));
    assert_eq!(app.status(), GameStatus::Lost);

    // The field unlocks once the round is over.
    app.delete_digit();
    type_points(&mut app, "2");
    assert_eq!(app.button_label(), "Restart");
    app.press_start().unwrap();

    assert_eq!(app.status(), GameStatus::Playing);
    assert_eq!(app.game().circle_count(), 2);
    assert_eq!(app.game().next_expected(), CircleId::FIRST);
    assert_eq!(app.game().elapsed_ticks(), 0);
    assert!(app.game().timer_armed());
}

#[test]
fn restart_mid_round_replaces_the_round() {
    let mut app = spread_app(3);
    type_points(&mut app, "3");
    app.press_start().unwrap();
    app.activate(CircleId::new(1));
    app.advance(Duration::from_millis(300));

    app.press_start().unwrap();
    assert_eq!(app.status(), GameStatus::Playing);
    assert_eq!(app.game().circle_count(), 3);
    assert_eq!(app.game().elapsed_ticks(), 0);
    assert_eq!(app.game().next_expected(), CircleId::FIRST);
}

#[test]
fn points_are_locked_while_playing() {
    let mut app = spread_app(3);
    type_points(&mut app, "3");
    app.press_start().unwrap();

    type_points(&mut app, "9");
    app.delete_digit();
    app.clear_points();
    assert_eq!(app.points_text(), "3");
    assert!(!app.points_editable());
}

#[test]
fn invalid_points_keep_status_and_show_error() {
    let mut app = spread_app(1);
    assert_eq!(app.press_start(), Err(ValidationError::MissingPointCount));
    assert_eq!(app.status(), GameStatus::Idle);
    assert_eq!(app.error_message().as_deref(), Some("missing point count"));

    type_points(&mut app, "0");
    assert_eq!(app.press_start(), Err(ValidationError::MissingPointCount));
    assert_eq!(app.game().circle_count(), 0);

    app.clear_points();
    type_points(&mut app, "1");
    app.press_start().unwrap();
    assert_eq!(app.error_message(), None);
}

#[test]
fn failed_restart_after_round_keeps_previous_result() {
    let mut app = spread_app(2);
    type_points(&mut app, "2");
    app.press_start().unwrap();
    app.activate(CircleId::new(2));
    assert_eq!(app.status(), GameStatus::Lost);

    app.clear_points();
    assert!(app.press_start().is_err());
    assert_eq!(app.status(), GameStatus::Lost);
    assert_eq!(app.game().circle_count(), 2);
}
