//! Terminal events routed through the drawn layout.

use crossterm::event::KeyCode;

use circles_engine::{CircleId, GameStatus};
use circles_tui::apply_event;

use crate::common::{click, click_button, click_circle, key, render, spread_app, type_points};

#[test]
fn keyboard_and_mouse_play_a_full_round() {
    let mut app = spread_app(3);
    let layout = render(&app);
    for event in [key(KeyCode::Char('3')), key(KeyCode::Char('x'))] {
        apply_event(&mut app, event, &layout);
    }
    assert_eq!(app.points_text(), "3");

    click_button(&mut app);
    assert_eq!(app.status(), GameStatus::Playing);

    for id in 1..=3 {
        assert!(!click_circle(&mut app, CircleId::new(id)));
    }
    assert_eq!(app.status(), GameStatus::Won);
    assert_eq!(app.game().circle_count(), 0);
}

#[test]
fn clicking_out_of_order_ends_the_round() {
    let mut app = spread_app(3);
    type_points(&mut app, "3");
    click_button(&mut app);

    click_circle(&mut app, CircleId::new(2));
    assert_eq!(app.status(), GameStatus::Lost);
    assert_eq!(app.game().circle_count(), 3);
}

#[test]
fn restart_button_relabels_and_restarts() {
    let mut app = spread_app(2);
    assert_eq!(app.button_label(), "Play");
    type_points(&mut app, "2");
    click_button(&mut app);
    assert_eq!(app.button_label(), "Restart");

    click_circle(&mut app, CircleId::new(1));
    click_button(&mut app);
    assert_eq!(app.status(), GameStatus::Playing);
    assert_eq!(app.game().circle_count(), 2);
    assert_eq!(app.button_label(), "Restart");
}

#[test]
fn clicks_outside_any_target_are_ignored() {
    let mut app = spread_app(1);
    type_points(&mut app, "1");
    click_button(&mut app);

    let layout = render(&app);
    // Title row and the surface border.
    apply_event(&mut app, click(0, 0), &layout);
    apply_event(&mut app, click(layout.surface.x - 1, layout.surface.y), &layout);
    assert_eq!(app.status(), GameStatus::Playing);
    assert_eq!(app.game().circle_count(), 1);
}

#[test]
fn enter_key_starts_and_q_quits() {
    let mut app = spread_app(1);
    let layout = render(&app);
    apply_event(&mut app, key(KeyCode::Char('1')), &layout);
    assert!(!apply_event(&mut app, key(KeyCode::Enter), &layout));
    assert_eq!(app.status(), GameStatus::Playing);

    // Digits typed mid-round do not reach the locked field.
    apply_event(&mut app, key(KeyCode::Char('7')), &layout);
    assert_eq!(app.points_text(), "1");

    assert!(apply_event(&mut app, key(KeyCode::Char('q')), &layout));
    assert!(app.should_quit());
}
