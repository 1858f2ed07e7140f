//! Shared test utilities and fixtures
//!
//! Builders for apps with fixed circle placement, plus helpers that render a
//! frame and turn circle ids into clickable cells.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use circles_engine::{App, CircleId, CyclicSampler, UiOptions};
use circles_tui::{ViewLayout, apply_event, draw};

pub const WIDTH: u16 = 60;
pub const HEIGHT: u16 = 20;

/// Options that keep rendering deterministic: ASCII glyphs and no animation.
pub fn plain_options() -> UiOptions {
    UiOptions {
        ascii_only: true,
        reduced_motion: true,
        ..UiOptions::default()
    }
}

/// App whose circles are placed from `samples` (x then y, cycling).
pub fn scripted_app(samples: Vec<f64>) -> App {
    App::with_sampler(plain_options(), Box::new(CyclicSampler::new(samples)))
}

/// App with circles spread along the diagonal so no two tokens overlap.
pub fn spread_app(points: u32) -> App {
    let samples = (0..points)
        .flat_map(|i| {
            let t = f64::from(i) / f64::from(points.max(1));
            [t, t]
        })
        .collect();
    scripted_app(samples)
}

pub fn type_points(app: &mut App, text: &str) {
    for c in text.chars() {
        app.enter_digit(c);
    }
}

/// Render one frame into a test backend and return the recorded layout.
pub fn render(app: &App) -> ViewLayout {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut layout = ViewLayout::default();
    terminal.draw(|frame| layout = draw(frame, app)).unwrap();
    layout
}

/// Top-left cell of the token drawn for `id`.
pub fn token_cell(app: &App, layout: &ViewLayout, id: CircleId) -> (u16, u16) {
    let circle = app
        .game()
        .circles()
        .find(|circle| circle.id() == id)
        .unwrap();
    let rect = layout.surface_map().token_rect(circle);
    (rect.x, rect.y)
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render, then click the token for `id` on the rendered layout.
pub fn click_circle(app: &mut App, id: CircleId) -> bool {
    let layout = render(app);
    let (column, row) = token_cell(app, &layout, id);
    apply_event(app, click(column, row), &layout)
}

/// Render, then click the Play/Restart button.
pub fn click_button(app: &mut App) -> bool {
    let layout = render(app);
    apply_event(app, click(layout.button.x, layout.button.y), &layout)
}
