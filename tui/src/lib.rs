//! TUI rendering and input handling for Circles.

mod effects;
mod format;
mod input;
mod layout;
mod theme;

pub use effects::apply_banner_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use layout::{SurfaceMap, ViewLayout, token_width};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use circles_engine::{App, GameStatus, MAX_POINT_DIGITS};

use self::format::{format_button, format_elapsed, format_points_field};

const TITLE: &str = "LET'S PLAY";
const POINTS_LABEL: &str = "Points: ";
const BANNER_HEIGHT: u16 = 3;

/// Draw the whole screen and return where the interactive parts ended up.
pub fn draw(frame: &mut Frame, app: &App) -> ViewLayout {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_dark)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // controls
            Constraint::Length(1), // error / notice
            Constraint::Min(3),    // play surface
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(1), // key hints
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, styles::title(&palette))),
        rows[0],
    );
    let (points_field, button) = draw_controls(frame, app, &palette, &glyphs, rows[1]);
    draw_message(frame, app, &palette, rows[2]);
    let surface = draw_surface(frame, app, &palette, &glyphs, rows[3]);
    draw_banner(frame, app, &palette, rows[4]);
    draw_key_hints(frame, &palette, &glyphs, rows[5]);

    ViewLayout {
        points_field,
        button,
        surface,
    }
}

fn draw_controls(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    area: Rect,
) -> (Rect, Rect) {
    let field_text = format_points_field(app.points_text(), MAX_POINT_DIGITS);
    let field_style = if app.points_editable() {
        styles::field(palette)
    } else {
        styles::field_locked(palette)
    };
    let field_width = field_text.len() as u16;
    let label_width = POINTS_LABEL.len() as u16;

    let mut spans = vec![
        Span::styled(POINTS_LABEL, styles::label(palette)),
        Span::styled(field_text, field_style),
    ];
    if app.points_editable() {
        spans.push(Span::styled(glyphs.cursor, styles::key_hint(palette)));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format_elapsed(app.game().elapsed_seconds()),
        styles::label(palette),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let button_text = format_button(app.button_label());
    let button_width = (button_text.len() as u16).min(area.width);
    let button = Rect {
        x: area.x + area.width.saturating_sub(button_width),
        y: area.y,
        width: button_width,
        height: area.height.min(1),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(button_text, styles::button(palette))),
        button,
    );

    let points_field = Rect {
        x: area.x.saturating_add(label_width),
        y: area.y,
        width: field_width,
        height: area.height.min(1),
    }
    .intersection(area);

    (points_field, button)
}

fn draw_message(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let line = if let Some(message) = app.error_message() {
        Line::from(Span::styled(message, styles::error(palette)))
    } else if let Some(notice) = app.notice() {
        Line::from(Span::styled(notice.to_string(), styles::notice(palette)))
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_surface(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    area: Rect,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let map = SurfaceMap::new(inner);
    for circle in app.game().circles() {
        let rect = map.token_rect(circle);
        if rect.is_empty() {
            continue;
        }
        let style = if app.hovered() == Some(circle.id()) {
            styles::circle_hovered(palette)
        } else {
            styles::circle(palette)
        };
        let text = format!("{}{}{}", glyphs.circle_left, circle.id(), glyphs.circle_right);
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
    }

    inner
}

fn draw_banner(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let status = app.status();
    let Some(text) = status.banner() else {
        return;
    };
    let style = if status == GameStatus::Won {
        styles::banner_won(palette)
    } else {
        styles::banner_lost(palette)
    };

    let width = (text.len() as u16 + 4).min(area.width);
    let base = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: area.height,
    };
    let rect = match app.banner_effect() {
        Some(effect) => apply_banner_effect(effect, base, area),
        None => base,
    };

    let banner = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(Clear, rect);
    frame.render_widget(banner, rect);
}

fn draw_key_hints(frame: &mut Frame, palette: &Palette, glyphs: &Glyphs, area: Rect) {
    let hint = styles::key_hint(palette);
    let key = styles::key_highlight(palette);
    let sep = format!(" {} ", glyphs.bullet);
    let line = Line::from(vec![
        Span::styled("0-9", key),
        Span::styled(" points", hint),
        Span::styled(sep.clone(), hint),
        Span::styled("Enter", key),
        Span::styled(" play", hint),
        Span::styled(sep.clone(), hint),
        Span::styled("click", key),
        Span::styled(" circles in order", hint),
        Span::styled(sep, hint),
        Span::styled("q", key),
        Span::styled(" quit", hint),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
