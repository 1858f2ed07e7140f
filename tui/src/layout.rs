//! Screen regions and pointer hit-testing.
//!
//! `draw` records where it put the interactive pieces in a [`ViewLayout`];
//! input handling uses the same record so clicks land on what was drawn.

use ratatui::layout::{Position, Rect};

use circles_engine::{Circle, CircleId, GameController, SURFACE_EXTENT};

/// Interactive regions of the last drawn frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewLayout {
    pub points_field: Rect,
    pub button: Rect,
    /// Inner area of the play surface (inside its border).
    pub surface: Rect,
}

impl ViewLayout {
    #[must_use]
    pub fn on_button(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }

    #[must_use]
    pub fn surface_map(&self) -> SurfaceMap {
        SurfaceMap::new(self.surface)
    }
}

/// Width in cells of the token drawn for `id`: the digits plus two caps.
#[must_use]
pub fn token_width(id: CircleId) -> u16 {
    let digits = id.value().checked_ilog10().unwrap_or(0) + 1;
    u16::try_from(digits).unwrap_or(u16::MAX).saturating_add(2)
}

/// Maps logical surface coordinates onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceMap {
    area: Rect,
}

impl SurfaceMap {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Cell rectangle of a circle's token, clipped to the surface.
    ///
    /// The left edge spans every column that still fits the whole token, so
    /// a circle at the far edge of the logical space stays fully visible.
    #[must_use]
    pub fn token_rect(&self, circle: &Circle) -> Rect {
        let width = token_width(circle.id());
        let columns = self.area.width.saturating_sub(width).saturating_add(1);
        let col = scale(circle.x(), columns);
        let row = scale(circle.y(), self.area.height);
        Rect {
            x: self.area.x.saturating_add(col),
            y: self.area.y.saturating_add(row),
            width,
            height: 1,
        }
        .intersection(self.area)
    }

    /// Topmost active circle under the cell, if any. Later (higher) ids are
    /// painted over earlier ones, so they win.
    #[must_use]
    pub fn hit_test(&self, game: &GameController, column: u16, row: u16) -> Option<CircleId> {
        let point = Position::new(column, row);
        if !self.area.contains(point) {
            return None;
        }
        game.circles()
            .rev()
            .find(|circle| self.token_rect(circle).contains(point))
            .map(Circle::id)
    }
}

fn scale(coord: f64, cells: u16) -> u16 {
    if cells == 0 {
        return 0;
    }
    let cell = (coord / SURFACE_EXTENT * f64::from(cells)).floor();
    (cell as u16).min(cells - 1)
}
