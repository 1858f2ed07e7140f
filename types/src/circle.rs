//! Circles and their placement on the play surface.
//!
//! Positions live in a fixed logical coordinate space of
//! `[0, SURFACE_EXTENT) x [0, SURFACE_EXTENT)`. The renderer scales that
//! space onto whatever area it has; nothing here knows about terminal cells.

use serde::{Deserialize, Serialize};

use crate::CircleId;

/// Exclusive upper bound of both coordinates.
pub const SURFACE_EXTENT: f64 = 460.0;

/// Largest coordinate a circle may take.
const MAX_COORD: f64 = SURFACE_EXTENT - 1e-9;

/// A point inside the play surface.
///
/// Invariant: both coordinates are finite and in `[0, SURFACE_EXTENT)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Map two unit samples (nominally `[0, 1)`) onto the surface.
    ///
    /// Out-of-range or non-finite samples are pinned to the nearest edge so the
    /// bounds invariant holds for any input.
    #[must_use]
    pub fn from_unit(u: f64, v: f64) -> Self {
        Self {
            x: scale_unit(u),
            y: scale_unit(v),
        }
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }
}

fn scale_unit(sample: f64) -> f64 {
    if !sample.is_finite() {
        return 0.0;
    }
    (sample * SURFACE_EXTENT).clamp(0.0, MAX_COORD)
}

/// A clickable target tagged with its required click order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    id: CircleId,
    position: Position,
}

impl Circle {
    #[must_use]
    pub fn new(id: CircleId, position: Position) -> Self {
        Self { id, position }
    }

    #[must_use]
    pub fn id(&self) -> CircleId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }
}
