//! Core domain types for Circles.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod circle;
mod ids;
mod points;
mod status;
pub mod ui;

pub use circle::{Circle, Position, SURFACE_EXTENT};
pub use ids::CircleId;
pub use points::{MAX_POINT_COUNT, PointCount, ValidationError};
pub use status::GameStatus;
