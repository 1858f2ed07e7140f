//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod input;
mod modal;
mod view_state;

pub use animation::AnimPhase;
pub use input::{MAX_POINT_DIGITS, PointsDraft};
pub use modal::{BannerEffect, BannerEffectKind};
pub use view_state::UiOptions;
