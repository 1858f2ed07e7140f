//! Circles engine - application state without rendering.
//!
//! [`App`] is the single owner of everything the UI shows: the round
//! controller, the points field, hover and banner state. The TUI reads it
//! through accessors and feeds input back through the operation methods; no
//! state is shared any other way.

#![allow(clippy::missing_errors_doc)]

mod clock;
mod config;
mod game;
mod init;

use std::time::{Duration, Instant};

use tracing::{debug, info};

pub use circles_types::ui::{
    AnimPhase, BannerEffect, BannerEffectKind, MAX_POINT_DIGITS, PointsDraft, UiOptions,
};
pub use circles_types::{
    Circle, CircleId, GameStatus, MAX_POINT_COUNT, PointCount, Position, SURFACE_EXTENT,
    ValidationError,
};

pub use clock::{TICK_PERIOD, TickTimer};
pub use config::{AppConfig, CirclesConfig, ConfigError, GameConfig, config_path};
pub use game::{Activation, CyclicSampler, GameController, PositionSampler, RandomSampler};
pub use init::{apply_env_overrides, is_truthy};

const SHAKE_DURATION: Duration = Duration::from_millis(400);
const POP_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct App {
    game: GameController,
    points: PointsDraft,
    hovered: Option<CircleId>,
    ui_options: UiOptions,
    banner_effect: Option<BannerEffect>,
    /// One-line notice for problems outside the game itself (config errors).
    notice: Option<String>,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    /// Application shell with an explicit placement source.
    #[must_use]
    pub fn with_sampler(ui_options: UiOptions, sampler: Box<dyn PositionSampler>) -> Self {
        Self {
            game: GameController::with_sampler(sampler),
            points: PointsDraft::default(),
            hovered: None,
            ui_options,
            banner_effect: None,
            notice: None,
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Read access for the renderer
    // ------------------------------------------------------------------

    #[must_use]
    pub fn game(&self) -> &GameController {
        &self.game
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[must_use]
    pub fn points_text(&self) -> &str {
        self.points.text()
    }

    #[must_use]
    pub fn points_editable(&self) -> bool {
        self.game.can_change_points()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<CircleId> {
        self.hovered
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn banner_effect(&self) -> Option<&BannerEffect> {
        self.banner_effect.as_ref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Message for the error line, verbatim.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.game.error().map(|err| err.to_string())
    }

    /// "Play" until the first round starts, "Restart" afterwards.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.game.status() {
            GameStatus::Idle => "Play",
            GameStatus::Playing | GameStatus::Won | GameStatus::Lost => "Restart",
        }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------
    // Points field
    // ------------------------------------------------------------------

    /// Type one character into the points field. Non-digits are dropped and
    /// the field is read-only while a round is running.
    pub fn enter_digit(&mut self, c: char) {
        if !self.game.can_change_points() {
            debug!("Points field locked");
            return;
        }
        if self.points.push_digit(c) {
            self.game.configure_points(self.points.value());
        }
    }

    pub fn delete_digit(&mut self) {
        if !self.game.can_change_points() {
            return;
        }
        if self.points.pop() {
            self.game.configure_points(self.points.value());
        }
    }

    pub fn clear_points(&mut self) {
        if !self.game.can_change_points() {
            return;
        }
        self.points.clear();
        self.game.configure_points(0.0);
    }

    // ------------------------------------------------------------------
    // Game actions
    // ------------------------------------------------------------------

    /// The Play/Restart control.
    pub fn press_start(&mut self) -> Result<PointCount, ValidationError> {
        let count = self.game.start_or_restart()?;
        self.hovered = None;
        self.banner_effect = None;
        Ok(count)
    }

    /// A click on circle `id`.
    pub fn activate(&mut self, id: CircleId) -> Activation {
        let outcome = self.game.handle_activation(id);
        match outcome {
            Activation::Won => {
                info!(elapsed_secs = self.game.elapsed_seconds(), "All circles cleared");
                self.banner_effect = (!self.ui_options.reduced_motion)
                    .then(|| BannerEffect::pop_scale(POP_DURATION));
            }
            Activation::Lost => {
                self.banner_effect = (!self.ui_options.reduced_motion)
                    .then(|| BannerEffect::shake(SHAKE_DURATION));
            }
            Activation::Cleared | Activation::Ignored => {}
        }
        if self.hovered.is_some_and(|hovered| !self.game.contains(hovered)) {
            self.hovered = None;
        }
        outcome
    }

    /// Pointer moved over `id` (or off every circle). Visual only.
    pub fn set_hovered(&mut self, id: Option<CircleId>) {
        self.hovered = id.filter(|id| self.game.contains(*id));
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance by the wall-clock time since the previous call.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta);
    }

    /// Advance the round clock and banner effect by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.game.advance(delta);
        if let Some(effect) = self.banner_effect.as_mut() {
            effect.advance(delta);
            if matches!(effect.phase(), AnimPhase::Completed) {
                self.banner_effect = None;
            }
        }
    }
}
