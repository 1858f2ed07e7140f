//! Round state machine.
//!
//! ```text
//! Idle    --start(valid)-->        Playing
//! Playing --start(valid)-->        Playing   (fresh circles, fresh timer)
//! Playing --activate(next, last)-> Won
//! Playing --activate(other)-->     Lost
//! Won     --start(valid)-->        Playing
//! Lost    --start(valid)-->        Playing
//! any     --start(invalid)-->      unchanged, error recorded
//! ```
//!
//! The controller owns the round timer. Every transition that leaves
//! `Playing` drops it before returning, so no tick can land after the round
//! has ended.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use circles_types::{Circle, CircleId, GameStatus, PointCount, Position, ValidationError};

use crate::clock::{TICK_PERIOD, TickTimer};

/// Source of placement samples in `[0, 1)`.
pub trait PositionSampler: Send {
    fn next_unit(&mut self) -> f64;
}

/// Uniform samples from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSampler;

impl PositionSampler for RandomSampler {
    fn next_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
///
/// Gives reproducible layouts for demos and tests.
#[derive(Debug, Clone)]
pub struct CyclicSampler {
    samples: Vec<f64>,
    index: usize,
}

impl CyclicSampler {
    #[must_use]
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, index: 0 }
    }
}

impl PositionSampler for CyclicSampler {
    fn next_unit(&mut self) -> f64 {
        let Some(sample) = self.samples.get(self.index % self.samples.len().max(1)) else {
            return 0.0;
        };
        self.index = self.index.wrapping_add(1);
        *sample
    }
}

/// What a single activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Correct circle; more remain.
    Cleared,
    /// Correct circle and it was the last one.
    Won,
    /// Wrong circle; the round is over.
    Lost,
    /// No round in progress.
    Ignored,
}

pub struct GameController {
    /// Raw point count as entered. Only validated at start.
    target: f64,
    /// Validated count of the current round, if one has started.
    round: Option<PointCount>,
    /// Active circles in ascending id order.
    circles: VecDeque<Circle>,
    next_expected: CircleId,
    elapsed_ticks: u64,
    status: GameStatus,
    error: Option<ValidationError>,
    timer: Option<TickTimer>,
    sampler: Box<dyn PositionSampler>,
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("target", &self.target)
            .field("round", &self.round)
            .field("circles", &self.circles.len())
            .field("next_expected", &self.next_expected)
            .field("elapsed_ticks", &self.elapsed_ticks)
            .field("status", &self.status)
            .field("error", &self.error)
            .field("timer_armed", &self.timer.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_sampler(Box::new(RandomSampler))
    }

    #[must_use]
    pub fn with_sampler(sampler: Box<dyn PositionSampler>) -> Self {
        Self {
            target: 0.0,
            round: None,
            circles: VecDeque::new(),
            next_expected: CircleId::FIRST,
            elapsed_ticks: 0,
            status: GameStatus::Idle,
            error: None,
            timer: None,
            sampler,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Point count of the round in progress (or last played).
    #[must_use]
    pub fn round_size(&self) -> Option<PointCount> {
        self.round
    }

    #[must_use]
    pub fn next_expected(&self) -> CircleId {
        self.next_expected
    }

    /// Active circles, lowest id first (paint order).
    pub fn circles(&self) -> impl DoubleEndedIterator<Item = &Circle> + ExactSizeIterator {
        self.circles.iter()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    #[must_use]
    pub fn contains(&self, id: CircleId) -> bool {
        self.circles.iter().any(|circle| circle.id() == id)
    }

    #[must_use]
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ticks as f64 * TICK_PERIOD.as_secs_f64()
    }

    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Points may be edited whenever a round is not running.
    #[must_use]
    pub fn can_change_points(&self) -> bool {
        !self.status.is_playing()
    }

    #[must_use]
    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Set the raw point count. Ignored while a round is running.
    pub fn configure_points(&mut self, value: f64) {
        if !self.can_change_points() {
            debug!(value, "Point count edit ignored while playing");
            return;
        }
        self.target = value;
    }

    /// Validate the point count and begin a fresh round.
    ///
    /// On failure the status is left as it was and the error is kept for
    /// display until the next successful start.
    pub fn start_or_restart(&mut self) -> Result<PointCount, ValidationError> {
        let count = match PointCount::try_from(self.target) {
            Ok(count) => count,
            Err(err) => {
                debug!(points = self.target, %err, "Start rejected");
                self.error = Some(err);
                return Err(err);
            }
        };

        self.cancel_timer();

        let sampler = &mut self.sampler;
        self.circles = (1..=count.get())
            .map(|id| {
                let position = Position::from_unit(sampler.next_unit(), sampler.next_unit());
                Circle::new(CircleId::new(id), position)
            })
            .collect();
        self.round = Some(count);
        self.next_expected = CircleId::FIRST;
        self.elapsed_ticks = 0;
        self.status = GameStatus::Playing;
        self.error = None;
        self.timer = Some(TickTimer::start(TICK_PERIOD));

        info!(points = count.get(), "Round started");
        Ok(count)
    }

    /// Handle a click on circle `id`.
    pub fn handle_activation(&mut self, id: CircleId) -> Activation {
        if !self.status.is_playing() {
            return Activation::Ignored;
        }

        if id != self.next_expected {
            self.finish(GameStatus::Lost);
            debug!(%id, expected = %self.next_expected, "Wrong circle");
            return Activation::Lost;
        }

        if self.circles.front().map(Circle::id) == Some(id) {
            self.circles.pop_front();
        } else {
            self.circles.retain(|circle| circle.id() != id);
        }

        let last = self.round.map(PointCount::get) == Some(id.value());
        if last {
            self.finish(GameStatus::Won);
            return Activation::Won;
        }

        self.next_expected = id.next();
        debug!(%id, "Circle cleared");
        Activation::Cleared
    }

    /// Add one tick of elapsed time. No-op unless playing.
    pub fn tick(&mut self) {
        if self.status.is_playing() {
            self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        }
    }

    /// Feed wall-clock time to the round timer and apply the ticks it
    /// reports. Returns the number of ticks applied.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let due = timer.poll(delta);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    fn finish(&mut self, status: GameStatus) {
        self.cancel_timer();
        self.status = status;
        info!(
            status = status.as_str(),
            elapsed_secs = self.elapsed_seconds(),
            remaining = self.circles.len(),
            "Round finished"
        );
    }

    fn cancel_timer(&mut self) {
        if self.timer.take().is_some() {
            debug!("Round timer cancelled");
        }
    }
}
