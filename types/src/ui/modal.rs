//! Entrance effects for the end-of-round banner.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEffectKind {
    PopScale,
    Shake,
}

#[derive(Debug, Clone)]
pub struct BannerEffect {
    kind: BannerEffectKind,
    timer: EffectTimer,
}

impl BannerEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: BannerEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn shake(duration: Duration) -> Self {
        Self {
            kind: BannerEffectKind::Shake,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn kind(&self) -> BannerEffectKind {
        self.kind
    }

    /// Progress in `[0, 1]`; completed effects report `1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.phase() {
            AnimPhase::Running { progress } => progress,
            AnimPhase::Completed => 1.0,
        }
    }
}
