//! Point-count validation.
//!
//! The points field holds whatever number the player typed. It is only
//! checked when a round starts; `PointCount` is the checked form.
//!
//! Existence of a `PointCount` is the proof that it is a positive integer.

use std::num::NonZeroU32;

/// Largest round that can be started. Matches the four-digit points field.
pub const MAX_POINT_COUNT: u32 = 9999;

/// Why a round could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing point count")]
    MissingPointCount,
    #[error("must enter a positive integer")]
    NotPositiveInteger,
    #[error("must enter at most 9999 points")]
    TooManyPoints,
}

/// Validated number of circles in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointCount(NonZeroU32);

impl PointCount {
    #[must_use]
    pub fn new(count: NonZeroU32) -> Self {
        Self(count)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<f64> for PointCount {
    type Error = ValidationError;

    /// Zero (either sign) is "missing". Negative, fractional and non-finite
    /// values are not positive integers. Anything past [`MAX_POINT_COUNT`]
    /// is too many.
    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        if raw == 0.0 {
            return Err(ValidationError::MissingPointCount);
        }
        if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
            return Err(ValidationError::NotPositiveInteger);
        }
        if raw > f64::from(MAX_POINT_COUNT) {
            return Err(ValidationError::TooManyPoints);
        }
        Self::try_from(raw as u32)
    }
}

impl TryFrom<u32> for PointCount {
    type Error = ValidationError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        if raw > MAX_POINT_COUNT {
            return Err(ValidationError::TooManyPoints);
        }
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(ValidationError::MissingPointCount)
    }
}
