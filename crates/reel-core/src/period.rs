//! Wrapped scalar offset over a repeating pattern period.
//!
//! The film texture repeats every `period` pixels, so its translation only
//! matters modulo the period. Keeping the stored offset wrapped stops it from
//! accumulating float error over a long session.

use crate::constants::{MIN_PERIOD_PX, PATTERN_PERIOD_VW};
use crate::error::{ReelError, Result};

/// A pattern period that is guaranteed to be finite and positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Period(f64);

impl Period {
    pub fn new(px: f64) -> Result<Self> {
        if !px.is_finite() {
            return Err(ReelError::NonFiniteValue(px));
        }
        if px <= 0.0 {
            return Err(ReelError::NonPositivePeriod(px));
        }
        Ok(Self(px))
    }

    /// Like [`Period::new`] but substitutes the minimum period for degenerate input.
    pub fn or_min(px: f64) -> Self {
        Self::new(px).unwrap_or(Self(MIN_PERIOD_PX))
    }

    /// Pattern period for a viewport of the given width (6vw).
    pub fn from_viewport_width(width_px: f64) -> Self {
        Self::or_min(PATTERN_PERIOD_VW / 100.0 * width_px)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// `((value mod period) + period) mod period`, always in `[0, period)`.
#[inline]
pub fn wrap(value: f64, period: f64) -> Result<f64> {
    if period.is_nan() || period <= 0.0 {
        return Err(ReelError::NonPositivePeriod(period));
    }
    if period.is_infinite() {
        return Err(ReelError::NonFiniteValue(period));
    }
    if !value.is_finite() {
        return Err(ReelError::NonFiniteValue(value));
    }
    Ok(wrap_unchecked(value, period))
}

/// Advance `offset` by `speed` and wrap the result into `[0, period)`.
#[inline]
pub fn advance(offset: f64, speed: f64, period: f64) -> Result<f64> {
    wrap(offset + speed, period)
}

#[inline]
fn wrap_unchecked(value: f64, period: f64) -> f64 {
    let wrapped = (value % period + period) % period;
    // (-tiny % p) + p can round up to exactly p
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Owned offset that stays wrapped to its current period.
#[derive(Clone, Copy, Debug)]
pub struct PeriodicOffset {
    offset: f64,
    period: Period,
}

impl PeriodicOffset {
    pub fn new(period: Period) -> Self {
        Self {
            offset: 0.0,
            period,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Integrate one tick of `speed`. Non-finite speeds leave the offset untouched.
    pub fn advance(&mut self, speed: f64) -> f64 {
        if speed.is_finite() {
            self.offset = wrap_unchecked(self.offset + speed, self.period.get());
        }
        self.offset
    }

    /// Switch to a new period and re-normalize the stored offset against it.
    pub fn set_period(&mut self, period: Period) {
        self.period = period;
        self.renormalize();
    }

    /// Idempotent: a second call with the same period is a no-op.
    pub fn renormalize(&mut self) {
        self.offset = wrap_unchecked(self.offset, self.period.get());
    }
}
