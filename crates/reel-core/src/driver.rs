//! Scroll-reactive film driver.
//!
//! Scroll notifications push the target speed to a burst in the scroll
//! direction; once scrolling has been quiet for `idle_delay` the target falls
//! back to a slow drift in the last direction. Every animation tick eases the
//! speed toward the target and integrates it into the wrapped film offset.

use crate::constants::*;
use crate::easing::SpeedEasing;
use crate::period::{Period, PeriodicOffset};
use crate::timer::Deadline;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a scroll delta; `None` for zero (or NaN) so the caller keeps the previous one.
    pub fn from_delta(dy: f64) -> Option<Self> {
        if dy > 0.0 {
            Some(Direction::Forward)
        } else if dy < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    pub fn from_sign(sign: i8) -> Self {
        if sign < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FilmParams {
    pub burst_speed: f64,
    pub idle_speed: f64,
    pub accel: f64,
    pub decel: f64,
    pub idle_delay: Duration,
    pub initial_direction: Direction,
}

impl Default for FilmParams {
    fn default() -> Self {
        Self {
            burst_speed: FILM_BURST_SPEED,
            idle_speed: FILM_IDLE_SPEED,
            accel: FILM_ACCELERATION,
            decel: FILM_DECELERATION,
            idle_delay: FILM_IDLE_DELAY,
            initial_direction: Direction::from_sign(FILM_INITIAL_DIRECTION),
        }
    }
}

/// Snapshot of the film animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub offset: f64,
    pub speed: f64,
    pub target_speed: f64,
    pub direction: Direction,
    pub period: f64,
}

pub struct FilmDriver {
    params: FilmParams,
    easing: SpeedEasing,
    offset: PeriodicOffset,
    speed: f64,
    target_speed: f64,
    direction: Direction,
    last_scroll_top: f64,
    idle_decay: Deadline,
}

impl FilmDriver {
    pub fn new(params: FilmParams, viewport_width: f64, scroll_top: f64) -> Self {
        let direction = params.initial_direction;
        Self {
            easing: SpeedEasing::new(params.accel, params.decel),
            offset: PeriodicOffset::new(Period::from_viewport_width(viewport_width)),
            speed: 0.0,
            target_speed: params.idle_speed * direction.sign(),
            direction,
            last_scroll_top: scroll_top,
            idle_decay: Deadline::idle(),
            params,
        }
    }

    /// Handle a scroll notification carrying the viewport's new scroll position.
    pub fn on_scroll(&mut self, scroll_top: f64, now: Duration) {
        let dy = scroll_top - self.last_scroll_top;
        if let Some(dir) = Direction::from_delta(dy) {
            if dir != self.direction {
                log::debug!("[film] direction {:?} -> {:?}", self.direction, dir);
            }
            self.direction = dir;
        }
        self.last_scroll_top = scroll_top;
        self.target_speed = self.params.burst_speed * self.direction.sign();
        self.idle_decay.arm(now, self.params.idle_delay);
    }

    /// Advance one animation frame and return the wrapped offset to render.
    pub fn tick(&mut self, now: Duration) -> f64 {
        if self.idle_decay.fire(now) {
            self.target_speed = self.params.idle_speed * self.direction.sign();
        }
        self.speed = self.easing.step(self.speed, self.target_speed);
        self.offset.advance(self.speed)
    }

    /// Recompute the pattern period for a new viewport width.
    pub fn resize(&mut self, viewport_width: f64) {
        let period = Period::from_viewport_width(viewport_width);
        log::debug!("[film] period {:.2}px", period.get());
        self.offset.set_period(period);
    }

    pub fn idle_decay_pending(&self) -> bool {
        self.idle_decay.is_pending()
    }

    pub fn state(&self) -> AnimationState {
        AnimationState {
            offset: self.offset.offset(),
            speed: self.speed,
            target_speed: self.target_speed,
            direction: self.direction,
            period: self.offset.period().get(),
        }
    }

    pub fn dispose(&mut self) {
        self.idle_decay.cancel();
    }
}
