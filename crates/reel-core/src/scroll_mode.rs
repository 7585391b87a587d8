//! Vertical-to-horizontal scroll mode.
//!
//! While the gating region overlaps the viewport, wheel input is taken away
//! from the vertical scroller and turned into fixed-size horizontal steps on
//! the region's track. Reaching either end of the track while still pushing
//! in that direction hands control back to vertical scrolling.

use crate::constants::HORIZONTAL_STEP_PX;
use crate::driver::Direction;

/// Bounding box of the gating region, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Current layout of the horizontally scrolling track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalExtent {
    pub scroll_width: f64,
    pub client_width: f64,
}

impl HorizontalExtent {
    pub fn max_scroll_left(&self) -> f64 {
        let max = self.scroll_width - self.client_width;
        if max.is_finite() {
            max.max(0.0)
        } else {
            0.0
        }
    }
}

/// Any overlap between the region and the visible window.
#[inline]
pub fn region_in_view(region: RegionBounds, viewport_height: f64) -> bool {
    region.top < viewport_height && region.bottom > 0.0
}

#[derive(Clone, Debug)]
pub struct ScrollModeParams {
    pub step_px: f64,
}

impl Default for ScrollModeParams {
    fn default() -> Self {
        Self {
            step_px: HORIZONTAL_STEP_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollModeState {
    pub active: bool,
    pub scroll_left: f64,
    pub max_scroll_left: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// Vertical mode: let the wheel scroll the page as usual.
    Passthrough,
    /// Horizontal mode: suppress the vertical effect and move the track.
    Intercepted { scroll_left: f64, exited: bool },
}

impl WheelOutcome {
    pub fn suppresses_default(&self) -> bool {
        matches!(self, WheelOutcome::Intercepted { .. })
    }
}

pub struct ScrollModeTransducer {
    params: ScrollModeParams,
    active: bool,
    scroll_left: f64,
    max_scroll_left: f64,
}

impl ScrollModeTransducer {
    pub fn new(params: ScrollModeParams) -> Self {
        Self {
            params,
            active: false,
            scroll_left: 0.0,
            max_scroll_left: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> ScrollModeState {
        ScrollModeState {
            active: self.active,
            scroll_left: self.scroll_left,
            max_scroll_left: self.max_scroll_left,
        }
    }

    /// Re-evaluate the mode from the region's position. Level-triggered: the
    /// result depends only on the current geometry.
    pub fn on_scroll(&mut self, region: RegionBounds, viewport_height: f64) -> bool {
        let active = region_in_view(region, viewport_height);
        if active != self.active {
            log::debug!(
                "[scroll-mode] {}",
                if active { "horizontal" } else { "vertical" }
            );
        }
        self.active = active;
        self.active
    }

    /// Adopt a track position changed outside the transducer (scrollbar drag, layout).
    pub fn sync_scroll_left(&mut self, scroll_left: f64, extent: HorizontalExtent) {
        self.max_scroll_left = extent.max_scroll_left();
        if scroll_left.is_finite() {
            self.scroll_left = scroll_left.clamp(0.0, self.max_scroll_left);
        }
    }

    /// Route one wheel notification. Only the sign of `delta_y` matters.
    pub fn on_wheel(&mut self, delta_y: f64, extent: HorizontalExtent) -> WheelOutcome {
        if !self.active {
            return WheelOutcome::Passthrough;
        }
        self.max_scroll_left = extent.max_scroll_left();
        // No vertical intent: leave sideways swipes to the track's native scroll.
        let Some(intent) = Direction::from_delta(delta_y) else {
            return WheelOutcome::Passthrough;
        };
        self.scroll_left = (self.scroll_left + self.params.step_px * intent.sign())
            .clamp(0.0, self.max_scroll_left);
        let exited = match intent {
            Direction::Backward => self.scroll_left <= 0.0,
            Direction::Forward => self.scroll_left >= self.max_scroll_left,
        };
        if exited {
            log::debug!("[scroll-mode] exit at {:.0}px {:?}", self.scroll_left, intent);
            self.active = false;
        }
        WheelOutcome::Intercepted {
            scroll_left: self.scroll_left,
            exited,
        }
    }

    pub fn dispose(&mut self) {
        self.active = false;
    }
}
