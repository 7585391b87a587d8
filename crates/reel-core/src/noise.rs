//! Film-grain layer cycling.
//!
//! N stacked grain layers are shown one at a time at a fixed step rate. The
//! cycle loop is a pending `step` deadline: stopping revokes it, so no step
//! can run after a stop even if the caller keeps ticking. Stopping also arms
//! a delayed fade that settles every layer at the rest opacity; starting again
//! before that delay elapses revokes the fade.

use crate::constants::*;
use crate::sink::{LayerUpdate, RenderSink, Transition};
use crate::timer::Deadline;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct NoiseParams {
    pub step_interval: Duration,
    pub fade_delay: Duration,
    pub rest_opacity: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            step_interval: noise_step_interval(),
            fade_delay: NOISE_FADE_DELAY,
            rest_opacity: NOISE_REST_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoisePhase {
    Stopped,
    Cycling,
    /// Stopped, waiting for the delayed fade to the rest opacity.
    Fading,
}

/// Snapshot of the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoiseState {
    pub frame_index: u64,
    pub cycling: bool,
    pub layer_count: usize,
}

pub struct NoiseSequencer {
    params: NoiseParams,
    layer_count: usize,
    frame_index: u64,
    cycling: bool,
    step: Deadline,
    fade: Deadline,
    rested: bool,
}

impl NoiseSequencer {
    pub fn new(layer_count: usize, params: NoiseParams) -> Self {
        Self {
            params,
            layer_count,
            frame_index: 0,
            cycling: false,
            step: Deadline::idle(),
            fade: Deadline::idle(),
            rested: false,
        }
    }

    pub fn active_layer(&self) -> Option<usize> {
        (self.layer_count > 0).then(|| (self.frame_index % self.layer_count as u64) as usize)
    }

    pub fn phase(&self) -> NoisePhase {
        if self.cycling {
            NoisePhase::Cycling
        } else if self.fade.is_pending() {
            NoisePhase::Fading
        } else {
            NoisePhase::Stopped
        }
    }

    /// True once the rest fade has been applied and nothing restarted the cycle.
    pub fn is_rested(&self) -> bool {
        self.rested
    }

    pub fn state(&self) -> NoiseState {
        NoiseState {
            frame_index: self.frame_index,
            cycling: self.cycling,
            layer_count: self.layer_count,
        }
    }

    pub fn start(&mut self, now: Duration, sink: &mut impl RenderSink) {
        let Some(active) = self.active_layer() else {
            return;
        };
        self.fade.cancel();
        self.rested = false;
        self.cycling = true;
        sink.apply_layers(&LayerUpdate::solo(
            self.layer_count,
            active,
            Some(Transition::Quick),
        ));
        if !self.step.is_pending() {
            log::debug!("[noise] cycle loop started at frame {}", self.frame_index);
            self.cycle(now, sink);
        }
    }

    pub fn stop_with_fade(&mut self, now: Duration) {
        if self.layer_count == 0 {
            return;
        }
        self.cycling = false;
        self.step.cancel();
        self.fade.arm(now, self.params.fade_delay);
        log::debug!("[noise] stopped at frame {}", self.frame_index);
    }

    /// Poll both timers; call once per animation frame.
    pub fn tick(&mut self, now: Duration, sink: &mut impl RenderSink) {
        if self.layer_count == 0 {
            return;
        }
        if self.fade.fire(now) {
            self.rested = true;
            sink.apply_layers(&LayerUpdate::uniform(
                self.layer_count,
                self.params.rest_opacity,
                Some(Transition::Rest),
            ));
        }
        if self.step.fire(now) {
            self.cycle(now, sink);
        }
    }

    pub fn dispose(&mut self) {
        self.cycling = false;
        self.step.cancel();
        self.fade.cancel();
    }

    fn cycle(&mut self, now: Duration, sink: &mut impl RenderSink) {
        if !self.cycling {
            return;
        }
        let Some(active) = self.active_layer() else {
            return;
        };
        sink.apply_layers(&LayerUpdate::solo(self.layer_count, active, None));
        self.frame_index += 1;
        self.step.arm(now, self.params.step_interval);
    }
}
