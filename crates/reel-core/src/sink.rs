//! Presentation seam. The core emits commands here and never reads back what
//! was rendered.

use crate::constants::{NOISE_QUICK_TRANSITION, NOISE_REST_TRANSITION};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimingFunction {
    EaseInOut,
    EaseOut,
}

/// Opacity transition attached to a layer update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Short cross-fade used while grain is cycling.
    Quick,
    /// Slow settle to the rest opacity after grain stops.
    Rest,
}

impl Transition {
    pub fn duration(self) -> Duration {
        match self {
            Transition::Quick => NOISE_QUICK_TRANSITION,
            Transition::Rest => NOISE_REST_TRANSITION,
        }
    }

    pub fn timing(self) -> TimingFunction {
        match self {
            Transition::Quick => TimingFunction::EaseInOut,
            Transition::Rest => TimingFunction::EaseOut,
        }
    }
}

/// Opacity for every grain layer, indexed by layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerUpdate {
    pub opacities: SmallVec<[f32; 4]>,
    /// `None` keeps whatever transition the layers already carry.
    pub transition: Option<Transition>,
}

impl LayerUpdate {
    /// Layer `active` fully opaque, every other layer hidden.
    pub fn solo(layer_count: usize, active: usize, transition: Option<Transition>) -> Self {
        Self {
            opacities: (0..layer_count)
                .map(|i| if i == active { 1.0 } else { 0.0 })
                .collect(),
            transition,
        }
    }

    pub fn uniform(layer_count: usize, opacity: f32, transition: Option<Transition>) -> Self {
        Self {
            opacities: SmallVec::from_elem(opacity, layer_count),
            transition,
        }
    }

    /// Index of the single fully-opaque layer, if there is one.
    pub fn active_layer(&self) -> Option<usize> {
        let mut lit = self.opacities.iter().enumerate().filter(|(_, o)| **o >= 1.0);
        match (lit.next(), lit.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }
}

pub trait RenderSink {
    /// Translate the film overlay up by `offset_px`.
    fn translate_film(&mut self, offset_px: f64);
    fn apply_layers(&mut self, update: &LayerUpdate);
    fn scroll_region_to(&mut self, scroll_left: f64);
    fn set_header_logo_visible(&mut self, visible: bool);
}
