//! Composition root owning every effect for one page lifetime.
//!
//! Effects whose render targets are missing are simply absent; the others run
//! unaffected. `dispose` cancels every pending deadline and turns all further
//! calls into no-ops.

use crate::constants::HEADER_LOGO_THRESHOLD_PX;
use crate::driver::{FilmDriver, FilmParams};
use crate::noise::{NoiseParams, NoiseSequencer};
use crate::scroll_mode::{
    HorizontalExtent, RegionBounds, ScrollModeParams, ScrollModeTransducer, WheelOutcome,
};
use crate::sink::RenderSink;
use crate::ui::header_logo_visible;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct StageParams {
    pub film: FilmParams,
    pub noise: NoiseParams,
    pub scroll_mode: ScrollModeParams,
    pub header_logo_threshold: f64,
}

impl Default for StageParams {
    fn default() -> Self {
        Self {
            film: FilmParams::default(),
            noise: NoiseParams::default(),
            scroll_mode: ScrollModeParams::default(),
            header_logo_threshold: HEADER_LOGO_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilmLayout {
    pub viewport_width: f64,
    pub scroll_top: f64,
}

/// Which render targets were found at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageLayout {
    pub film: Option<FilmLayout>,
    pub noise_layers: usize,
    pub horizontal_region: bool,
    pub header_logo: bool,
}

/// Geometry read from the page on each scroll notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub height: f64,
    pub region: Option<RegionBounds>,
}

pub struct Stage {
    film: Option<FilmDriver>,
    noise: NoiseSequencer,
    scroll_mode: Option<ScrollModeTransducer>,
    header_logo: Option<bool>,
    header_logo_threshold: f64,
    disposed: bool,
}

impl Stage {
    pub fn new(params: StageParams, layout: StageLayout) -> Self {
        let StageParams {
            film,
            noise,
            scroll_mode,
            header_logo_threshold,
        } = params;
        Self {
            film: layout
                .film
                .map(|l| FilmDriver::new(film, l.viewport_width, l.scroll_top)),
            noise: NoiseSequencer::new(layout.noise_layers, noise),
            scroll_mode: layout
                .horizontal_region
                .then(|| ScrollModeTransducer::new(scroll_mode)),
            header_logo: layout.header_logo.then_some(false),
            header_logo_threshold,
            disposed: false,
        }
    }

    pub fn film(&self) -> Option<&FilmDriver> {
        self.film.as_ref()
    }

    pub fn noise(&self) -> &NoiseSequencer {
        &self.noise
    }

    pub fn scroll_mode(&self) -> Option<&ScrollModeTransducer> {
        self.scroll_mode.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// One animation frame: film easing/offset and grain timers.
    pub fn frame(&mut self, now: Duration, sink: &mut impl RenderSink) {
        if self.disposed {
            return;
        }
        if let Some(film) = &mut self.film {
            let offset = film.tick(now);
            sink.translate_film(offset);
        }
        self.noise.tick(now, sink);
    }

    pub fn on_scroll(
        &mut self,
        scroll_top: f64,
        geometry: ViewportGeometry,
        now: Duration,
        sink: &mut impl RenderSink,
    ) {
        if self.disposed {
            return;
        }
        if let Some(film) = &mut self.film {
            film.on_scroll(scroll_top, now);
        }
        if let (Some(mode), Some(region)) = (&mut self.scroll_mode, geometry.region) {
            mode.on_scroll(region, geometry.height);
        }
        if let Some(shown) = &mut self.header_logo {
            let visible = header_logo_visible(scroll_top, self.header_logo_threshold);
            if visible != *shown {
                *shown = visible;
                sink.set_header_logo_visible(visible);
            }
        }
    }

    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        extent: HorizontalExtent,
        sink: &mut impl RenderSink,
    ) -> WheelOutcome {
        if self.disposed {
            return WheelOutcome::Passthrough;
        }
        let Some(mode) = &mut self.scroll_mode else {
            return WheelOutcome::Passthrough;
        };
        let outcome = mode.on_wheel(delta_y, extent);
        if let WheelOutcome::Intercepted { scroll_left, .. } = outcome {
            sink.scroll_region_to(scroll_left);
        }
        outcome
    }

    pub fn sync_scroll_left(&mut self, scroll_left: f64, extent: HorizontalExtent) {
        if let Some(mode) = &mut self.scroll_mode {
            mode.sync_scroll_left(scroll_left, extent);
        }
    }

    pub fn resize(&mut self, viewport_width: f64) {
        if self.disposed {
            return;
        }
        if let Some(film) = &mut self.film {
            film.resize(viewport_width);
        }
    }

    pub fn start_noise(&mut self, now: Duration, sink: &mut impl RenderSink) {
        if !self.disposed {
            self.noise.start(now, sink);
        }
    }

    pub fn stop_noise(&mut self, now: Duration) {
        if !self.disposed {
            self.noise.stop_with_fade(now);
        }
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(film) = &mut self.film {
            film.dispose();
        }
        self.noise.dispose();
        if let Some(mode) = &mut self.scroll_mode {
            mode.dispose();
        }
        self.disposed = true;
        log::debug!("[stage] disposed");
    }
}
