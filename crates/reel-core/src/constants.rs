use std::time::Duration;

// Shared tuning constants for the film, grain and scroll-mode effects.
// Speeds are in px per animation frame, rates in px/frame per frame.

// Film overlay speeds
pub const FILM_BURST_SPEED: f64 = 15.0; // target speed while the user is scrolling
pub const FILM_IDLE_SPEED: f64 = 0.3; // ambient drift when nothing scrolls
pub const FILM_ACCELERATION: f64 = 2.0; // ramp-up toward a faster target
pub const FILM_DECELERATION: f64 = 0.7; // ramp-down toward a slower target
pub const FILM_IDLE_DELAY: Duration = Duration::from_millis(200); // scroll quiet time before idle
pub const FILM_INITIAL_DIRECTION: i8 = 1;

// Film pattern geometry
pub const PATTERN_PERIOD_VW: f64 = 6.0; // pattern repeats every 6vw
pub const MIN_PERIOD_PX: f64 = 1.0; // floor for degenerate viewport widths
pub const OVERLAY_HEIGHT_VIEWPORTS: f64 = 2.0; // overlay is kept two viewports tall
pub const MIN_OVERLAY_HEIGHT_PX: f64 = 1.0; // keeps the overlay non-empty when layout reports 0

// Grain / noise cycling
pub const NOISE_STEPS_PER_SEC: u32 = 24;
pub const NOISE_FADE_DELAY: Duration = Duration::from_millis(3000);
pub const NOISE_REST_OPACITY: f32 = 0.5; // opacity every layer settles at after the fade
pub const NOISE_QUICK_TRANSITION: Duration = Duration::from_millis(200);
pub const NOISE_REST_TRANSITION: Duration = Duration::from_millis(3000);

// Horizontal scroll mode
pub const HORIZONTAL_STEP_PX: f64 = 100.0; // fixed pan per wheel notch

// Header
pub const HEADER_LOGO_THRESHOLD_PX: f64 = 300.0;

#[inline]
pub fn noise_step_interval() -> Duration {
    Duration::from_secs(1) / NOISE_STEPS_PER_SEC
}
