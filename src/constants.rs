// DOM hooks the front-end binds to. Markup is expected to provide these;
// anything missing disables only the effect that needs it.

pub const VIEWPORT_SELECTOR: &str = ".viewport-frame"; // vertical scroll container
pub const FILM_OVERLAY_SELECTOR: &str = ".film-overlay";
pub const NOISE_LAYER_SELECTOR: &str = ".noise-overlay";
pub const HEADER_LOGO_SELECTOR: &str = ".header-logo";
pub const HORIZONTAL_REGION_SELECTOR: &str = ".horizontal-section"; // gates horizontal mode
pub const HORIZONTAL_TRACK_SELECTOR: &str = ".horizontal-track"; // scrolls sideways
pub const NAV_LINK_SELECTOR: &str = "nav a";
pub const REVEAL_SELECTOR: &str = ".section-title, .section-content";
pub const SECTION_SELECTOR: &str = "section";
pub const UNMUTE_TOGGLE_SELECTOR: &str = ".unmute-toggle";

pub const HEADER_LOGO_VISIBLE_CLASS: &str = "header-logo-visible";
pub const REVEALED_CLASS: &str = "visible";

// IntersectionObserver thresholds
pub const REVEAL_THRESHOLD: f64 = 0.3; // fraction of a title/content block in view
pub const SECTION_MUTE_THRESHOLD: f64 = 0.6; // fraction of a video section in view
