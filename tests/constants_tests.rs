// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn selectors_are_class_or_element_queries() {
    for sel in [
        VIEWPORT_SELECTOR,
        FILM_OVERLAY_SELECTOR,
        NOISE_LAYER_SELECTOR,
        HEADER_LOGO_SELECTOR,
        HORIZONTAL_REGION_SELECTOR,
        HORIZONTAL_TRACK_SELECTOR,
        UNMUTE_TOGGLE_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
    }
    assert_eq!(NAV_LINK_SELECTOR, "nav a");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_thresholds_are_fractions() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(SECTION_MUTE_THRESHOLD > 0.0 && SECTION_MUTE_THRESHOLD <= 1.0);
    assert!(SECTION_MUTE_THRESHOLD > REVEAL_THRESHOLD);
}
