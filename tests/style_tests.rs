// Host-side tests for inline style formatting.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use reel_core::{TimingFunction, Transition};
use style::*;

#[test]
fn translate_moves_film_up_by_offset() {
    assert_eq!(translate_y(12.5), "translateY(-12.5px)");
    assert_eq!(translate_y(0.0), "translateY(0px)");
}

#[test]
fn opacity_and_px_print_plain_numbers() {
    assert_eq!(opacity(1.0), "1");
    assert_eq!(opacity(0.0), "0");
    assert_eq!(opacity(0.5), "0.5");
    assert_eq!(px(1400.0), "1400px");
}

#[test]
fn transitions_match_grain_timings() {
    assert_eq!(
        opacity_transition(Transition::Quick),
        "opacity 0.2s ease-in-out"
    );
    assert_eq!(opacity_transition(Transition::Rest), "opacity 3s ease-out");
}

#[test]
fn timing_function_keywords() {
    assert_eq!(timing_function(TimingFunction::EaseInOut), "ease-in-out");
    assert_eq!(timing_function(TimingFunction::EaseOut), "ease-out");
}
