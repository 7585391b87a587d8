// Host-side tests for the vertical-to-horizontal scroll mode.

use reel_core::*;

const VIEWPORT_H: f64 = 800.0;

fn track(max: f64) -> HorizontalExtent {
    HorizontalExtent {
        scroll_width: 1000.0 + max,
        client_width: 1000.0,
    }
}

fn in_view() -> RegionBounds {
    RegionBounds {
        top: 200.0,
        bottom: 900.0,
    }
}

fn active_transducer() -> ScrollModeTransducer {
    let mut t = ScrollModeTransducer::new(ScrollModeParams::default());
    assert!(t.on_scroll(in_view(), VIEWPORT_H));
    t
}

#[test]
fn region_overlap_detection() {
    assert!(region_in_view(in_view(), VIEWPORT_H));
    assert!(!region_in_view(
        RegionBounds {
            top: 800.0,
            bottom: 1500.0
        },
        VIEWPORT_H
    ));
    assert!(!region_in_view(
        RegionBounds {
            top: -700.0,
            bottom: 0.0
        },
        VIEWPORT_H
    ));
    assert!(region_in_view(
        RegionBounds {
            top: -700.0,
            bottom: 1.0
        },
        VIEWPORT_H
    ));
}

#[test]
fn mode_follows_region_position() {
    let mut t = ScrollModeTransducer::new(ScrollModeParams::default());
    assert!(!t.is_active());
    assert!(t.on_scroll(in_view(), VIEWPORT_H));
    let gone = RegionBounds {
        top: -900.0,
        bottom: -100.0,
    };
    assert!(!t.on_scroll(gone, VIEWPORT_H));
    assert!(t.on_scroll(in_view(), VIEWPORT_H));
}

#[test]
fn wheel_passes_through_in_vertical_mode() {
    let mut t = ScrollModeTransducer::new(ScrollModeParams::default());
    let out = t.on_wheel(120.0, track(500.0));
    assert_eq!(out, WheelOutcome::Passthrough);
    assert!(!out.suppresses_default());
}

#[test]
fn wheel_steps_by_fixed_amount_regardless_of_delta() {
    let mut t = active_transducer();
    let out = t.on_wheel(3.0, track(500.0));
    assert_eq!(
        out,
        WheelOutcome::Intercepted {
            scroll_left: HORIZONTAL_STEP_PX,
            exited: false
        }
    );
    let out = t.on_wheel(900.0, track(500.0));
    assert_eq!(
        out,
        WheelOutcome::Intercepted {
            scroll_left: 2.0 * HORIZONTAL_STEP_PX,
            exited: false
        }
    );
    assert!(out.suppresses_default());
}

#[test]
fn backward_intent_at_start_exits_without_going_negative() {
    let mut t = active_transducer();
    let out = t.on_wheel(-40.0, track(500.0));
    assert_eq!(
        out,
        WheelOutcome::Intercepted {
            scroll_left: 0.0,
            exited: true
        }
    );
    assert!(!t.is_active());
    let s = t.state();
    assert_eq!(s.scroll_left, 0.0);
    assert_eq!(s.max_scroll_left, 500.0);
}

#[test]
fn forward_intent_at_end_exits_clamped() {
    let mut t = active_transducer();
    for _ in 0..4 {
        t.on_wheel(1.0, track(450.0));
    }
    assert!(t.is_active());
    assert_eq!(t.state().scroll_left, 400.0);
    let out = t.on_wheel(1.0, track(450.0));
    assert_eq!(
        out,
        WheelOutcome::Intercepted {
            scroll_left: 450.0,
            exited: true
        }
    );
    assert!(!t.is_active());
}

#[test]
fn max_scroll_left_is_recomputed_from_current_layout() {
    let mut t = active_transducer();
    t.on_wheel(1.0, track(500.0));
    t.on_wheel(1.0, track(500.0));
    assert_eq!(t.state().scroll_left, 200.0);
    // Track shrank after a resize: position clamps to the new end.
    let out = t.on_wheel(1.0, track(150.0));
    assert_eq!(
        out,
        WheelOutcome::Intercepted {
            scroll_left: 150.0,
            exited: true
        }
    );
}

#[test]
fn zero_delta_passes_through_in_horizontal_mode() {
    let mut t = active_transducer();
    t.sync_scroll_left(200.0, track(500.0));
    let out = t.on_wheel(0.0, track(500.0));
    assert_eq!(out, WheelOutcome::Passthrough);
    assert!(!out.suppresses_default());
    assert!(t.is_active());
    assert_eq!(t.state().scroll_left, 200.0);
}

#[test]
fn level_triggered_reentry_after_exit() {
    let mut t = active_transducer();
    t.on_wheel(-1.0, track(500.0));
    assert!(!t.is_active());
    assert!(t.on_scroll(in_view(), VIEWPORT_H));
}

#[test]
fn sync_adopts_external_position() {
    let mut t = active_transducer();
    t.sync_scroll_left(320.0, track(300.0));
    assert_eq!(t.state().scroll_left, 300.0);
    t.on_wheel(-1.0, track(300.0));
    assert_eq!(t.state().scroll_left, 200.0);
}

#[test]
fn track_narrower_than_client_has_no_room() {
    let extent = HorizontalExtent {
        scroll_width: 400.0,
        client_width: 600.0,
    };
    assert_eq!(extent.max_scroll_left(), 0.0);
}
