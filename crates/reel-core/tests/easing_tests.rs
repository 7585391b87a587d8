// Host-side tests for asymmetric speed easing.

use reel_core::*;

#[test]
fn first_step_moves_by_accel() {
    assert_eq!(ease_speed(0.0, 15.0, 2.0, 0.7), 2.0);
}

#[test]
fn ramp_up_reaches_target_without_overshoot() {
    let easing = SpeedEasing::new(2.0, 0.7);
    let mut speed = 0.0;
    for _ in 0..8 {
        speed = easing.step(speed, 15.0);
    }
    assert_eq!(speed, 15.0);
}

#[test]
fn ramp_down_uses_decel_rate() {
    let easing = SpeedEasing::new(2.0, 0.5);
    let mut speed = 15.0;
    let mut ticks = 0;
    while speed != 0.5 {
        speed = easing.step(speed, 0.5);
        ticks += 1;
        assert!(ticks <= 29, "did not converge");
    }
    assert_eq!(ticks, 29);
}

#[test]
fn equal_speed_is_unchanged() {
    assert_eq!(ease_speed(0.3, 0.3, 2.0, 0.7), 0.3);
}

#[test]
fn never_overshoots_between_speed_and_target() {
    let values = [-15.0, -4.4, -0.3, 0.0, 0.3, 1.9, 2.0, 7.25, 15.0];
    for &speed in &values {
        for &target in &values {
            let next = ease_speed(speed, target, FILM_ACCELERATION, FILM_DECELERATION);
            let (lo, hi) = if speed <= target {
                (speed, target)
            } else {
                (target, speed)
            };
            assert!(
                next >= lo && next <= hi,
                "{speed} -> {target} produced {next}"
            );
        }
    }
}

#[test]
fn converges_within_ceil_delta_over_rate() {
    let easing = SpeedEasing::new(2.0, 0.5);
    for &(from, to) in &[(0.0, 15.0), (-15.0, 15.0), (15.0, 0.25), (15.0, -15.0)] {
        let rate = if to > from { easing.accel } else { easing.decel };
        let bound = ((to - from) / rate).abs().ceil() as usize;
        let mut speed = from;
        for _ in 0..bound {
            speed = easing.step(speed, to);
        }
        assert_eq!(speed, to, "{from} -> {to} not reached in {bound} ticks");
    }
}

#[test]
fn negative_rates_are_treated_as_magnitudes() {
    let easing = SpeedEasing::new(-2.0, -0.7);
    assert_eq!(easing.step(0.0, 5.0), 2.0);
}
