// Host-side tests for the wrapped film offset.

use reel_core::*;

#[test]
fn advance_wraps_past_period_end() {
    assert_eq!(advance(98.0, 5.0, 100.0).unwrap(), 3.0);
}

#[test]
fn advance_with_negative_speed_stays_non_negative() {
    assert_eq!(advance(2.0, -5.0, 100.0).unwrap(), 97.0);
    assert_eq!(advance(0.0, -250.0, 100.0).unwrap(), 50.0);
}

#[test]
fn advance_rejects_degenerate_period() {
    assert_eq!(
        advance(1.0, 1.0, 0.0),
        Err(ReelError::NonPositivePeriod(0.0))
    );
}

#[test]
fn repeated_advance_keeps_offset_in_range() {
    for &period in &[0.5, 1.0, 7.3, 60.0, 1234.5] {
        for &speed in &[-31.7, -15.0, -0.7, -0.3, 0.0, 0.3, 2.0, 15.0, 99.9] {
            let mut off = PeriodicOffset::new(Period::new(period).unwrap());
            for _ in 0..500 {
                let o = off.advance(speed);
                assert!(
                    (0.0..period).contains(&o),
                    "offset {o} out of [0, {period}) for speed {speed}"
                );
            }
        }
    }
}

#[test]
fn renormalize_is_idempotent() {
    let mut off = PeriodicOffset::new(Period::new(100.0).unwrap());
    off.advance(87.5);
    off.set_period(Period::new(30.0).unwrap());
    let once = off.offset();
    off.renormalize();
    assert_eq!(off.offset(), once);
    assert_eq!(once, 27.5);
}

#[test]
fn resize_to_larger_period_keeps_offset() {
    let mut off = PeriodicOffset::new(Period::new(60.0).unwrap());
    off.advance(45.0);
    off.set_period(Period::new(120.0).unwrap());
    assert_eq!(off.offset(), 45.0);
}

#[test]
fn non_finite_speed_is_ignored() {
    let mut off = PeriodicOffset::new(Period::new(60.0).unwrap());
    off.advance(10.0);
    assert_eq!(off.advance(f64::NAN), 10.0);
    assert_eq!(off.advance(f64::INFINITY), 10.0);
}

#[test]
fn period_constructor_validates() {
    assert!(Period::new(1.0).is_ok());
    assert_eq!(Period::new(0.0), Err(ReelError::NonPositivePeriod(0.0)));
    assert!(matches!(
        Period::new(f64::INFINITY),
        Err(ReelError::NonFiniteValue(_))
    ));
    assert_eq!(Period::or_min(-4.0).get(), MIN_PERIOD_PX);
}
