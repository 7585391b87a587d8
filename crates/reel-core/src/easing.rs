/// Asymmetric linear easing toward a target speed.
///
/// Speeding up moves by `accel` per tick, slowing down by `decel`; both clamp
/// at the target so the result never overshoots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedEasing {
    pub accel: f64,
    pub decel: f64,
}

impl SpeedEasing {
    pub fn new(accel: f64, decel: f64) -> Self {
        Self {
            accel: accel.abs(),
            decel: decel.abs(),
        }
    }

    #[inline]
    pub fn step(&self, speed: f64, target: f64) -> f64 {
        ease_speed(speed, target, self.accel, self.decel)
    }
}

/// One easing tick. Equal speeds (and NaN comparisons) leave `speed` unchanged.
#[inline]
pub fn ease_speed(speed: f64, target: f64, accel: f64, decel: f64) -> f64 {
    if speed < target {
        (speed + accel).min(target)
    } else if speed > target {
        (speed - decel).max(target)
    } else {
        speed
    }
}
