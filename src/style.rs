// Inline style values written by the DOM sink. Kept free of web-sys so the
// formatting can be checked on the host.

use reel_core::{TimingFunction, Transition};

#[inline]
pub fn translate_y(offset_px: f64) -> String {
    // 0.0 - x keeps a zero offset from printing as "-0"
    format!("translateY({}px)", 0.0 - offset_px)
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

#[inline]
pub fn opacity(value: f32) -> String {
    format!("{}", value)
}

pub fn timing_function(timing: TimingFunction) -> &'static str {
    match timing {
        TimingFunction::EaseInOut => "ease-in-out",
        TimingFunction::EaseOut => "ease-out",
    }
}

pub fn opacity_transition(transition: Transition) -> String {
    format!(
        "opacity {}s {}",
        transition.duration().as_secs_f64(),
        timing_function(transition.timing())
    )
}
