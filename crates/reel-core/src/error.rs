use thiserror::Error;

/// Errors raised by the raw arithmetic entry points.
///
/// The controllers never surface these: they substitute fallbacks instead, so
/// an effect degrades to "disabled" rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReelError {
    #[error("period must be positive, got {0}")]
    NonPositivePeriod(f64),
    #[error("value must be finite, got {0}")]
    NonFiniteValue(f64),
}

pub type Result<T> = std::result::Result<T, ReelError>;
