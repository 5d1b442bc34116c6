// Construction-time errors
// Everything evaluated per tick is infallible; only setup can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    /// The arena or robot dimensions reported by the host cannot describe a real battlefield.
    #[error("invalid arena binding: {field} = {value} (must be finite and positive)")]
    InvalidArena { field: &'static str, value: f64 },

    #[error("invalid bullet power range: min {min} must be positive and not above max {max}")]
    InvalidPowerRange { min: f64, max: f64 },

    #[error("invalid range for {name}: {min}..{max}")]
    InvalidRange { name: &'static str, min: f64, max: f64 },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: f64 },
}

/// Check that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, SetupError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SetupError::InvalidValue { name, value })
    }
}

/// Check that `min..=max` is a usable, finite, non-negative range.
pub(crate) fn require_range(name: &'static str, min: f64, max: f64) -> Result<(), SetupError> {
    if min.is_finite() && max.is_finite() && min >= 0.0 && min <= max {
        Ok(())
    } else {
        Err(SetupError::InvalidRange { name, min, max })
    }
}
