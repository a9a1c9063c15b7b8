//! Error type shared by every cyberslug component.

use crate::odor::{OdorKind, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlugError>;

/// Failures surfaced synchronously to the caller of a tick or constructor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SlugError {
    /// The odor field returned a negative or non-finite concentration.
    #[error("invalid {odor:?} reading on {side:?} antenna: {value}")]
    InvalidOdorReading {
        odor: OdorKind,
        side: Side,
        value: f64,
    },

    /// A construction parameter lies outside its admissible range.
    #[error("invalid configuration: {parameter} = {value} ({reason})")]
    Configuration {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A derived quantity became non-finite despite the clamping guards.
    #[error("non-finite value computed for {quantity}")]
    ArithmeticDegeneracy { quantity: &'static str },
}

impl SlugError {
    pub(crate) fn configuration(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Configuration {
            parameter,
            value,
            reason,
        }
    }

    /// Check that `value` lies in the closed unit interval.
    pub(crate) fn check_unit(parameter: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(Self::configuration(parameter, value, "must lie in [0, 1]"))
        }
    }

    /// Check that `value` is finite and strictly positive.
    pub(crate) fn check_positive(parameter: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::configuration(parameter, value, "must be finite and > 0"))
        }
    }

    /// Guard a computed quantity against NaN/Inf.
    pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::ArithmeticDegeneracy { quantity })
        }
    }
}
