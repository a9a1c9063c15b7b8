//! Homeostatic internal state.
//!
//! Nutrition decays geometrically each tick and is replenished by feeding.
//! Satiation is not integrated: it is recomputed from nutrition on every
//! advance through the logistic curve
//!
//! `satiation = 1 / (1 + 0.7·e^(−4n + 2))²`

use crate::error::{Result, SlugError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DECAY_RATE: f64 = 0.9995;
pub const DEFAULT_NUTRITION: f64 = 0.5;

/// Satiation is already 1 to double precision well below this.
pub const NUTRITION_CEILING: f64 = 50.0;

/// Guard against NaN and Infinity in state values.
#[inline]
fn sanitize_f64(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        tracing::warn!("NaN/Inf detected in internal state, resetting to fallback {}", fallback);
        fallback
    }
}

/// Logistic map from nutrition to satiation, kept strictly inside (0, 1).
pub fn satiation_for(nutrition: f64) -> f64 {
    let n = sanitize_f64(nutrition, 0.0).clamp(0.0, NUTRITION_CEILING);
    let s = 1.0 / (1.0 + 0.7 * (-4.0 * n + 2.0).exp()).powi(2);
    s.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InternalStateRepr")]
pub struct InternalState {
    nutrition: f64,
    satiation: f64,
    incentive_salience: f64,
    somatic_map: f64,
    appetite_switch: f64,
    decay_rate: f64,
}

/// Wire form of `InternalState`. Satiation is derived, so it is recomputed
/// from nutrition rather than trusted.
#[derive(Deserialize)]
struct InternalStateRepr {
    nutrition: f64,
    #[serde(default)]
    incentive_salience: f64,
    #[serde(default)]
    somatic_map: f64,
    #[serde(default)]
    appetite_switch: f64,
    decay_rate: f64,
}

impl TryFrom<InternalStateRepr> for InternalState {
    type Error = SlugError;

    fn try_from(repr: InternalStateRepr) -> Result<Self> {
        let mut state = Self::new(repr.nutrition, repr.decay_rate)?;
        state.incentive_salience = SlugError::ensure_finite("incentive_salience", repr.incentive_salience)?;
        state.somatic_map = SlugError::ensure_finite("somatic_map", repr.somatic_map)?;
        if !(-1.0..=1.0).contains(&repr.appetite_switch) {
            return Err(SlugError::configuration(
                "appetite_switch",
                repr.appetite_switch,
                "must lie in [-1, 1]",
            ));
        }
        state.appetite_switch = repr.appetite_switch;
        Ok(state)
    }
}

impl Default for InternalState {
    fn default() -> Self {
        Self {
            nutrition: DEFAULT_NUTRITION,
            satiation: satiation_for(DEFAULT_NUTRITION),
            incentive_salience: 0.0,
            somatic_map: 0.0,
            appetite_switch: 0.0,
            decay_rate: DEFAULT_DECAY_RATE,
        }
    }
}

impl InternalState {
    pub fn new(nutrition: f64, decay_rate: f64) -> Result<Self> {
        if !(nutrition.is_finite() && nutrition >= 0.0) {
            return Err(SlugError::configuration(
                "initial_nutrition",
                nutrition,
                "must be finite and >= 0",
            ));
        }
        if !(decay_rate > 0.0 && decay_rate < 1.0) {
            return Err(SlugError::configuration(
                "decay_rate",
                decay_rate,
                "must lie in (0, 1)",
            ));
        }
        Ok(Self {
            nutrition,
            satiation: satiation_for(nutrition),
            decay_rate,
            ..Self::default()
        })
    }

    pub fn nutrition(&self) -> f64 {
        self.nutrition
    }

    pub fn satiation(&self) -> f64 {
        self.satiation
    }

    pub fn incentive_salience(&self) -> f64 {
        self.incentive_salience
    }

    pub fn somatic_map(&self) -> f64 {
        self.somatic_map
    }

    pub fn appetite_switch(&self) -> f64 {
        self.appetite_switch
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Advance the homeostatic rules by `n_ticks`: decay nutrition, then
    /// recompute satiation from it.
    pub fn advance(&mut self, n_ticks: u32) {
        let factor = self.decay_rate.powf(f64::from(n_ticks));
        self.nutrition = sanitize_f64(self.nutrition * factor, DEFAULT_NUTRITION).max(0.0);
        self.satiation = satiation_for(self.nutrition);
    }

    /// Raise nutrition after a feeding contact.
    pub fn feed(&mut self, increment: f64) {
        self.nutrition = sanitize_f64(self.nutrition + increment, self.nutrition);
    }

    pub fn set_somatic_map(&mut self, value: f64) {
        self.somatic_map = value;
    }

    pub fn set_appetite(&mut self, incentive_salience: f64, appetite_switch: f64) {
        self.incentive_salience = incentive_salience;
        self.appetite_switch = appetite_switch;
    }
}
