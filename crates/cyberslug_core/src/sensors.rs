//! Bilateral odor sensing.
//!
//! Raw concentrations sampled at the two antenna tips are log-normalized
//! into sensory magnitudes: `0` at or below the detection floor, otherwise
//! `7 + log10(c)`. A concentration of `1e-7` therefore maps to zero and each
//! decade above it adds one unit.

use crate::error::{Result, SlugError};
use crate::odor::{OdorKind, OdorTable, Side, SideTable};
use crate::pose::{AntennaPositions, Point};
use serde::{Deserialize, Serialize};

/// Concentrations at or below this are treated as no signal.
pub const DETECTION_FLOOR: f64 = 1e-7;

/// Offset that maps the detection floor onto zero magnitude.
const LOG_OFFSET: f64 = 7.0;

/// Anything that can answer "what is the concentration of `kind` at `point`".
pub trait OdorField {
    fn concentration(&self, point: Point, kind: OdorKind) -> f64;
}

/// Normalize a raw concentration into a sensory magnitude.
pub fn magnitude(concentration: f64) -> f64 {
    if concentration <= DETECTION_FLOOR {
        0.0
    } else {
        LOG_OFFSET + concentration.log10()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sensors {
    readings: OdorTable<SideTable<f64>>,
}

impl Sensors {
    /// Build sensors directly from magnitudes. Used for synthetic inputs.
    pub fn from_magnitudes(readings: impl Fn(OdorKind, Side) -> f64) -> Self {
        Self {
            readings: OdorTable::from_fn(|kind| {
                SideTable::new(readings(kind, Side::Left), readings(kind, Side::Right))
            }),
        }
    }

    /// Sample every (odor, side) pair without touching `self`.
    pub fn sample(field: &dyn OdorField, antennae: &AntennaPositions) -> Result<Self> {
        let mut readings = OdorTable::<SideTable<f64>>::default();
        for kind in OdorKind::ALL {
            for side in Side::ALL {
                let value = field.concentration(antennae.get(side), kind);
                if !value.is_finite() || value < 0.0 {
                    return Err(SlugError::InvalidOdorReading {
                        odor: kind,
                        side,
                        value,
                    });
                }
                readings[kind][side] = magnitude(value);
            }
        }
        Ok(Self { readings })
    }

    /// Resample from the field. Readings are replaced only if all six are valid.
    pub fn update(&mut self, field: &dyn OdorField, antennae: &AntennaPositions) -> Result<()> {
        *self = Self::sample(field, antennae)?;
        Ok(())
    }

    pub fn left(&self, kind: OdorKind) -> f64 {
        self.readings[kind].left()
    }

    pub fn right(&self, kind: OdorKind) -> f64 {
        self.readings[kind].right()
    }

    /// Bilateral mean for one odor.
    pub fn average(&self, kind: OdorKind) -> f64 {
        (self.left(kind) + self.right(kind)) / 2.0
    }

    /// Left minus right for one odor.
    pub fn asymmetry(&self, kind: OdorKind) -> f64 {
        self.left(kind) - self.right(kind)
    }
}
