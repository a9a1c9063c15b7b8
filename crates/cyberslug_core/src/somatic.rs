//! Somatic map: the lateralized turning cue.
//!
//! Each prey odor contributes its left/right asymmetry, gated by a steep
//! sigmoid on the difference between the two bilateral averages. Whichever
//! odor smells stronger overall wins almost the whole output, so the cue
//! behaves like a soft winner-take-all between Flab and Hermi.
//!
//! The Flab term enters with a negative sign and the Hermi term with a
//! positive one. Positive output means "turn toward the left antenna".

use crate::error::{Result, SlugError};
use crate::odor::OdorKind;
use crate::sensors::Sensors;

pub const DEFAULT_GATE_STEEPNESS: f64 = 50.0;

/// `1 / (1 + e^z)`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + z.exp())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SomaticMap {
    gate_steepness: f64,
}

impl Default for SomaticMap {
    fn default() -> Self {
        Self {
            gate_steepness: DEFAULT_GATE_STEEPNESS,
        }
    }
}

impl SomaticMap {
    pub fn new(gate_steepness: f64) -> Result<Self> {
        let gate_steepness = SlugError::check_positive("gate_steepness", gate_steepness)?;
        Ok(Self { gate_steepness })
    }

    pub fn compute(&self, sensors: &Sensors) -> f64 {
        let f = sensors.average(OdorKind::Flab) - sensors.average(OdorKind::Hermi);
        let h = -f;
        let k = self.gate_steepness;

        -sensors.asymmetry(OdorKind::Flab) * sigmoid(-k * f)
            + sensors.asymmetry(OdorKind::Hermi) * sigmoid(-k * h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odor::Side;

    fn sensors(flab: (f64, f64), hermi: (f64, f64)) -> Sensors {
        Sensors::from_magnitudes(|kind, side| {
            let pair = match kind {
                OdorKind::Flab => flab,
                OdorKind::Hermi => hermi,
                OdorKind::Betaine => (0.0, 0.0),
            };
            match side {
                Side::Left => pair.0,
                Side::Right => pair.1,
            }
        })
    }

    #[test]
    fn test_sigmoid_shape() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(-40.0) > 0.999_999);
        assert!(sigmoid(40.0) < 1e-6);
        // Saturates instead of overflowing.
        assert_eq!(sigmoid(1e6), 0.0);
        assert_eq!(sigmoid(-1e6), 1.0);
    }

    #[test]
    fn test_hermi_dominant_turns_toward_stronger_side() {
        let map = SomaticMap::default();
        let out = map.compute(&sensors((0.0, 0.0), (3.0, 1.0)));
        assert!(out > 0.0);
        assert!((out - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_flab_dominant_enters_negated() {
        let map = SomaticMap::default();
        let out = map.compute(&sensors((3.0, 1.0), (0.0, 0.0)));
        assert!(out < 0.0);
        assert!((out + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_gate_suppresses_the_weaker_odor() {
        let map = SomaticMap::default();
        // Hermi dominates on average; Flab's opposite asymmetry is gated off.
        let out = map.compute(&sensors((1.0, 2.0), (5.0, 4.0)));
        assert!((out - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_equal_averages_split_the_gate() {
        let map = SomaticMap::default();
        let out = map.compute(&sensors((2.0, 0.0), (2.0, 0.0)));
        // -(2) * 0.5 + 2 * 0.5
        assert!(out.abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_steepness() {
        assert!(SomaticMap::new(0.0).is_err());
        assert!(SomaticMap::new(-5.0).is_err());
        assert!(SomaticMap::new(10.0).is_ok());
    }
}
