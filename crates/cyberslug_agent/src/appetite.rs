//! Appetitive state: whether the slug currently approaches or avoids.
//!
//! Incentive salience sums the sensed odor averages, weighting each prey
//! odor by its learned value. Appetitive drive rises with incentive and
//! falls with satiation; a steep sigmoid around 0.245 turns it into a
//! signed switch (+1 approach, −1 avoid). The previous switch feeds back
//! into the drive so an avoiding slug needs a stronger incentive to flip.

use cyberslug_core::learning::LearningState;
use cyberslug_core::somatic::sigmoid;
use cyberslug_core::{OdorKind, Sensors};

const BASELINE_DRIVE: f64 = 0.01;
const INCENTIVE_GAIN: f64 = 0.6;
const SATIATION_GAIN: f64 = 10.0;
const HYSTERESIS: f64 = 0.1;
const SWITCH_THRESHOLD: f64 = 0.245;
const SWITCH_STEEPNESS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appetite {
    pub incentive_salience: f64,
    pub drive: f64,
    pub switch: f64,
}

pub fn incentive_salience(sensors: &Sensors, learning: &LearningState) -> f64 {
    let learned: f64 = OdorKind::LEARNED
        .iter()
        .map(|&kind| learning.value(kind) * sensors.average(kind))
        .sum();
    sensors.average(OdorKind::Betaine) + learned
}

pub fn evaluate(sensors: &Sensors, learning: &LearningState, satiation: f64, prev_switch: f64) -> Appetite {
    let incentive = incentive_salience(sensors, learning);
    let drive = BASELINE_DRIVE
        + sigmoid(-INCENTIVE_GAIN * incentive + SATIATION_GAIN * satiation)
        + HYSTERESIS * (prev_switch - 1.0) * 0.5;
    let switch = 2.0 * sigmoid(-SWITCH_STEEPNESS * (drive - SWITCH_THRESHOLD)) - 1.0;

    Appetite {
        incentive_salience: incentive,
        drive,
        switch,
    }
}
