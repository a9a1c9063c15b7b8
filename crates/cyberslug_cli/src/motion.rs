//! Minimal kinematics: turn by the cue, move forward by the speed.

use cyberslug_agent::{BehaviorSignal, MotionSubsystem};
use cyberslug_core::{Point, Position};
use std::f64::consts::TAU;

/// Radians of heading change per unit of turn cue.
const TURN_GAIN: f64 = 0.05;

/// Largest heading change allowed in one tick.
const MAX_TURN: f64 = 0.5;

pub struct Kinematics {
    pose: Position,
    bounds: (f64, f64),
    distance: f64,
}

impl Kinematics {
    pub fn new(pose: Position, width: f64, height: f64) -> Self {
        Self {
            pose,
            bounds: (width, height),
            distance: 0.0,
        }
    }

    pub fn point(&self) -> Point {
        self.pose.point()
    }

    /// Total path length travelled.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl MotionSubsystem for Kinematics {
    fn position(&self) -> Position {
        self.pose
    }

    fn apply(&mut self, signal: BehaviorSignal) {
        // Positive cue points at the left antenna, which sits at lower heading.
        let d_theta = (-TURN_GAIN * signal.turn_cue).clamp(-MAX_TURN, MAX_TURN);
        let heading = (self.pose.heading + d_theta).rem_euclid(TAU);

        let (width, height) = self.bounds;
        self.pose = Position::new(
            (self.pose.x + signal.speed * heading.cos()).rem_euclid(width),
            (self.pose.y + signal.speed * heading.sin()).rem_euclid(height),
            heading,
        );
        self.distance += signal.speed;
    }
}
