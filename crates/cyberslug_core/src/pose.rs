//! Body pose and the antenna geometry derived from it.

use crate::odor::{Side, SideTable};
use serde::{Deserialize, Serialize};

/// Antennae sit about 7 units out from the body center.
pub const ANTENNA_DISTANCE: f64 = 7.0;

/// About 40 degrees off the body axis.
pub const ANTENNA_ANGLE: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// Body pose owned by the motion subsystem. Heading is in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Antenna tips for this pose. Left sits at `heading - 0.7`.
    pub fn antennae(&self) -> AntennaPositions {
        let tip = |offset: f64| {
            let theta = self.heading + offset;
            Point::new(
                self.x + ANTENNA_DISTANCE * theta.cos(),
                self.y + ANTENNA_DISTANCE * theta.sin(),
            )
        };
        AntennaPositions(SideTable::new(tip(-ANTENNA_ANGLE), tip(ANTENNA_ANGLE)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntennaPositions(SideTable<Point>);

impl AntennaPositions {
    pub fn get(&self, side: Side) -> Point {
        self.0[side]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_antennae_are_symmetric_about_heading() {
        let pose = Position::new(10.0, -4.0, 1.2);
        let antennae = pose.antennae();
        let center = pose.point();

        let dl = antennae.get(Side::Left).distance_squared(&center).sqrt();
        let dr = antennae.get(Side::Right).distance_squared(&center).sqrt();
        assert!((dl - ANTENNA_DISTANCE).abs() < 1e-9);
        assert!((dr - ANTENNA_DISTANCE).abs() < 1e-9);
    }

    #[test]
    fn test_antennae_at_zero_heading() {
        let antennae = Position::new(0.0, 0.0, 0.0).antennae();
        let left = antennae.get(Side::Left);
        let right = antennae.get(Side::Right);
        assert!((left.x - right.x).abs() < 1e-12);
        assert!((left.y + right.y).abs() < 1e-12);
        assert!(left.y < 0.0);
    }
}
