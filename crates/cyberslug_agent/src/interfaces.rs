//! Collaborators the agent talks to each tick.

use cyberslug_core::{OdorKind, Position};
use serde::{Deserialize, Serialize};

pub use cyberslug_core::OdorField;

/// Feeding-contact detection. Queried once per tick per learned odor.
pub trait FeedingSignal {
    /// Did the slug make feeding contact with prey carrying `kind` this tick?
    fn contact(&self, kind: OdorKind) -> bool;
}

/// Never reports contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeeding;

impl FeedingSignal for NoFeeding {
    fn contact(&self, _kind: OdorKind) -> bool {
        false
    }
}

/// Owner of the body pose. Receives one behavior signal per tick.
pub trait MotionSubsystem {
    fn position(&self) -> Position;
    fn apply(&mut self, signal: BehaviorSignal);
}

/// Output of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSignal {
    /// Signed lateral turn cue. Positive means toward the left antenna.
    pub turn_cue: f64,
    pub speed: f64,
}
