//! # Cyberslug Agent
//!
//! Ties the core components into a single-slug update cycle. The agent owns
//! its sensors, learned values and homeostatic state; the odor field, the
//! feeding detector and the motion subsystem are injected each tick so the
//! agent can run against fakes in isolation.
//!
//! Ticks are synchronous and deterministic: the same state, odor sample and
//! feeding signal always produce the same behavior signal.

mod agent;
pub mod appetite;
mod interfaces;

pub use agent::{Agent, AgentSnapshot};
pub use interfaces::{BehaviorSignal, FeedingSignal, MotionSubsystem, NoFeeding, OdorField};
