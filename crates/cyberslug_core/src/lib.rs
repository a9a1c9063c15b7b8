//! # Cyberslug Core
//!
//! The numeric heart of a simulated predatory sea slug (after the
//! Cyberslug model of Brown et al. 2018):
//!
//! - **Sensors**: bilateral, log-normalized odor magnitudes
//! - **Somatic map**: a winner-take-all lateral turning cue
//! - **Learning**: Rescorla-Wagner value per prey odor
//! - **Homeostasis**: nutrition decay and the satiation curve
//!
//! Everything here is a deterministic function of its inputs. Spatial odor
//! fields, movement and rendering live outside this crate.

pub mod config;
pub mod error;
pub mod learning;
pub mod odor;
pub mod pose;
pub mod sensors;
pub mod somatic;
pub mod state;

pub use config::{LearningConfig, SlugConfig, SpeedPolicy};
pub use error::{Result, SlugError};
pub use learning::{LearningState, RwParams};
pub use odor::{OdorKind, OdorTable, Side, SideTable};
pub use pose::{AntennaPositions, Point, Position};
pub use sensors::{OdorField, Sensors};
pub use somatic::SomaticMap;
pub use state::InternalState;
