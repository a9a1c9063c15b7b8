//! The per-tick orchestrator.
//!
//! One tick:
//! 1. derive antenna tips from the supplied pose
//! 2. sample the odor field
//! 3. compute the somatic map
//! 4. query feeding contact for each learned odor, then apply learning and
//!    the nutrition increment for every contact
//! 5. advance homeostasis by one tick
//! 6. update the appetitive state and emit a behavior signal
//!
//! All work happens on scratch copies; the agent's state is replaced only
//! after every step has succeeded, so a failed tick leaves it untouched.

use crate::appetite;
use crate::interfaces::{BehaviorSignal, FeedingSignal, MotionSubsystem};
use cyberslug_core::{
    InternalState, LearningState, OdorField, OdorKind, OdorTable, Position, Result, Sensors,
    SlugConfig, SlugError, SomaticMap, SpeedPolicy,
};
use serde::Serialize;
use std::collections::VecDeque;

/// Poses allocated up front; longer histories grow on demand.
const HISTORY_PREALLOC: usize = 1024;

/// Serializable view of everything the agent owns.
#[derive(Debug, Clone, Serialize)]
pub struct AgentSnapshot {
    pub ticks: u64,
    pub sensors: Sensors,
    pub learning: LearningState,
    pub state: InternalState,
    pub feed_counts: OdorTable<u64>,
}

pub struct Agent {
    config: SlugConfig,
    somatic_map: SomaticMap,
    sensors: Sensors,
    learning: LearningState,
    state: InternalState,
    feed_counts: OdorTable<u64>,
    history: VecDeque<Position>,
    ticks: u64,
}

impl Agent {
    /// Build an agent, rejecting any out-of-range configuration.
    pub fn new(config: SlugConfig) -> Result<Self> {
        config.validate()?;
        let somatic_map = SomaticMap::new(config.gate_steepness)?;
        let learning = LearningState::new(config.learning.flab, config.learning.hermi)?;
        let state = InternalState::new(config.initial_nutrition, config.decay_rate)?;

        Ok(Self {
            history: VecDeque::with_capacity(config.history_capacity.min(HISTORY_PREALLOC)),
            config,
            somatic_map,
            sensors: Sensors::default(),
            learning,
            state,
            feed_counts: OdorTable::splat(0),
            ticks: 0,
        })
    }

    /// Run one tick at `pose` and return the behavior signal.
    pub fn tick(
        &mut self,
        pose: &Position,
        field: &dyn OdorField,
        feeding: &dyn FeedingSignal,
    ) -> Result<BehaviorSignal> {
        let antennae = pose.antennae();
        let sensors = Sensors::sample(field, &antennae)?;
        let turn_cue = SlugError::ensure_finite("somatic_map", self.somatic_map.compute(&sensors))?;

        let contacts = OdorKind::LEARNED.map(|kind| (kind, feeding.contact(kind)));

        let mut learning = self.learning.clone();
        let mut state = self.state.clone();
        let mut feed_counts = self.feed_counts;
        state.set_somatic_map(turn_cue);

        for (kind, contacted) in contacts {
            if contacted {
                let value = learning.update(kind, true);
                state.feed(self.config.feeding_nutrition_increment);
                feed_counts[kind] += 1;
                tracing::debug!(
                    "Fed on {:?}: V={:.3}, nutrition={:.3}",
                    kind,
                    value.unwrap_or_default(),
                    state.nutrition()
                );
            } else if self.config.extinction {
                learning.update(kind, false);
            }
        }

        state.advance(1);

        let appetite = appetite::evaluate(&sensors, &learning, state.satiation(), state.appetite_switch());
        SlugError::ensure_finite("appetite_switch", appetite.switch)?;
        state.set_appetite(appetite.incentive_salience, appetite.switch);

        let speed = match self.config.speed_policy {
            SpeedPolicy::Fixed => self.config.base_speed,
            SpeedPolicy::SatiationModulated => self.config.base_speed * (1.0 - state.satiation()),
        };

        self.sensors = sensors;
        self.learning = learning;
        self.state = state;
        self.feed_counts = feed_counts;
        self.record(*pose);
        self.ticks += 1;

        tracing::trace!(
            "Tick {}: turn={:.3}, speed={:.3}, satiation={:.3}, switch={:.2}",
            self.ticks,
            turn_cue,
            speed,
            self.state.satiation(),
            self.state.appetite_switch()
        );

        Ok(BehaviorSignal { turn_cue, speed })
    }

    /// Read the pose from `motion`, tick, and hand the signal back to it.
    pub fn step(
        &mut self,
        field: &dyn OdorField,
        feeding: &dyn FeedingSignal,
        motion: &mut dyn MotionSubsystem,
    ) -> Result<BehaviorSignal> {
        let pose = motion.position();
        let signal = self.tick(&pose, field, feeding)?;
        motion.apply(signal);
        Ok(signal)
    }

    fn record(&mut self, pose: Position) {
        let capacity = self.config.history_capacity;
        if capacity == 0 {
            return;
        }
        if self.history.len() == capacity {
            self.history.pop_front();
        }
        self.history.push_back(pose);
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    pub fn sensors(&self) -> &Sensors {
        &self.sensors
    }

    pub fn learning(&self) -> &LearningState {
        &self.learning
    }

    pub fn state(&self) -> &InternalState {
        &self.state
    }

    pub fn feed_count(&self, kind: OdorKind) -> u64 {
        self.feed_counts[kind]
    }

    /// Poses the agent was ticked at, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Position> {
        self.history.iter()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            ticks: self.ticks,
            sensors: self.sensors,
            learning: self.learning.clone(),
            state: self.state.clone(),
            feed_counts: self.feed_counts,
        }
    }
}
