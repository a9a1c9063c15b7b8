//! Agent behavior against fake collaborators.

use cyberslug_agent::{Agent, BehaviorSignal, MotionSubsystem, NoFeeding, OdorField};
use cyberslug_core::{OdorKind, Point, Position, SlugConfig};
use std::f64::consts::FRAC_PI_2;

/// Hermi gradient along the y axis, strong on the left antenna at heading 0.
struct HermiGradient;

impl OdorField for HermiGradient {
    fn concentration(&self, point: Point, kind: OdorKind) -> f64 {
        match kind {
            OdorKind::Hermi if point.y < 0.0 => 1e-4,
            OdorKind::Hermi => 1e-6,
            _ => 0.0,
        }
    }
}

/// Records what it was told; never moves.
#[derive(Default)]
struct Recorder {
    pose: Position,
    signals: Vec<BehaviorSignal>,
}

impl MotionSubsystem for Recorder {
    fn position(&self) -> Position {
        self.pose
    }

    fn apply(&mut self, signal: BehaviorSignal) {
        self.signals.push(signal);
    }
}

#[test]
fn hermi_dominant_side_drives_positive_turn() {
    let mut agent = Agent::new(SlugConfig::default()).unwrap();
    let signal = agent
        .tick(&Position::default(), &HermiGradient, &NoFeeding)
        .unwrap();

    let sensors = agent.sensors();
    assert!((sensors.left(OdorKind::Hermi) - 3.0).abs() < 1e-9);
    assert!((sensors.right(OdorKind::Hermi) - 1.0).abs() < 1e-9);
    assert!(signal.turn_cue > 0.0);
    assert_eq!(agent.state().somatic_map(), signal.turn_cue);
}

#[test]
fn facing_the_other_way_flips_the_cue() {
    let mut agent = Agent::new(SlugConfig::default()).unwrap();
    // Heading pi puts the left antenna at positive y, in the weak side.
    let pose = Position::new(0.0, 0.0, 2.0 * FRAC_PI_2);
    let signal = agent.tick(&pose, &HermiGradient, &NoFeeding).unwrap();
    assert!(signal.turn_cue < 0.0);
}

#[test]
fn starving_without_food_follows_decay_curve() {
    let mut agent = Agent::new(SlugConfig::default()).unwrap();
    for _ in 0..1000 {
        agent
            .tick(&Position::default(), &HermiGradient, &NoFeeding)
            .unwrap();
    }
    let nutrition = agent.state().nutrition();
    assert!((nutrition - 0.5 * 0.9995f64.powi(1000)).abs() < 1e-9);
    assert!((nutrition - 0.303).abs() < 1e-3);
    assert!(agent.state().satiation() > 0.0 && agent.state().satiation() < 1.0);
}

#[test]
fn step_feeds_signal_to_motion_subsystem() {
    let mut agent = Agent::new(SlugConfig::default()).unwrap();
    let mut motion = Recorder::default();
    for _ in 0..3 {
        agent.step(&HermiGradient, &NoFeeding, &mut motion).unwrap();
    }
    assert_eq!(motion.signals.len(), 3);
    assert!(motion.signals.iter().all(|s| s.speed == 0.3));
    assert_eq!(agent.ticks(), 3);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut agent = Agent::new(SlugConfig::default()).unwrap();
    agent
        .tick(&Position::default(), &HermiGradient, &NoFeeding)
        .unwrap();
    let json = serde_json::to_value(agent.snapshot()).unwrap();
    assert_eq!(json["ticks"], 1);
    assert!(json["state"]["nutrition"].as_f64().unwrap() > 0.0);
}
