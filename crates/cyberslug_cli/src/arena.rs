//! Toy prey arena: Gaussian odor plumes around stationary prey.
//!
//! Every prey item emits betaine plus its own species odor. Eaten prey
//! respawn at a random location.

use cyberslug_agent::{FeedingSignal, OdorField};
use cyberslug_core::{OdorKind, Point};
use rand::Rng;

const PLUME_INTENSITY: f64 = 1.0;
const PLUME_SIGMA: f64 = 25.0;
const CONTACT_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct Prey {
    pub kind: OdorKind,
    pub at: Point,
}

pub struct Arena {
    pub width: f64,
    pub height: f64,
    prey: Vec<Prey>,
}

impl Arena {
    pub fn populate<R: Rng>(width: f64, height: f64, flab: usize, hermi: usize, rng: &mut R) -> Self {
        let prey = std::iter::repeat(OdorKind::Flab)
            .take(flab)
            .chain(std::iter::repeat(OdorKind::Hermi).take(hermi))
            .map(|kind| Prey {
                kind,
                at: random_point(width, height, rng),
            })
            .collect();
        Self { width, height, prey }
    }

    pub fn prey(&self) -> &[Prey] {
        &self.prey
    }

    /// A feeding detector for a mouth at `at`.
    pub fn mouth(&self, at: Point) -> Mouth<'_> {
        Mouth { arena: self, at }
    }

    /// Respawn every prey item within contact range of `at`. Returns how many.
    pub fn consume_near<R: Rng>(&mut self, at: Point, rng: &mut R) -> usize {
        let (width, height) = (self.width, self.height);
        let mut eaten = 0;
        for prey in self.prey.iter_mut().filter(|p| in_contact(p, at)) {
            prey.at = random_point(width, height, rng);
            eaten += 1;
        }
        eaten
    }
}

impl OdorField for Arena {
    fn concentration(&self, point: Point, kind: OdorKind) -> f64 {
        self.prey
            .iter()
            .filter(|p| kind == OdorKind::Betaine || p.kind == kind)
            .map(|p| {
                let d2 = p.at.distance_squared(&point);
                PLUME_INTENSITY * (-d2 / (2.0 * PLUME_SIGMA * PLUME_SIGMA)).exp()
            })
            .sum()
    }
}

pub struct Mouth<'a> {
    arena: &'a Arena,
    at: Point,
}

impl FeedingSignal for Mouth<'_> {
    fn contact(&self, kind: OdorKind) -> bool {
        self.arena
            .prey
            .iter()
            .any(|p| p.kind == kind && in_contact(p, self.at))
    }
}

fn in_contact(prey: &Prey, at: Point) -> bool {
    prey.at.distance_squared(&at) <= CONTACT_RADIUS * CONTACT_RADIUS
}

fn random_point<R: Rng>(width: f64, height: f64, rng: &mut R) -> Point {
    Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
}
