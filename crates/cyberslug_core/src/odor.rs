//! Odor kinds, antenna sides, and the fixed tables indexed by them.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// The three tracked prey/cue scents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OdorKind {
    /// Generic food odor emitted by all prey
    Betaine,
    Flab,
    Hermi,
}

impl OdorKind {
    pub const ALL: [OdorKind; 3] = [OdorKind::Betaine, OdorKind::Flab, OdorKind::Hermi];

    /// Odors that carry a Rescorla-Wagner value.
    pub const LEARNED: [OdorKind; 2] = [OdorKind::Flab, OdorKind::Hermi];

    fn index(self) -> usize {
        match self {
            OdorKind::Betaine => 0,
            OdorKind::Flab => 1,
            OdorKind::Hermi => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// One value per `OdorKind`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OdorTable<T>([T; 3]);

impl<T: Copy> OdorTable<T> {
    pub fn splat(value: T) -> Self {
        Self([value; 3])
    }

    pub fn from_fn(mut f: impl FnMut(OdorKind) -> T) -> Self {
        Self(OdorKind::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (OdorKind, T)> + '_ {
        OdorKind::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl<T> Index<OdorKind> for OdorTable<T> {
    type Output = T;

    fn index(&self, kind: OdorKind) -> &T {
        &self.0[kind.index()]
    }
}

impl<T> IndexMut<OdorKind> for OdorTable<T> {
    fn index_mut(&mut self, kind: OdorKind) -> &mut T {
        &mut self.0[kind.index()]
    }
}

/// One value per antenna.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SideTable<T>([T; 2]);

impl<T: Copy> SideTable<T> {
    pub fn new(left: T, right: T) -> Self {
        Self([left, right])
    }

    pub fn left(&self) -> T {
        self.0[0]
    }

    pub fn right(&self) -> T {
        self.0[1]
    }
}

impl<T> Index<Side> for SideTable<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.0[side.index()]
    }
}

impl<T> IndexMut<Side> for SideTable<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_index_by_enum() {
        let mut table = OdorTable::splat(0.0);
        table[OdorKind::Hermi] = 2.0;
        assert_eq!(table[OdorKind::Hermi], 2.0);
        assert_eq!(table[OdorKind::Flab], 0.0);

        let sides = SideTable::new(1.0, 3.0);
        assert_eq!(sides[Side::Left], 1.0);
        assert_eq!(sides.right(), 3.0);
    }

    #[test]
    fn test_from_fn_visits_every_kind() {
        let table = OdorTable::from_fn(|kind| kind == OdorKind::Flab);
        let flagged: Vec<_> = table.iter().filter(|(_, v)| *v).map(|(k, _)| k).collect();
        assert_eq!(flagged, vec![OdorKind::Flab]);
    }
}
