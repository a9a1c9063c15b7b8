//! Rescorla-Wagner associative learning of odor value.
//!
//! `V ← V + αβ(λ·[reinforced] − V)`
//!
//! - α: salience (noticeability) of the odor
//! - β: learning rate
//! - λ: asymptote of learning
//!
//! Repeated reinforcement drives V toward λ; an unreinforced update pulls
//! it toward 0. Both approach geometrically with ratio `1 − αβ`.

use crate::error::{Result, SlugError};
use crate::odor::{OdorKind, OdorTable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRwParams")]
pub struct RwParams {
    pub alpha: f64,
    pub beta: f64,
    pub lambda: f64,
}

/// Unchecked wire form; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawRwParams {
    alpha: f64,
    beta: f64,
    lambda: f64,
}

impl Default for RawRwParams {
    fn default() -> Self {
        let RwParams { alpha, beta, lambda } = RwParams::default();
        Self { alpha, beta, lambda }
    }
}

impl TryFrom<RawRwParams> for RwParams {
    type Error = SlugError;

    fn try_from(raw: RawRwParams) -> Result<Self> {
        Self::new(raw.alpha, raw.beta, raw.lambda)
    }
}

impl Default for RwParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
            lambda: 1.0,
        }
    }
}

impl RwParams {
    pub fn new(alpha: f64, beta: f64, lambda: f64) -> Result<Self> {
        let params = Self {
            alpha,
            beta,
            lambda,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        SlugError::check_unit("alpha", self.alpha)?;
        SlugError::check_unit("beta", self.beta)?;
        SlugError::check_unit("lambda", self.lambda)?;
        Ok(())
    }

    /// Effective step size of the update.
    pub fn rate(&self) -> f64 {
        self.alpha * self.beta
    }

    pub fn step(&self, value: f64, reinforced: bool) -> f64 {
        let target = if reinforced { self.lambda } else { 0.0 };
        value + self.rate() * (target - value)
    }
}

/// Default parameters per learned odor.
pub fn default_params(kind: OdorKind) -> Option<RwParams> {
    match kind {
        OdorKind::Hermi => Some(RwParams {
            alpha: 0.5,
            beta: 0.5,
            lambda: 1.0,
        }),
        OdorKind::Flab => Some(RwParams {
            alpha: 0.5,
            beta: 1.0,
            lambda: 1.0,
        }),
        OdorKind::Betaine => None,
    }
}

/// Learned value of one odor together with its fixed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub value: f64,
    pub params: RwParams,
}

/// Learned values for every odor in `OdorKind::LEARNED`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LearningStateRepr")]
pub struct LearningState {
    associations: OdorTable<Option<Association>>,
}

#[derive(Deserialize)]
struct LearningStateRepr {
    associations: OdorTable<Option<Association>>,
}

impl TryFrom<LearningStateRepr> for LearningState {
    type Error = SlugError;

    fn try_from(repr: LearningStateRepr) -> Result<Self> {
        for (kind, association) in repr.associations.iter() {
            match association {
                Some(a) if OdorKind::LEARNED.contains(&kind) => {
                    SlugError::check_unit("value", a.value)?;
                }
                None if !OdorKind::LEARNED.contains(&kind) => {}
                _ => {
                    return Err(SlugError::configuration(
                        "associations",
                        f64::NAN,
                        "exactly the learned odors carry an association",
                    ))
                }
            }
        }
        Ok(Self {
            associations: repr.associations,
        })
    }
}

impl Default for LearningState {
    fn default() -> Self {
        Self {
            associations: OdorTable::from_fn(|kind| {
                default_params(kind).map(|params| Association { value: 0.0, params })
            }),
        }
    }
}

impl LearningState {
    pub fn new(flab: RwParams, hermi: RwParams) -> Result<Self> {
        flab.validate()?;
        hermi.validate()?;

        let mut associations = OdorTable::splat(None);
        associations[OdorKind::Flab] = Some(Association {
            value: 0.0,
            params: flab,
        });
        associations[OdorKind::Hermi] = Some(Association {
            value: 0.0,
            params: hermi,
        });
        Ok(Self { associations })
    }

    /// Learned value V for `kind`, or 0 for odors that are not learned.
    pub fn value(&self, kind: OdorKind) -> f64 {
        self.associations[kind].map_or(0.0, |a| a.value)
    }

    pub fn params(&self, kind: OdorKind) -> Option<RwParams> {
        self.associations[kind].map(|a| a.params)
    }

    /// Apply one Rescorla-Wagner step. Returns the new V, or `None` if
    /// `kind` carries no association.
    pub fn update(&mut self, kind: OdorKind, reinforced: bool) -> Option<f64> {
        let association = self.associations[kind].as_mut()?;
        association.value = association.params.step(association.value, reinforced);
        Some(association.value)
    }
}
