use crate::error::{Result as SlugResult, SlugError};
use crate::learning::{default_params, RwParams};
use crate::odor::OdorKind;
use crate::somatic::DEFAULT_GATE_STEEPNESS;
use crate::state::{DEFAULT_DECAY_RATE, DEFAULT_NUTRITION};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Upper bound on the travel history length.
pub const MAX_HISTORY_CAPACITY: usize = 1_000_000;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Per-tick nutrition retention factor, in (0, 1)
    pub decay_rate: f64,
    /// Nutrition added on each feeding contact
    pub feeding_nutrition_increment: f64,
    /// Slope of the winner-take-all gate in the somatic map
    pub gate_steepness: f64,
    pub initial_nutrition: f64,
    pub base_speed: f64,
    pub speed_policy: SpeedPolicy,
    /// Apply an unreinforced learning step to every learned odor that was
    /// not contacted this tick.
    pub extinction: bool,
    /// Number of past poses to remember. 0 disables the travel history.
    pub history_capacity: usize,
    pub learning: LearningConfig,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            decay_rate: DEFAULT_DECAY_RATE,
            feeding_nutrition_increment: 0.3,
            gate_steepness: DEFAULT_GATE_STEEPNESS,
            initial_nutrition: DEFAULT_NUTRITION,
            base_speed: 0.3,
            speed_policy: SpeedPolicy::default(),
            extinction: false,
            history_capacity: 0,
            learning: LearningConfig::default(),
        }
    }
}

impl SlugConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SlugConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if file doesn't exist, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        fn parsed<T: FromStr>(key: &str) -> Option<T> {
            std::env::var(key).ok().and_then(|v| v.parse().ok())
        }

        if let Some(v) = parsed("CYBERSLUG_DECAY_RATE") {
            self.decay_rate = v;
        }
        if let Some(v) = parsed("CYBERSLUG_FEEDING_INCREMENT") {
            self.feeding_nutrition_increment = v;
        }
        if let Some(v) = parsed("CYBERSLUG_INITIAL_NUTRITION") {
            self.initial_nutrition = v;
        }
        if let Some(v) = parsed("CYBERSLUG_GATE_STEEPNESS") {
            self.gate_steepness = v;
        }
        if let Some(v) = parsed("CYBERSLUG_BASE_SPEED") {
            self.base_speed = v;
        }
        if let Some(v) = parsed("CYBERSLUG_SPEED_POLICY") {
            self.speed_policy = v;
        }
        if let Some(v) = parsed("CYBERSLUG_EXTINCTION") {
            self.extinction = v;
        }
        if let Some(v) = parsed("CYBERSLUG_HISTORY_CAPACITY") {
            self.history_capacity = v;
        }
    }

    /// Check every parameter against its admissible range.
    pub fn validate(&self) -> SlugResult<()> {
        if !(self.decay_rate > 0.0 && self.decay_rate < 1.0) {
            return Err(SlugError::configuration(
                "decay_rate",
                self.decay_rate,
                "must lie in (0, 1)",
            ));
        }
        SlugError::check_positive("feeding_nutrition_increment", self.feeding_nutrition_increment)?;
        SlugError::check_positive("gate_steepness", self.gate_steepness)?;
        if !(self.initial_nutrition.is_finite() && self.initial_nutrition >= 0.0) {
            return Err(SlugError::configuration(
                "initial_nutrition",
                self.initial_nutrition,
                "must be finite and >= 0",
            ));
        }
        if !(self.base_speed.is_finite() && self.base_speed >= 0.0) {
            return Err(SlugError::configuration(
                "base_speed",
                self.base_speed,
                "must be finite and >= 0",
            ));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(SlugError::configuration(
                "history_capacity",
                self.history_capacity as f64,
                "must not exceed 1000000",
            ));
        }
        self.learning.flab.validate()?;
        self.learning.hermi.validate()?;
        Ok(())
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

/// How the emitted speed relates to internal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPolicy {
    /// Always `base_speed`
    #[default]
    Fixed,
    /// `base_speed * (1 - satiation)`: a sated slug slows down
    SatiationModulated,
}

impl FromStr for SpeedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "satiation_modulated" => Ok(Self::SatiationModulated),
            other => Err(format!("unknown speed policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    pub flab: RwParams,
    pub hermi: RwParams,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            flab: default_params(OdorKind::Flab).unwrap_or_default(),
            hermi: default_params(OdorKind::Hermi).unwrap_or_default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = SlugConfig::default();
        assert_eq!(cfg.decay_rate, 0.9995);
        assert_eq!(cfg.gate_steepness, 50.0);
        assert_eq!(cfg.speed_policy, SpeedPolicy::Fixed);
        assert_eq!(cfg.learning.flab.beta, 1.0);
        assert_eq!(cfg.learning.hermi.beta, 0.5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
decay_rate = 0.999

[learning.hermi]
alpha = 0.2
"#;
        let cfg: SlugConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.decay_rate, 0.999);
        assert_eq!(cfg.learning.hermi.alpha, 0.2);
        // Defaults for unspecified fields
        assert_eq!(cfg.learning.hermi.beta, 0.5);
        assert_eq!(cfg.learning.flab.beta, 1.0);
        assert_eq!(cfg.feeding_nutrition_increment, 0.3);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
decay_rate = 0.99
feeding_nutrition_increment = 0.5
gate_steepness = 20.0
initial_nutrition = 1.0
base_speed = 0.6
speed_policy = "satiation_modulated"
extinction = true
history_capacity = 128

[learning.flab]
alpha = 0.4
beta = 0.9
lambda = 0.8

[learning.hermi]
alpha = 0.7
beta = 0.3
lambda = 1.0
"#;
        let cfg: SlugConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.speed_policy, SpeedPolicy::SatiationModulated);
        assert!(cfg.extinction);
        assert_eq!(cfg.history_capacity, 128);
        assert_eq!(cfg.learning.flab.lambda, 0.8);
        assert_eq!(cfg.learning.hermi.alpha, 0.7);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut cfg = SlugConfig::default();
        cfg.learning.flab.alpha = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(SlugError::Configuration {
                parameter: "alpha",
                ..
            })
        ));

        let cfg = SlugConfig {
            decay_rate: 1.2,
            ..SlugConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = SlugConfig {
            feeding_nutrition_increment: 0.0,
            ..SlugConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_speed_policy_from_str() {
        assert_eq!("fixed".parse::<SpeedPolicy>(), Ok(SpeedPolicy::Fixed));
        assert_eq!(" Satiation_Modulated ".parse::<SpeedPolicy>(), Ok(SpeedPolicy::SatiationModulated));
        assert!("sprint".parse::<SpeedPolicy>().is_err());
    }

    #[test]
    fn test_validate_bounds_history_capacity() {
        let cfg = SlugConfig {
            history_capacity: MAX_HISTORY_CAPACITY,
            ..SlugConfig::default()
        };
        assert!(cfg.validate().is_ok());

        let cfg = SlugConfig {
            history_capacity: usize::MAX / 2,
            ..SlugConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SlugError::Configuration {
                parameter: "history_capacity",
                ..
            })
        ));
    }

    #[test]
    fn test_env_overrides_and_defaults() {
        // Part 1: env overrides
        let overrides = [
            ("CYBERSLUG_DECAY_RATE", "0.99"),
            ("CYBERSLUG_FEEDING_INCREMENT", "0.4"),
            ("CYBERSLUG_INITIAL_NUTRITION", "2.0"),
            ("CYBERSLUG_GATE_STEEPNESS", "12.5"),
            ("CYBERSLUG_BASE_SPEED", "0.7"),
            ("CYBERSLUG_SPEED_POLICY", "satiation_modulated"),
            ("CYBERSLUG_EXTINCTION", "true"),
            ("CYBERSLUG_HISTORY_CAPACITY", "64"),
        ];
        for (key, value) in overrides {
            std::env::set_var(key, value);
        }

        let mut cfg = SlugConfig::default();
        cfg.apply_env_overrides();

        assert_eq!(cfg.decay_rate, 0.99);
        assert_eq!(cfg.feeding_nutrition_increment, 0.4);
        assert_eq!(cfg.initial_nutrition, 2.0);
        assert_eq!(cfg.gate_steepness, 12.5);
        assert_eq!(cfg.base_speed, 0.7);
        assert_eq!(cfg.speed_policy, SpeedPolicy::SatiationModulated);
        assert!(cfg.extinction);
        assert_eq!(cfg.history_capacity, 64);
        assert!(cfg.validate().is_ok());

        // Clean up env vars before testing defaults
        for (key, _) in overrides {
            std::env::remove_var(key);
        }

        // Part 2: nonexistent path returns defaults (no env interference)
        let cfg = SlugConfig::load_or_default("/nonexistent/path.toml");
        assert_eq!(cfg.gate_steepness, 50.0);
    }
}
