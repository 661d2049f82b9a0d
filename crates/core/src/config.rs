//! Tracker configuration.
//!
//! Every field has a default, so an embedding host only needs to supply the
//! values it wants to change (for example `{"celebration":{"reducedMotion":true}}`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AREA_PER_PARTICLE, CELEBRATION_BANNER_MS, CELEBRATION_CLEAR_AFTER_MS,
    DEFAULT_QUICK_ADD_AMOUNTS, GOALS_STORAGE_KEY, HOLD_INITIAL_DELAY_MS, HOLD_REPEAT_INTERVAL_MS,
    MAX_PARTICLES, MIN_PARTICLES,
};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    pub storage_key: String,
    pub quick_add_amounts: Vec<u64>,
    pub celebration: CelebrationConfig,
    pub hold_repeat: HoldRepeatConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: GOALS_STORAGE_KEY.to_string(),
            quick_add_amounts: DEFAULT_QUICK_ADD_AMOUNTS.to_vec(),
            celebration: CelebrationConfig::default(),
            hold_repeat: HoldRepeatConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Parses a (possibly partial) JSON document on top of the defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: TrackerConfig =
            serde_json::from_str(raw).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::Config("storageKey must not be empty".into()));
        }
        if self.quick_add_amounts.iter().any(|amount| *amount == 0) {
            return Err(Error::Config("quickAddAmounts must be positive".into()));
        }
        self.celebration.validate()?;
        self.hold_repeat.validate()
    }
}

/// Settings for the completion celebration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CelebrationConfig {
    /// Hard cap on the particle animation; all particles are cleared when it elapses.
    pub clear_after_ms: u64,
    pub banner_ms: u64,
    pub min_particles: usize,
    pub max_particles: usize,
    pub area_per_particle: u64,
    /// Host reports a reduced-motion preference: show only the banner.
    pub reduced_motion: bool,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            clear_after_ms: CELEBRATION_CLEAR_AFTER_MS,
            banner_ms: CELEBRATION_BANNER_MS,
            min_particles: MIN_PARTICLES,
            max_particles: MAX_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,
            reduced_motion: false,
        }
    }
}

impl CelebrationConfig {
    pub fn clear_after(&self) -> Duration {
        Duration::from_millis(self.clear_after_ms)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.min_particles > self.max_particles {
            return Err(Error::Config(format!(
                "minParticles ({}) exceeds maxParticles ({})",
                self.min_particles, self.max_particles
            )));
        }
        if self.area_per_particle == 0 {
            return Err(Error::Config("areaPerParticle must be positive".into()));
        }
        if self.clear_after_ms == 0 || self.banner_ms == 0 {
            return Err(Error::Config("celebration durations must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldRepeatConfig {
    pub initial_delay_ms: u64,
    pub interval_ms: u64,
}

impl Default for HoldRepeatConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: HOLD_INITIAL_DELAY_MS,
            interval_ms: HOLD_REPEAT_INTERVAL_MS,
        }
    }
}

impl HoldRepeatConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::Config("holdRepeat.intervalMs must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            TrackerConfig::from_json_str(r#"{"celebration":{"reducedMotion":true}}"#).unwrap();
        assert!(config.celebration.reduced_motion);
        assert_eq!(config.celebration.clear_after_ms, 2800);
        assert_eq!(config.celebration.banner_ms, 2200);
        assert_eq!(config.storage_key, "gaman-goals-v1");
        assert_eq!(config.quick_add_amounts, vec![100, 500, 1000]);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = TrackerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_rejects_inverted_particle_bounds() {
        let err = TrackerConfig::from_json_str(
            r#"{"celebration":{"minParticles":300,"maxParticles":10}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_blank_storage_key() {
        let err = TrackerConfig::from_json_str(r#"{"storageKey":"  "}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            TrackerConfig::from_json_str("{not json"),
            Err(Error::Config(_))
        ));
    }
}
