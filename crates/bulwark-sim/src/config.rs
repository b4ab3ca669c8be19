//! Session configuration and gameplay tuning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bulwark_core::constants::*;
use bulwark_core::enums::ScenarioId;

/// Gameplay numbers read by the update systems.
///
/// Defaults mirror `bulwark_core::constants`; hosts may override any field
/// from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub monster_speed: f32,
    pub monster_max_health: u32,
    pub monster_damage: u32,
    pub waypoint_arrival_radius: f32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_damage: u32,
    pub tower_range: f32,
    pub tower_attack_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            monster_speed: MONSTER_SPEED,
            monster_max_health: MONSTER_MAX_HEALTH,
            monster_damage: MONSTER_DAMAGE,
            waypoint_arrival_radius: WAYPOINT_ARRIVAL_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_damage: BULLET_DAMAGE,
            tower_range: TOWER_RANGE,
            tower_attack_rate: TOWER_ATTACK_RATE,
        }
    }
}

/// Configuration for starting a new simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for generated scenarios. Same seed = same layout.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
    /// Player health at session start.
    pub player_health: u32,
    /// Starting layout.
    pub scenario: ScenarioId,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            player_health: PLAYER_START_HEALTH,
            scenario: ScenarioId::default(),
            tuning: Tuning::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid config: `{field}` {reason}")]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl SimConfig {
    /// Reject values the systems cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(invalid("time_scale", "must be within 0.0..=4.0"));
        }
        if self.player_health == 0 {
            return Err(invalid("player_health", "must be at least 1"));
        }

        let t = &self.tuning;
        let positive = [
            ("tuning.monster_speed", t.monster_speed),
            ("tuning.waypoint_arrival_radius", t.waypoint_arrival_radius),
            ("tuning.bullet_speed", t.bullet_speed),
            ("tuning.bullet_radius", t.bullet_radius),
            ("tuning.tower_range", t.tower_range),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive finite number"));
            }
        }
        if !t.tower_attack_rate.is_finite() || t.tower_attack_rate < 0.0 {
            return Err(invalid(
                "tuning.tower_attack_rate",
                "must be a non-negative finite number",
            ));
        }
        if t.monster_max_health == 0 {
            return Err(invalid("tuning.monster_max_health", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{"seed":7,"tuning":{"bullet_damage":20}}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.tuning.bullet_damage, 20);
        assert_eq!(config.tuning.bullet_speed, BULLET_SPEED);
        assert_eq!(config.player_health, PLAYER_START_HEALTH);
        assert_eq!(config.scenario, ScenarioId::Sandbox);
    }

    #[test]
    fn test_scenario_parses_by_name() {
        let config: SimConfig = serde_json::from_str(r#"{"scenario":"Skirmish"}"#).unwrap();
        assert_eq!(config.scenario, ScenarioId::Skirmish);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SimConfig::default();
        config.tuning.bullet_speed = 0.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "tuning.bullet_speed");

        let mut config = SimConfig::default();
        config.player_health = 0;
        assert_eq!(config.validate().unwrap_err().field, "player_health");

        let mut config = SimConfig::default();
        config.time_scale = f32::NAN;
        assert_eq!(config.validate().unwrap_err().field, "time_scale");

        let mut config = SimConfig::default();
        config.tuning.tower_attack_rate = -1.0;
        assert_eq!(
            config.validate().unwrap_err().field,
            "tuning.tower_attack_rate"
        );
    }
}
