// WrathBot configuration types
// All settings with defaults matching the tuned competition values

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, require_range, SetupError};
use crate::game::Rgb;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub targeting: TargetingConfig,
    #[serde(default)]
    pub walls: WallConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub colors: ColorConfig,
}

impl Config {
    /// Reject settings the controller cannot run with.
    pub fn validate(&self) -> Result<(), SetupError> {
        let m = &self.movement;
        require_positive("movement.roam_velocity_threshold", m.roam_velocity_threshold)?;
        require_range("movement.arc_turn", m.arc_turn_min, m.arc_turn_max)?;
        require_range("movement.roam_distance", m.roam_distance_min, m.roam_distance_max)?;
        require_range(
            "movement.evasive_distance",
            m.evasive_distance_min,
            m.evasive_distance_max,
        )?;

        require_positive("targeting.aim_tolerance", self.targeting.aim_tolerance)?;
        require_positive("targeting.radar_sweep", self.targeting.radar_sweep)?;

        require_positive("walls.margin", self.walls.margin)?;
        require_positive("walls.escape_factor", self.walls.escape_factor)?;

        if !(self.detector.self_hit_tolerance.is_finite() && self.detector.self_hit_tolerance >= 0.0)
        {
            return Err(SetupError::InvalidValue {
                name: "detector.self_hit_tolerance",
                value: self.detector.self_hit_tolerance,
            });
        }
        if self.detector.min_readings < 2 {
            return Err(SetupError::InvalidValue {
                name: "detector.min_readings",
                value: self.detector.min_readings as f64,
            });
        }

        self.rules.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    // Below this speed (absolute) the robot starts a new random arc
    pub roam_velocity_threshold: f64,

    // Magnitude of the random heading change per arc, in degrees
    pub arc_turn_min: f64,
    pub arc_turn_max: f64,

    // Distance travelled by an ordinary roaming arc
    pub roam_distance_min: f64,
    pub roam_distance_max: f64,

    // Distance travelled when dodging a suspected shot
    pub evasive_distance_min: f64,
    pub evasive_distance_max: f64,

    // Fixed seed for reproducible matches; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            roam_velocity_threshold: 3.0,
            arc_turn_min: 30.0,
            arc_turn_max: 75.0,
            roam_distance_min: 100.0,
            roam_distance_max: 400.0,
            evasive_distance_min: 50.0,
            evasive_distance_max: 250.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetingConfig {
    // Gun must be within this many degrees of the target to fire
    pub aim_tolerance: f64,

    // Radar rotation requested every tick (degrees, to the left)
    pub radar_sweep: f64,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            aim_tolerance: 5.0,
            radar_sweep: 360.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WallConfig {
    // Minimum safe distance from any wall
    pub margin: f64,

    // Escape distance = margin * escape_factor
    pub escape_factor: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            margin: 40.0,
            escape_factor: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectorConfig {
    // An energy drop within this amount of our last bullet hit is ours
    pub self_hit_tolerance: f64,

    // Readings required before a drop can be reported
    pub min_readings: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            self_hit_tolerance: 0.05,
            min_readings: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    pub min_bullet_power: f64,
    pub max_bullet_power: f64,
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), SetupError> {
        let (min, max) = (self.min_bullet_power, self.max_bullet_power);
        if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
            Ok(())
        } else {
            Err(SetupError::InvalidPowerRange { min, max })
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_bullet_power: 0.1,
            max_bullet_power: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorConfig {
    // Team colors (RGB values 0-255)
    pub body: Rgb,
    pub gun: Rgb,
    pub radar: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            body: Rgb::GREEN,
            gun: Rgb::BLUE,
            radar: Rgb::RED,
        }
    }
}
