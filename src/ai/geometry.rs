// Angle arithmetic and fire-power curve for the targeting code

use crate::config::RulesConfig;
use crate::error::{require_positive, SetupError};

/// Normalize any angle into [0, 360).
pub fn normal_absolute_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Normalize any angle into [-180, 180), the shortest signed rotation.
pub fn normal_relative_angle(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a >= 0.0 {
        if a < 180.0 {
            a
        } else {
            a - 360.0
        }
    } else if a >= -180.0 {
        a
    } else {
        a + 360.0
    }
}

/// The angle 180 degrees around the circle, in [0, 360).
///
/// `opposite_angle(opposite_angle(a)) == a` for every `a` in [0, 360).
pub fn opposite_angle(angle: f64) -> f64 {
    let a = normal_absolute_angle(angle);
    let opposite = if a < 180.0 { a + 180.0 } else { a - 180.0 };
    normal_absolute_angle(opposite)
}

/// Relative rotation that points an item (gun, radar) at a scanned target.
///
/// Not normalized; pass the result through [`normal_relative_angle`] before
/// using it as a turn command.
pub fn target_turn_angle(heading: f64, item_heading: f64, target_bearing: f64) -> f64 {
    heading - item_heading + target_bearing
}

/// Bullet power as a function of target distance.
///
/// Full power up to one robot width away, then a straight line down to the
/// minimum power at the far side of the arena (`max(width, height)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireControl {
    robot_width: f64,
    max_distance: f64,
    min_power: f64,
    max_power: f64,
}

impl FireControl {
    /// Bind the curve to an arena. Dimensions must be finite and positive.
    pub fn new(
        robot_width: f64,
        arena_width: f64,
        arena_height: f64,
        rules: &RulesConfig,
    ) -> Result<Self, SetupError> {
        let arena = |field: &'static str, value: f64| {
            require_positive(field, value).map_err(|_| SetupError::InvalidArena { field, value })
        };
        let robot_width = arena("robot width", robot_width)?;
        let arena_width = arena("arena width", arena_width)?;
        let arena_height = arena("arena height", arena_height)?;
        rules.validate()?;

        Ok(Self {
            robot_width,
            max_distance: arena_width.max(arena_height),
            min_power: rules.min_bullet_power,
            max_power: rules.max_bullet_power,
        })
    }

    pub fn proportional_power(&self, distance: f64) -> f64 {
        if distance <= self.robot_width {
            return self.max_power;
        }

        let span = self.max_distance - self.robot_width;
        if span <= 0.0 {
            // Arena no wider than a robot; everything is point blank
            return self.max_power;
        }

        let slope = (self.min_power - self.max_power) / span;
        let power = self.max_power + slope * (distance - self.robot_width);
        power.clamp(self.min_power, self.max_power)
    }

    pub fn max_power(&self) -> f64 {
        self.max_power
    }

    pub fn min_power(&self) -> f64 {
        self.min_power
    }
}
