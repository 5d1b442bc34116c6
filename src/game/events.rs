use serde::{Deserialize, Serialize};

/// Another robot passed through our radar beam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScannedRobotEvent {
    pub name: String,
    /// Relative to our physical heading, in [-180, 180).
    pub bearing: f64,
    pub distance: f64,
    pub energy: f64,
}

/// One of our bullets hit another robot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BulletHitEvent {
    pub victim: String,
    pub energy: f64,
}

/// We collided with another robot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitRobotEvent {
    pub name: String,
    pub bearing: f64,
}

/// Events the host delivers during a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RobotEvent {
    ScannedRobot(ScannedRobotEvent),
    BulletHit(BulletHitEvent),
    HitRobot(HitRobotEvent),
    Win,
}

impl RobotEvent {
    /// Delivery priority within a tick; higher goes first.
    pub fn priority(&self) -> u8 {
        match self {
            RobotEvent::Win => 100,
            RobotEvent::BulletHit(_) => 50,
            RobotEvent::HitRobot(_) => 40,
            RobotEvent::ScannedRobot(_) => 10,
        }
    }
}
