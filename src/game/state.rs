use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Arena used when a script or test does not say otherwise
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;
pub const ROBOT_WIDTH: f64 = 36.0;

/// What the host reports about our own robot at the start of a tick.
///
/// Headings are absolute degrees in [0, 360), clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotStatus {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    pub gun_heat: f64,
    pub energy: f64,
    pub battlefield_width: f64,
    pub battlefield_height: f64,
    pub width: f64,
    pub time: u64,
}

impl Default for RobotStatus {
    fn default() -> Self {
        Self {
            x: DEFAULT_ARENA_WIDTH / 2.0,
            y: DEFAULT_ARENA_HEIGHT / 2.0,
            velocity: 0.0,
            heading: 0.0,
            gun_heading: 0.0,
            radar_heading: 0.0,
            gun_heat: 0.0,
            energy: 100.0,
            battlefield_width: DEFAULT_ARENA_WIDTH,
            battlefield_height: DEFAULT_ARENA_HEIGHT,
            width: ROBOT_WIDTH,
            time: 0,
        }
    }
}

/// Which end of the body this robot currently treats as "forward".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    FrontForward,
    BackForward,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::FrontForward => Orientation::BackForward,
            Orientation::BackForward => Orientation::FrontForward,
        }
    }
}

/// Energy readings per opponent, in scan order.
///
/// Readings only grow through [`record`](Self::record); a confirmed drop
/// shrinks the sequence back to its latest reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpponentEnergyHistory {
    readings: BTreeMap<String, Vec<f64>>,
}

impl OpponentEnergyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, opponent: &str, energy: f64) {
        self.readings
            .entry(opponent.to_string())
            .or_default()
            .push(energy);
    }

    pub fn readings(&self, opponent: &str) -> Option<&[f64]> {
        self.readings.get(opponent).map(Vec::as_slice)
    }

    /// Keep only the most recent reading for `opponent`.
    pub fn truncate_to_latest(&mut self, opponent: &str) {
        if let Some(energies) = self.readings.get_mut(opponent) {
            let stale = energies.len().saturating_sub(1);
            energies.drain(..stale);
        }
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<f64>> {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }
}

/// Everything the controller remembers during one round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchState {
    pub energy_history: OpponentEnergyHistory,
    /// Damage dealt by our most recent bullet hit; 0.0 until we land one.
    pub last_bullet_hit_energy: f64,
    pub orientation: Orientation,
    pub near_wall: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_forward(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Reset for a new round. Nothing carries over between rounds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
