// Wall proximity condition

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The four walls of the arena. North is the top (largest y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

/// When a [`WallProximityDetector`] reports true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallTrigger {
    /// Robot is closer than the margin to at least one wall.
    TooClose,
    /// Robot is at least the margin away from every wall.
    SafeReturn,
}

impl WallTrigger {
    pub fn reversed(self) -> Self {
        match self {
            WallTrigger::TooClose => WallTrigger::SafeReturn,
            WallTrigger::SafeReturn => WallTrigger::TooClose,
        }
    }
}

/// Checks the robot's position against the arena walls every tick.
///
/// The violation set is rebuilt from scratch on each evaluation; nothing
/// from earlier ticks is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct WallProximityDetector {
    trigger: WallTrigger,
    margin: f64,
    walls_in_violation: BTreeSet<Wall>,
}

impl WallProximityDetector {
    pub fn new(trigger: WallTrigger, margin: f64) -> Self {
        Self {
            trigger,
            margin,
            walls_in_violation: BTreeSet::new(),
        }
    }

    /// Recompute the violated walls and report whether this detector fires.
    pub fn evaluate(&mut self, x: f64, y: f64, arena_height: f64, arena_width: f64) -> bool {
        self.find_walls_in_violation(x, y, arena_height, arena_width);

        match self.trigger {
            WallTrigger::TooClose => !self.walls_in_violation.is_empty(),
            WallTrigger::SafeReturn => self.walls_in_violation.is_empty(),
        }
    }

    pub fn walls_in_violation(&self) -> &BTreeSet<Wall> {
        &self.walls_in_violation
    }

    pub fn trigger(&self) -> WallTrigger {
        self.trigger
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    fn find_walls_in_violation(&mut self, x: f64, y: f64, height: f64, width: f64) {
        self.walls_in_violation.clear();

        if x < self.margin {
            self.walls_in_violation.insert(Wall::West);
        }
        if x > width - self.margin {
            self.walls_in_violation.insert(Wall::East);
        }
        if y < self.margin {
            self.walls_in_violation.insert(Wall::South);
        }
        if y > height - self.margin {
            self.walls_in_violation.insert(Wall::North);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f64 = 600.0;
    const WIDTH: f64 = 800.0;

    #[test]
    fn test_west_wall_too_close() {
        let mut detector = WallProximityDetector::new(WallTrigger::TooClose, 40.0);

        assert!(detector.evaluate(5.0, 500.0, HEIGHT, WIDTH));
        assert_eq!(
            detector.walls_in_violation().iter().copied().collect::<Vec<_>>(),
            vec![Wall::West]
        );
    }

    #[test]
    fn test_safe_return_does_not_fire_near_wall() {
        let mut detector = WallProximityDetector::new(WallTrigger::SafeReturn, 40.0);

        assert!(!detector.evaluate(5.0, 500.0, HEIGHT, WIDTH));
        assert!(detector.walls_in_violation().contains(&Wall::West));
    }

    #[test]
    fn test_safe_return_fires_in_open_field() {
        let mut detector = WallProximityDetector::new(WallTrigger::SafeReturn, 40.0);

        assert!(detector.evaluate(400.0, 300.0, HEIGHT, WIDTH));
        assert!(detector.walls_in_violation().is_empty());
    }

    #[test]
    fn test_too_close_quiet_in_open_field() {
        let mut detector = WallProximityDetector::new(WallTrigger::TooClose, 40.0);
        assert!(!detector.evaluate(400.0, 300.0, HEIGHT, WIDTH));
    }

    #[test]
    fn test_corner_violates_two_walls() {
        let mut detector = WallProximityDetector::new(WallTrigger::TooClose, 40.0);

        assert!(detector.evaluate(790.0, 590.0, HEIGHT, WIDTH));
        let walls: Vec<Wall> = detector.walls_in_violation().iter().copied().collect();
        assert_eq!(walls, vec![Wall::North, Wall::East]);
    }

    #[test]
    fn test_margin_boundary_is_safe() {
        let mut detector = WallProximityDetector::new(WallTrigger::TooClose, 40.0);

        // Exactly on the margin line is not a violation on any side
        assert!(!detector.evaluate(40.0, 40.0, HEIGHT, WIDTH));
        assert!(!detector.evaluate(760.0, 560.0, HEIGHT, WIDTH));
        assert!(detector.evaluate(39.9, 300.0, HEIGHT, WIDTH));
        assert!(detector.evaluate(400.0, 560.1, HEIGHT, WIDTH));
    }

    #[test]
    fn test_violations_recomputed_each_call() {
        let mut detector = WallProximityDetector::new(WallTrigger::TooClose, 40.0);

        detector.evaluate(10.0, 10.0, HEIGHT, WIDTH);
        assert_eq!(detector.walls_in_violation().len(), 2);

        detector.evaluate(400.0, 300.0, HEIGHT, WIDTH);
        assert!(detector.walls_in_violation().is_empty());
    }

    #[test]
    fn test_trigger_reversal() {
        assert_eq!(WallTrigger::TooClose.reversed(), WallTrigger::SafeReturn);
        assert_eq!(WallTrigger::SafeReturn.reversed(), WallTrigger::TooClose);
    }
}
