// Conditions re-evaluated every tick, and the custom events they raise

mod energy_drop;
mod wall_proximity;

use std::collections::BTreeSet;

pub use energy_drop::{EnergyDrop, EnergyDropDetector};
pub use wall_proximity::{Wall, WallProximityDetector, WallTrigger};

use crate::game::{MatchState, RobotStatus};

/// A registered condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    WallProximity(WallProximityDetector),
    FiredUpon(EnergyDropDetector),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    WallProximity,
    FiredUpon,
}

impl Condition {
    pub fn kind(&self) -> ConditionKind {
        match self {
            Condition::WallProximity(_) => ConditionKind::WallProximity,
            Condition::FiredUpon(_) => ConditionKind::FiredUpon,
        }
    }

    fn test(&mut self, status: &RobotStatus, state: &mut MatchState) -> Option<CustomEvent> {
        match self {
            Condition::WallProximity(detector) => detector
                .evaluate(
                    status.x,
                    status.y,
                    status.battlefield_height,
                    status.battlefield_width,
                )
                .then(|| CustomEvent::WallProximity {
                    trigger: detector.trigger(),
                    margin: detector.margin(),
                    walls: detector.walls_in_violation().clone(),
                }),
            Condition::FiredUpon(detector) => detector
                .detect(&mut state.energy_history, state.last_bullet_hit_energy)
                .map(|drop| CustomEvent::FiredUpon {
                    opponent: drop.opponent,
                    drop: drop.drop,
                }),
        }
    }
}

/// Raised when a condition tests true.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomEvent {
    WallProximity {
        trigger: WallTrigger,
        margin: f64,
        walls: BTreeSet<Wall>,
    },
    FiredUpon {
        opponent: String,
        drop: f64,
    },
}

impl CustomEvent {
    /// Dispatch priority; wall handling must run before evasion.
    pub fn priority(&self) -> u8 {
        match self {
            CustomEvent::WallProximity { .. } => 90,
            CustomEvent::FiredUpon { .. } => 80,
        }
    }
}

/// The robot's registered conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionSet {
    conditions: Vec<Condition>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Remove every condition of `kind`.
    pub fn remove(&mut self, kind: ConditionKind) {
        self.conditions.retain(|c| c.kind() != kind);
    }

    pub fn clear(&mut self) {
        self.conditions.clear();
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    /// Current wall detector, if one is registered.
    pub fn wall_detector(&self) -> Option<&WallProximityDetector> {
        self.conditions.iter().find_map(|c| match c {
            Condition::WallProximity(detector) => Some(detector),
            _ => None,
        })
    }

    /// Test every condition against this tick, highest priority event first.
    pub fn test(&mut self, status: &RobotStatus, state: &mut MatchState) -> Vec<CustomEvent> {
        let mut fired: Vec<CustomEvent> = self
            .conditions
            .iter_mut()
            .filter_map(|condition| condition.test(status, state))
            .collect();
        fired.sort_by(|a, b| b.priority().cmp(&a.priority()));
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near_west_wall() -> RobotStatus {
        RobotStatus {
            x: 5.0,
            y: 500.0,
            ..RobotStatus::default()
        }
    }

    fn state_with_drop() -> MatchState {
        let mut state = MatchState::new();
        for energy in [100.0, 100.0, 80.0] {
            state.energy_history.record("sample.Fire", energy);
        }
        state
    }

    #[test]
    fn test_wall_event_sorted_before_fired_upon() {
        let mut conditions = ConditionSet::new();
        // Registered out of priority order on purpose
        conditions.add(Condition::FiredUpon(EnergyDropDetector::default()));
        conditions.add(Condition::WallProximity(WallProximityDetector::new(
            WallTrigger::TooClose,
            40.0,
        )));

        let mut state = state_with_drop();
        let fired = conditions.test(&near_west_wall(), &mut state);

        assert_eq!(fired.len(), 2);
        assert!(matches!(
            &fired[0],
            CustomEvent::WallProximity { trigger: WallTrigger::TooClose, walls, .. }
                if walls.contains(&Wall::West)
        ));
        assert!(matches!(&fired[1], CustomEvent::FiredUpon { opponent, .. } if opponent == "sample.Fire"));
    }

    #[test]
    fn test_remove_by_kind() {
        let mut conditions = ConditionSet::new();
        conditions.add(Condition::WallProximity(WallProximityDetector::new(
            WallTrigger::TooClose,
            40.0,
        )));
        conditions.add(Condition::FiredUpon(EnergyDropDetector::default()));

        conditions.remove(ConditionKind::WallProximity);

        assert_eq!(conditions.len(), 1);
        assert!(conditions.wall_detector().is_none());
        assert_eq!(
            conditions.iter().next().map(Condition::kind),
            Some(ConditionKind::FiredUpon)
        );
    }

    #[test]
    fn test_nothing_fires_in_open_field_without_drops() {
        let mut conditions = ConditionSet::new();
        conditions.add(Condition::WallProximity(WallProximityDetector::new(
            WallTrigger::TooClose,
            40.0,
        )));
        conditions.add(Condition::FiredUpon(EnergyDropDetector::default()));

        let mut state = MatchState::new();
        assert!(conditions.test(&RobotStatus::default(), &mut state).is_empty());
    }
}
