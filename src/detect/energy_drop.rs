// Fired-upon condition: infer enemy shots from their energy readings
//
// Firing costs the shooter energy, so an unexplained drop between two scans
// means a bullet is probably on its way.

use tracing::trace;

use crate::config::DetectorConfig;
use crate::game::OpponentEnergyHistory;

/// A drop attributed to an enemy shot.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyDrop {
    pub opponent: String,
    pub drop: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyDropDetector {
    tolerance: f64,
    min_readings: usize,
}

impl EnergyDropDetector {
    /// `tolerance` is how close a drop must be to our last hit to count as ours.
    /// `min_readings` is clamped to at least 2 (a drop needs two readings).
    pub fn new(tolerance: f64, min_readings: usize) -> Self {
        Self {
            tolerance,
            min_readings: min_readings.max(2),
        }
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new(config.self_hit_tolerance, config.min_readings)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Find the first opponent whose energy fell for a reason other than our
    /// own bullet. That opponent's history is cut back to its latest reading
    /// so the same drop is never reported twice. Drops matching our last hit
    /// are consumed the same way, so a later hit cannot re-attribute them.
    ///
    /// At most one drop is reported per call. Opponents with too few readings
    /// are skipped.
    pub fn detect(
        &self,
        history: &mut OpponentEnergyHistory,
        last_bullet_hit_energy: f64,
    ) -> Option<EnergyDrop> {
        let mut ours = Vec::new();
        let mut found = None;

        for (opponent, energies) in history.iter() {
            let n = energies.len();
            if n < self.min_readings {
                continue;
            }

            let latest = energies[n - 1];
            let drop = energies[n - 2] - latest;
            if drop <= 0.0 {
                continue;
            }

            if self.is_self_inflicted(drop, latest, last_bullet_hit_energy) {
                trace!(opponent = %opponent, drop, "energy drop matches our last hit");
                ours.push(opponent.clone());
            } else if found.is_none() {
                found = Some(EnergyDrop {
                    opponent: opponent.clone(),
                    drop,
                });
            }
        }

        for opponent in &ours {
            history.truncate_to_latest(opponent);
        }
        if let Some(drop) = &found {
            history.truncate_to_latest(&drop.opponent);
        }
        found
    }

    /// Boolean form of [`detect`](Self::detect).
    pub fn evaluate(
        &self,
        history: &mut OpponentEnergyHistory,
        last_bullet_hit_energy: f64,
    ) -> bool {
        self.detect(history, last_bullet_hit_energy).is_some()
    }

    // Some hosts report the damage dealt, others the victim's remaining energy
    fn is_self_inflicted(&self, drop: f64, latest: f64, last_bullet_hit_energy: f64) -> bool {
        if last_bullet_hit_energy <= 0.0 {
            return false;
        }
        (drop - last_bullet_hit_energy).abs() <= self.tolerance
            || (latest - last_bullet_hit_energy).abs() <= self.tolerance
    }
}

impl Default for EnergyDropDetector {
    fn default() -> Self {
        Self::from_config(&DetectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_with(opponent: &str, energies: &[f64]) -> OpponentEnergyHistory {
        let mut history = OpponentEnergyHistory::new();
        for &energy in energies {
            history.record(opponent, energy);
        }
        history
    }

    #[test]
    fn test_drop_reported_exactly_once() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[100.0, 100.0, 80.0]);

        assert!(detector.evaluate(&mut history, 0.0));
        assert_eq!(history.readings("sample.Fire"), Some(&[80.0][..]));
        assert!(!detector.evaluate(&mut history, 0.0));
    }

    #[test]
    fn test_drop_matching_our_hit_is_suppressed() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[100.0, 100.0, 80.0]);

        assert!(!detector.evaluate(&mut history, 20.02));
        // Consumed like a reported drop
        assert_eq!(history.readings("sample.Fire"), Some(&[80.0][..]));
    }

    #[test]
    fn test_our_drop_not_reported_after_next_hit() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[100.0, 100.0, 84.0]);

        assert!(!detector.evaluate(&mut history, 16.0));
        // A later hit on someone else changes the last hit energy
        assert!(!detector.evaluate(&mut history, 4.0));
    }

    #[test]
    fn test_our_drop_consumed_alongside_enemy_shot() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Crazy", &[100.0, 100.0, 84.0]);
        for energy in [100.0, 100.0, 97.0] {
            history.record("sample.Tracker", energy);
        }

        let drop = detector.detect(&mut history, 16.0).unwrap();
        assert_eq!(drop.opponent, "sample.Tracker");
        assert_eq!(history.readings("sample.Crazy"), Some(&[84.0][..]));
        assert!(detector.detect(&mut history, 4.0).is_none());
    }

    #[test]
    fn test_latest_reading_matching_our_hit_is_suppressed() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[100.0, 100.0, 84.0]);

        assert!(!detector.evaluate(&mut history, 84.0));
    }

    #[test]
    fn test_drop_outside_tolerance_still_fires() {
        let detector = EnergyDropDetector::new(0.05, 3);
        let mut history = history_with("sample.Fire", &[100.0, 100.0, 80.0]);

        assert!(detector.evaluate(&mut history, 16.0));
    }

    #[test]
    fn test_needs_three_readings() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[100.0, 80.0]);

        assert!(!detector.evaluate(&mut history, 0.0));

        history.record("sample.Fire", 70.0);
        assert!(detector.evaluate(&mut history, 0.0));
    }

    #[test]
    fn test_rising_or_flat_energy_is_ignored() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[80.0, 90.0, 90.0]);
        assert!(!detector.evaluate(&mut history, 0.0));

        history.record("sample.Fire", 95.0);
        assert!(!detector.evaluate(&mut history, 0.0));
    }

    #[test]
    fn test_fresh_baseline_after_truncation() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[100.0, 100.0, 97.0]);
        assert!(detector.evaluate(&mut history, 0.0));

        // One more reading is not enough; two more is
        history.record("sample.Fire", 94.0);
        assert!(!detector.evaluate(&mut history, 0.0));
        history.record("sample.Fire", 91.0);

        let drop = detector.detect(&mut history, 0.0).unwrap();
        assert_eq!(drop.opponent, "sample.Fire");
        assert!((drop.drop - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_drop_per_evaluation() {
        let detector = EnergyDropDetector::default();
        let mut history = history_with("sample.Fire", &[100.0, 100.0, 97.0]);
        for energy in [100.0, 100.0, 98.0] {
            history.record("sample.Tracker", energy);
        }

        let first = detector.detect(&mut history, 0.0).unwrap();
        let second = detector.detect(&mut history, 0.0).unwrap();
        assert_ne!(first.opponent, second.opponent);
        assert!(detector.detect(&mut history, 0.0).is_none());
    }

    #[test]
    fn test_empty_history() {
        let detector = EnergyDropDetector::default();
        let mut history = OpponentEnergyHistory::new();
        assert!(detector.detect(&mut history, 3.0).is_none());
    }
}
