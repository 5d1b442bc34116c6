// Bot trait for arena robots, and the per-tick driver that calls it

use crate::detect::CustomEvent;
use crate::error::SetupError;
use crate::game::{BulletHitEvent, HitRobotEvent, Host, RobotEvent, RobotStatus, ScannedRobotEvent};

/// Trait for robot controllers.
///
/// The host owns the clock. Every callback runs inside the current tick and
/// only queues commands; [`play_turn`] flushes them once at the end.
pub trait Bot {
    /// Prepare for a new round. A misconfigured arena binding is fatal.
    fn on_round_start(&mut self, host: &mut dyn Host) -> Result<(), SetupError>;

    /// Main-loop body, run once per tick after all events.
    fn on_turn(&mut self, host: &mut dyn Host);

    fn on_scanned_robot(&mut self, host: &mut dyn Host, event: &ScannedRobotEvent);

    fn on_bullet_hit(&mut self, _event: &BulletHitEvent) {}

    fn on_hit_robot(&mut self, _host: &mut dyn Host, _event: &HitRobotEvent) {}

    fn on_win(&mut self, _host: &mut dyn Host) {}

    /// Evaluate registered conditions against this tick.
    fn test_conditions(&mut self, _status: &RobotStatus) -> Vec<CustomEvent> {
        Vec::new()
    }

    fn on_custom_event(&mut self, _host: &mut dyn Host, _event: &CustomEvent) {}

    /// Bot name for logs and replays
    fn name(&self) -> &str;
}

/// Run one tick: host events by priority, then conditions, then the main
/// loop, then a single flush.
pub fn play_turn(bot: &mut dyn Bot, host: &mut dyn Host, events: &[RobotEvent]) {
    let mut ordered: Vec<&RobotEvent> = events.iter().collect();
    // Stable, so same-priority events keep their delivery order
    ordered.sort_by(|a, b| b.priority().cmp(&a.priority()));

    for event in ordered {
        match event {
            RobotEvent::Win => bot.on_win(host),
            RobotEvent::BulletHit(hit) => bot.on_bullet_hit(hit),
            RobotEvent::HitRobot(ram) => bot.on_hit_robot(host, ram),
            RobotEvent::ScannedRobot(scan) => bot.on_scanned_robot(host, scan),
        }
    }

    let status = *host.status();
    for custom in bot.test_conditions(&status) {
        bot.on_custom_event(host, &custom);
    }

    bot.on_turn(host);
    host.execute();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Command;
    use crate::harness::RecordingHost;

    /// Logs callback order as fire commands with distinct powers.
    struct Tracer;

    impl Bot for Tracer {
        fn on_round_start(&mut self, _host: &mut dyn Host) -> Result<(), SetupError> {
            Ok(())
        }

        fn on_turn(&mut self, host: &mut dyn Host) {
            host.submit(Command::Fire { power: 4.0 });
        }

        fn on_scanned_robot(&mut self, host: &mut dyn Host, _event: &ScannedRobotEvent) {
            host.submit(Command::Fire { power: 1.0 });
        }

        fn on_hit_robot(&mut self, host: &mut dyn Host, _event: &HitRobotEvent) {
            host.submit(Command::Fire { power: 2.0 });
        }

        fn on_win(&mut self, host: &mut dyn Host) {
            host.submit(Command::Fire { power: 3.0 });
        }

        fn name(&self) -> &str {
            "Tracer"
        }
    }

    #[test]
    fn test_events_delivered_by_priority_then_main_loop() {
        let mut host = RecordingHost::default();
        let events = vec![
            RobotEvent::ScannedRobot(ScannedRobotEvent {
                name: "sample.Fire".into(),
                bearing: 0.0,
                distance: 100.0,
                energy: 100.0,
            }),
            RobotEvent::HitRobot(HitRobotEvent {
                name: "sample.Fire".into(),
                bearing: 0.0,
            }),
            RobotEvent::Win,
        ];

        play_turn(&mut Tracer, &mut host, &events);

        let powers: Vec<f64> = host.executed()[0]
            .iter()
            .filter_map(|c| match c {
                Command::Fire { power } => Some(*power),
                _ => None,
            })
            .collect();
        assert_eq!(powers, vec![3.0, 2.0, 1.0, 4.0]);
        assert_eq!(host.executed().len(), 1);
    }
}
