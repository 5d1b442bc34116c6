// WrathBot: stop-and-go dodging, arcing movement and back-as-front driving

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use tracing::{debug, info, trace};

use super::celebration::Celebration;
use super::geometry::{normal_relative_angle, target_turn_angle, FireControl};
use super::orientation::Drive;
use super::Bot;
use crate::config::Config;
use crate::detect::{
    Condition, ConditionKind, ConditionSet, CustomEvent, EnergyDropDetector,
    WallProximityDetector, WallTrigger,
};
use crate::error::SetupError;
use crate::game::{
    BulletHitEvent, Command, HitRobotEvent, Host, MatchState, RobotStatus, ScannedRobotEvent,
};

const NAME: &str = "WrathBot";

// Below this speed the robot counts as stalled
const STALL_EPSILON: f64 = 1e-6;

/// The behavior controller.
///
/// Roams in random arcs, squares off against whatever the radar finds, fires
/// with distance-scaled power, and flips which end of the body is "forward"
/// to dodge suspected shots and to back away from walls.
pub struct WrathBot {
    config: Config,
    state: MatchState,
    conditions: ConditionSet,
    fire_control: Option<FireControl>,
    celebration: Option<Celebration>,
    // Set when an event handler queued movement this tick
    maneuvered: bool,

    // Randomized movement
    rng: StdRng,
    arc_turn: Uniform<f64>,
    roam_distance: Uniform<f64>,
    evasive_distance: Uniform<f64>,
}

impl WrathBot {
    /// Build a controller from validated configuration.
    pub fn new(config: Config) -> Result<Self, SetupError> {
        config.validate()?;

        let m = &config.movement;
        let rng = match m.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let arc_turn = Uniform::new_inclusive(m.arc_turn_min, m.arc_turn_max);
        let roam_distance = Uniform::new_inclusive(m.roam_distance_min, m.roam_distance_max);
        let evasive_distance =
            Uniform::new_inclusive(m.evasive_distance_min, m.evasive_distance_max);

        Ok(Self {
            config,
            state: MatchState::new(),
            conditions: ConditionSet::new(),
            fire_control: None,
            celebration: None,
            maneuvered: false,
            rng,
            arc_turn,
            roam_distance,
            evasive_distance,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    fn switch_forward(&mut self) {
        self.state.switch_forward();
        debug!(orientation = ?self.state.orientation, "switched forward");
    }

    /// Turn 30-75 degrees either way and drive off. `None` picks a random
    /// roaming distance.
    fn move_in_arc(&mut self, host: &mut dyn Host, distance: Option<f64>) {
        let magnitude = self.arc_turn.sample(&mut self.rng);
        let delta = if self.rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        let distance = distance.unwrap_or_else(|| self.roam_distance.sample(&mut self.rng));

        let mut drive = Drive::new(host, self.state.orientation);
        let target = drive.heading() + delta;
        drive.turn_to(target);
        drive.set_ahead(distance);

        debug!(delta, distance, "arc");
    }

    fn on_wall_proximity(&mut self, host: &mut dyn Host, trigger: WallTrigger, margin: f64) {
        self.conditions.remove(ConditionKind::WallProximity);
        self.conditions
            .add(Condition::WallProximity(WallProximityDetector::new(
                trigger.reversed(),
                margin,
            )));

        match trigger {
            WallTrigger::TooClose => {
                self.state.near_wall = true;
                self.switch_forward();
                let escape = margin * self.config.walls.escape_factor;
                Drive::new(host, self.state.orientation).set_ahead(escape);
                self.maneuvered = true;
                debug!(escape, "too close to wall, backing off");
            }
            WallTrigger::SafeReturn => {
                self.state.near_wall = false;
                debug!("clear of walls");
            }
        }
    }

    fn on_fired_upon(&mut self, host: &mut dyn Host, opponent: &str, drop: f64) {
        if self.state.near_wall {
            trace!(opponent, "ignoring shot while escaping a wall");
            return;
        }

        debug!(opponent, drop, "fired upon, evading");
        self.switch_forward();
        let distance = self.evasive_distance.sample(&mut self.rng);
        self.move_in_arc(host, Some(distance));
        self.maneuvered = true;
    }
}

impl Bot for WrathBot {
    fn on_round_start(&mut self, host: &mut dyn Host) -> Result<(), SetupError> {
        let status = *host.status();
        self.fire_control = Some(FireControl::new(
            status.width,
            status.battlefield_width,
            status.battlefield_height,
            &self.config.rules,
        )?);

        self.state.reset();
        self.celebration = None;
        self.maneuvered = false;
        self.conditions.clear();
        self.conditions
            .add(Condition::WallProximity(WallProximityDetector::new(
                WallTrigger::TooClose,
                self.config.walls.margin,
            )));
        self.conditions.add(Condition::FiredUpon(EnergyDropDetector::from_config(
            &self.config.detector,
        )));

        let colors = &self.config.colors;
        host.submit(Command::SetColors {
            body: colors.body,
            gun: colors.gun,
            radar: colors.radar,
        });
        host.submit(Command::AdjustRadarForGunTurn { enabled: true });

        info!(
            arena_width = status.battlefield_width,
            arena_height = status.battlefield_height,
            "round started"
        );
        Ok(())
    }

    fn on_turn(&mut self, host: &mut dyn Host) {
        let maneuvered = std::mem::take(&mut self.maneuvered);

        if let Some(celebration) = self.celebration.as_mut() {
            celebration.step(host);
            return;
        }

        let velocity = host.status().velocity.abs();

        // An escape or evasion queued this tick owns the body until it runs
        if !maneuvered {
            if velocity < self.config.movement.roam_velocity_threshold && !self.state.near_wall {
                self.move_in_arc(host, None);
            }

            // Stuck against a wall
            if self.state.near_wall && velocity < STALL_EPSILON {
                self.switch_forward();
                self.move_in_arc(host, None);
            }
        }

        host.submit(Command::TurnRadar {
            degrees: -self.config.targeting.radar_sweep,
        });
    }

    fn on_scanned_robot(&mut self, host: &mut dyn Host, event: &ScannedRobotEvent) {
        if self.state.near_wall || self.celebration.is_some() {
            return;
        }

        // Square off: present our side to the target
        Drive::new(host, self.state.orientation).turn_right(event.bearing + 90.0);

        self.state.energy_history.record(&event.name, event.energy);

        // Lead angles use the physical heading, whatever end is forward
        let status: RobotStatus = *host.status();
        let radar_turn = normal_relative_angle(target_turn_angle(
            status.heading,
            status.radar_heading,
            event.bearing,
        ));
        let gun_turn = normal_relative_angle(target_turn_angle(
            status.heading,
            status.gun_heading,
            event.bearing,
        ));
        host.submit(Command::TurnRadar {
            degrees: radar_turn,
        });
        host.submit(Command::TurnGun { degrees: gun_turn });

        trace!(
            opponent = %event.name,
            energy = event.energy,
            distance = event.distance,
            gun_turn,
            "scanned"
        );

        // Only shoot once the gun is on target and cool
        if gun_turn.abs() < self.config.targeting.aim_tolerance && status.gun_heat <= 0.0 {
            if let Some(fire_control) = self.fire_control {
                let power = fire_control.proportional_power(event.distance);
                host.submit(Command::Fire { power });
                debug!(opponent = %event.name, power, "fire");
            }
        }
    }

    fn on_bullet_hit(&mut self, event: &BulletHitEvent) {
        self.state.last_bullet_hit_energy = event.energy;
        trace!(victim = %event.victim, energy = event.energy, "bullet hit");
    }

    fn on_hit_robot(&mut self, host: &mut dyn Host, event: &HitRobotEvent) {
        if self.celebration.is_some() {
            return;
        }
        debug!(other = %event.name, "rammed, breaking away");
        self.switch_forward();
        self.move_in_arc(host, None);
        self.maneuvered = true;
    }

    fn on_win(&mut self, host: &mut dyn Host) {
        if self.celebration.is_some() {
            return;
        }
        info!("round won");
        let power = self.config.rules.max_bullet_power;
        self.celebration = Some(Celebration::start(host, power));
    }

    fn test_conditions(&mut self, status: &RobotStatus) -> Vec<CustomEvent> {
        if self.celebration.is_some() {
            return Vec::new();
        }
        self.conditions.test(status, &mut self.state)
    }

    fn on_custom_event(&mut self, host: &mut dyn Host, event: &CustomEvent) {
        match event {
            CustomEvent::WallProximity {
                trigger, margin, ..
            } => self.on_wall_proximity(host, *trigger, *margin),
            CustomEvent::FiredUpon { opponent, drop } => {
                self.on_fired_upon(host, opponent, *drop)
            }
        }
    }

    fn name(&self) -> &str {
        NAME
    }
}
