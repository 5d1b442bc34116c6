// Orientation-aware movement on top of the raw host commands

use crate::game::{Command, Host, Orientation};

use super::geometry::{normal_relative_angle, opposite_angle};

/// Heading as seen from the end of the body currently treated as forward.
pub fn oriented_heading(physical_heading: f64, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::FrontForward => physical_heading,
        Orientation::BackForward => opposite_angle(physical_heading),
    }
}

/// The host command that moves `distance` towards this robot's forward.
pub fn ahead_command(distance: f64, orientation: Orientation) -> Command {
    match orientation {
        Orientation::FrontForward => Command::Ahead { distance },
        Orientation::BackForward => Command::Back { distance },
    }
}

/// Wraps a host so "forward" can mean either end of the body.
///
/// All movement logic goes through this instead of issuing `Ahead`/`Back`
/// directly.
pub struct Drive<'a> {
    host: &'a mut dyn Host,
    orientation: Orientation,
}

impl<'a> Drive<'a> {
    pub fn new(host: &'a mut dyn Host, orientation: Orientation) -> Self {
        Self { host, orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn heading(&self) -> f64 {
        oriented_heading(self.host.status().heading, self.orientation)
    }

    pub fn set_ahead(&mut self, distance: f64) {
        self.host.submit(ahead_command(distance, self.orientation));
    }

    /// Turn by `degrees`, taking the shortest way round.
    pub fn turn_right(&mut self, degrees: f64) {
        self.host.submit(Command::TurnBody {
            degrees: normal_relative_angle(degrees),
        });
    }

    /// Turn until this robot's forward points at `heading`.
    pub fn turn_to(&mut self, heading: f64) {
        let delta = heading - self.heading();
        self.turn_right(delta);
    }
}
