// Victory spin: cycle the rainbow and keep firing until the round ends

use crate::game::{Command, Host, Rgb};

const RAINBOW: [Rgb; 6] = [
    Rgb::RED,
    Rgb::ORANGE,
    Rgb::YELLOW,
    Rgb::GREEN,
    Rgb::BLUE,
    Rgb::MAGENTA,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    step: usize,
    fire_power: f64,
}

impl Celebration {
    /// Start spinning body and radar right and the gun left, without end.
    pub fn start(host: &mut dyn Host, fire_power: f64) -> Self {
        host.submit(Command::TurnBody {
            degrees: f64::INFINITY,
        });
        host.submit(Command::TurnGun {
            degrees: f64::NEG_INFINITY,
        });
        host.submit(Command::TurnRadar {
            degrees: f64::INFINITY,
        });
        Self {
            step: 0,
            fire_power,
        }
    }

    /// One tick of the dance.
    pub fn step(&mut self, host: &mut dyn Host) {
        let i = self.step;
        host.submit(Command::SetColors {
            body: RAINBOW[i % RAINBOW.len()],
            gun: RAINBOW[(i + 1) % RAINBOW.len()],
            radar: RAINBOW[(i + 2) % RAINBOW.len()],
        });
        host.submit(Command::SetBulletColor {
            color: RAINBOW[(i + 3) % RAINBOW.len()],
        });
        host.submit(Command::Fire {
            power: self.fire_power,
        });
        self.step = self.step.wrapping_add(1);
    }
}
