use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const RED: Rgb = Rgb([255, 0, 0]);
    pub const ORANGE: Rgb = Rgb([255, 200, 0]);
    pub const YELLOW: Rgb = Rgb([255, 255, 0]);
    pub const GREEN: Rgb = Rgb([0, 255, 0]);
    pub const BLUE: Rgb = Rgb([0, 0, 255]);
    pub const MAGENTA: Rgb = Rgb([255, 0, 255]);
}

/// Commands queued for the host. Nothing happens until the host executes
/// the batch at the end of the tick.
///
/// Turn angles are relative degrees; positive turns right (clockwise).
/// An infinite angle keeps turning until told otherwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SetColors { body: Rgb, gun: Rgb, radar: Rgb },
    SetBulletColor { color: Rgb },
    TurnBody {
        #[serde(serialize_with = "serialize_degrees")]
        degrees: f64,
    },
    TurnGun {
        #[serde(serialize_with = "serialize_degrees")]
        degrees: f64,
    },
    TurnRadar {
        #[serde(serialize_with = "serialize_degrees")]
        degrees: f64,
    },
    Ahead { distance: f64 },
    Back { distance: f64 },
    Fire { power: f64 },
    AdjustRadarForGunTurn { enabled: bool },
}

impl Command {
    pub fn is_movement(&self) -> bool {
        matches!(self, Command::Ahead { .. } | Command::Back { .. })
    }
}

// JSON has no infinity, so endless turns are logged as "inf" / "-inf"
fn serialize_degrees<S: Serializer>(degrees: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if degrees.is_infinite() {
        serializer.serialize_str(if *degrees > 0.0 { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endless_turns_survive_json() {
        let spin = [
            Command::TurnBody {
                degrees: f64::INFINITY,
            },
            Command::TurnGun {
                degrees: f64::NEG_INFINITY,
            },
            Command::TurnRadar { degrees: -360.0 },
        ];

        let json = serde_json::to_string(&spin).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"turn_body","degrees":"inf"},{"type":"turn_gun","degrees":"-inf"},{"type":"turn_radar","degrees":-360.0}]"#
        );
    }
}
