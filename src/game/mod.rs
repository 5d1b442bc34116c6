pub mod command;
pub mod events;
pub mod host;
pub mod state;

pub use command::{Command, Rgb};
pub use events::{BulletHitEvent, HitRobotEvent, RobotEvent, ScannedRobotEvent};
pub use host::Host;
pub use state::{MatchState, OpponentEnergyHistory, Orientation, RobotStatus};
