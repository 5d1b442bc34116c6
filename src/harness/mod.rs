// Host stand-ins for tests and offline replays

mod recorder;
mod script;

pub use recorder::RecordingHost;
pub use script::{load_script, run_script, ScriptedMatch, ScriptedTurn, TurnLog};
