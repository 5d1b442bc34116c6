use super::command::Command;
use super::state::RobotStatus;

/// The battle engine, as seen from inside the robot.
///
/// Commands are queued by [`submit`](Host::submit) and take effect together
/// when [`execute`](Host::execute) ends the tick.
pub trait Host {
    /// Snapshot for the current tick.
    fn status(&self) -> &RobotStatus;

    fn submit(&mut self, command: Command);

    /// Flush queued commands and yield the tick back to the engine.
    fn execute(&mut self);
}
