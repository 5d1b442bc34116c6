// In-memory host that records every command batch

use crate::game::{Command, Host, RobotStatus};

/// A [`Host`] with no physics: the caller sets the status for each tick and
/// reads back what the robot asked for.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    status: RobotStatus,
    pending: Vec<Command>,
    executed: Vec<Vec<Command>>,
}

impl RecordingHost {
    pub fn new(status: RobotStatus) -> Self {
        Self {
            status,
            pending: Vec::new(),
            executed: Vec::new(),
        }
    }

    /// Replace the snapshot the robot will see next.
    pub fn set_status(&mut self, status: RobotStatus) {
        self.status = status;
    }

    /// Commands submitted since the last `execute`.
    pub fn pending(&self) -> &[Command] {
        &self.pending
    }

    /// One entry per `execute` call, oldest first.
    pub fn executed(&self) -> &[Vec<Command>] {
        &self.executed
    }

    pub fn last_batch(&self) -> Option<&[Command]> {
        self.executed.last().map(Vec::as_slice)
    }

    pub fn take_executed(&mut self) -> Vec<Vec<Command>> {
        std::mem::take(&mut self.executed)
    }
}

impl Host for RecordingHost {
    fn status(&self) -> &RobotStatus {
        &self.status
    }

    fn submit(&mut self, command: Command) {
        self.pending.push(command);
    }

    fn execute(&mut self) {
        let batch = std::mem::take(&mut self.pending);
        self.executed.push(batch);
    }
}
