// Scripted matches: canned turn snapshots replayed through a bot

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::recorder::RecordingHost;
use crate::ai::{play_turn, Bot};
use crate::game::{Command, Host, RobotEvent, RobotStatus};

/// One round of recorded host input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedMatch {
    #[serde(default)]
    pub name: String,
    /// Overrides the movement seed from configuration
    #[serde(default)]
    pub seed: Option<u64>,
    pub turns: Vec<ScriptedTurn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedTurn {
    /// Snapshot for this tick; the previous one is reused when absent
    #[serde(default)]
    pub status: Option<RobotStatus>,
    #[serde(default)]
    pub events: Vec<RobotEvent>,
}

/// Commands the bot flushed during one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnLog {
    pub turn: usize,
    pub time: u64,
    pub commands: Vec<Command>,
}

pub fn load_script(path: &Path) -> Result<ScriptedMatch> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Play the script through `bot`. Round setup is logged as turn 0.
pub fn run_script(bot: &mut dyn Bot, script: &ScriptedMatch) -> Result<Vec<TurnLog>> {
    let initial = script
        .turns
        .first()
        .and_then(|turn| turn.status)
        .unwrap_or_default();
    let mut host = RecordingHost::new(initial);

    info!(script = %script.name, bot = bot.name(), turns = script.turns.len(), "replay");
    bot.on_round_start(&mut host)
        .with_context(|| format!("starting round for {}", bot.name()))?;
    host.execute();

    for turn in &script.turns {
        if let Some(status) = turn.status {
            host.set_status(status);
        }
        play_turn(bot, &mut host, &turn.events);
    }

    let mut time = initial.time;
    let logs = host
        .take_executed()
        .into_iter()
        .enumerate()
        .map(|(turn, commands)| {
            if let Some(status) = turn
                .checked_sub(1)
                .and_then(|i| script.turns.get(i))
                .and_then(|t| t.status)
            {
                time = status.time;
            }
            TurnLog {
                turn,
                time,
                commands,
            }
        })
        .collect();
    Ok(logs)
}
