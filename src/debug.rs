// Logging setup for WrathBot
// Routes tracing output to a file when the --debug flag is given

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Where `--debug` logs end up
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("wrathbot-debug.log")
}

/// Install the global tracing subscriber
///
/// # Behavior
/// - enabled=false: warnings and above to stderr, overridable with `RUST_LOG`
/// - enabled=true: truncates the log file, writes a header, and sends
///   everything at debug and above there (no ANSI colors)
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("installing tracing subscriber: {}", e));
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    writeln!(file, "=== WrathBot Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {}", e))
}
