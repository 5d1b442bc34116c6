use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use wrathbot::ai::create_bot;
use wrathbot::config::{self, Config};
use wrathbot::debug;
use wrathbot::harness::{load_script, run_script};

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Mode {
    Replay { script: PathBuf },
    InitConfig,
    Help,
}

#[derive(Debug, PartialEq)]
struct Args {
    mode: Mode,
    config: Option<PathBuf>,
    debug: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("wrathbot");
    let parsed = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    debug::init(parsed.debug)?;

    match parsed.mode {
        Mode::Help => {
            print_usage(program);
            Ok(())
        }
        Mode::InitConfig => {
            let path = parsed.config.unwrap_or_else(config::get_config_path);
            config::create_default_config(&path)?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
        Mode::Replay { script } => replay(&script, parsed.config),
    }
}

fn replay(script_path: &Path, config_path: Option<PathBuf>) -> Result<()> {
    let mut config: Config = match config_path {
        Some(path) => config::load_config_from(&path)?,
        None => config::load_config()?,
    };

    let script = load_script(script_path)?;
    if script.seed.is_some() {
        config.movement.seed = script.seed;
    }

    let mut bot = create_bot(config).context("invalid configuration")?;
    let logs = run_script(bot.as_mut(), &script)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for log in &logs {
        serde_json::to_writer(&mut out, log)?;
        writeln!(out)?;
    }
    info!(turns = logs.len(), "replay finished");
    Ok(())
}

/// Parse everything after the program name
fn parse_args(args: &[String]) -> Result<Args> {
    let mut mode = None;
    let mut config = None;
    let mut debug = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => debug = true,
            "--config" | "-c" => {
                let path = iter.next().context("--config requires a path")?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => mode = Some(Mode::Help),
            "init-config" => mode = Some(Mode::InitConfig),
            "replay" => {
                let script = iter.next().context("replay requires a script path")?;
                mode = Some(Mode::Replay {
                    script: PathBuf::from(script),
                });
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(Args {
        mode: mode.unwrap_or(Mode::Help),
        config,
        debug,
    })
}

fn print_usage(program: &str) {
    println!("WrathBot - reactive arena robot controller");
    println!();
    println!("Usage:");
    println!(
        "  {} replay <script.json>          # Replay a scripted match, one JSON line per turn",
        program
    );
    println!(
        "  {} init-config                   # Write the default config file",
        program
    );
    println!();
    println!("Options:");
    println!("  -c, --config <path>   Use this config file instead of the default location");
    println!("  -d, --debug           Write debug logs to {}", debug::log_file_path().display());
    println!("  -h, --help            Show this message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_shows_help() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed.mode, Mode::Help);
        assert!(!parsed.debug);
    }

    #[test]
    fn test_replay_with_options() {
        let parsed = parse_args(&args(&[
            "--debug",
            "replay",
            "match.json",
            "--config",
            "tuned.toml",
        ]))
        .unwrap();

        assert_eq!(
            parsed,
            Args {
                mode: Mode::Replay {
                    script: PathBuf::from("match.json")
                },
                config: Some(PathBuf::from("tuned.toml")),
                debug: true,
            }
        );
    }

    #[test]
    fn test_missing_values_are_errors() {
        assert!(parse_args(&args(&["replay"])).is_err());
        assert!(parse_args(&args(&["init-config", "--config"])).is_err());
        assert!(parse_args(&args(&["--listen"])).is_err());
    }
}
