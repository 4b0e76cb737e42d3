//! Command line parsing.

use std::path::PathBuf;

pub const USAGE: &str = "\
Lander - Terminal Lunar Lander

Usage: lander [options]

Options:
  --seed N       Terrain seed (random if omitted)
  --config PATH  Load settings from a JSON file
  --log PATH     Write log output to a file (filter with RUST_LOG)
  --version      Show version information
  --help         Show this help message

Controls:
  Left / a       Rotate left
  Right / d      Rotate right
  Space / Up     Thrust
  Esc / q        Quit";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub log: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Run(RunOptions),
}

/// Parse arguments, excluding the program name. `--help` and `--version`
/// win over anything else on the line.
pub fn parse<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(value));
            }
            "--log" => {
                let value = args.next().ok_or("--log needs a path")?;
                options.log = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}
