//! Command-line parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Config;
use crate::style::ColorMode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("option '{0}' requires a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for '{flag}': expected {expected}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// What the invocation asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

/// Flags that override the config file. `None` means "not given".
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub max: Option<u64>,
    pub color: Option<ColorMode>,
    pub journal: Option<PathBuf>,
}

impl Options {
    /// Layer the flags over a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(max) = self.max {
            config.sequence.max = max;
        }
        if let Some(color) = self.color {
            config.output.color = color;
        }
        if let Some(ref path) = self.journal {
            config.journal.enabled = true;
            config.journal.path = Some(path.to_string_lossy().into_owned());
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--max" | "-n" => {
                let value = take_value(inline, &mut args, "--max")?;
                let max = value.parse::<u64>().map_err(|_| ArgError::InvalidValue {
                    flag: "--max",
                    value,
                    expected: "a non-negative integer",
                })?;
                opts.max = Some(max);
            }
            "--color" => {
                let value = take_value(inline, &mut args, "--color")?;
                let color = value.parse::<ColorMode>().map_err(|_| ArgError::InvalidValue {
                    flag: "--color",
                    value,
                    expected: "auto, always or never",
                })?;
                opts.color = Some(color);
            }
            "--journal" => {
                let value = take_value(inline, &mut args, "--journal")?;
                opts.journal = Some(PathBuf::from(value));
            }
            f if f.starts_with('-') && f.len() > 1 => {
                return Err(ArgError::UnknownFlag(arg));
            }
            _ => return Err(ArgError::UnexpectedArgument(arg)),
        }
    }

    Ok(Command::Run(opts))
}

fn take_value(
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgError> {
    match inline.or_else(|| rest.next()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ArgError::MissingValue(flag)),
    }
}

pub fn help_text() -> String {
    let mut s = String::new();
    s.push_str("fizzbuzz — print the FizzBuzz sequence\n");
    s.push('\n');
    s.push_str("Usage:\n");
    s.push_str("  fizzbuzz [OPTIONS]\n");
    s.push('\n');
    s.push_str("Prints 1 to 100, with Fizz for multiples of 3, Buzz for multiples\n");
    s.push_str("of 5 and FizzBuzz for multiples of both.\n");
    s.push('\n');
    s.push_str("Options:\n");
    s.push_str("  -n, --max <N>       Print 1 to N instead of 1 to 100\n");
    s.push_str("  --color <WHEN>      Color the words: auto, always, never\n");
    s.push_str("  --journal <PATH>    Append a JSONL record of the run to PATH\n");
    s.push_str("  -V, --version       Print version\n");
    s.push_str("  -h, --help          Print this help\n");
    s
}
