//! Command-line argument parsing for the demo driver
//!
//! Supports:
//! - Choosing the starting value and config file
//! - Text or JSON view output
//! - Running a gesture script instead of reading stdin

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::tolerance::ToleranceValue;

/// Drive a tolerance editor from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "tolerance-editor",
    version,
    about = "Drive a slippage tolerance editor from the terminal"
)]
pub struct CliArgs {
    /// Starting tolerance as a fraction (0.0025 = 0.25%)
    #[arg(long, value_name = "FRACTION", default_value_t = 0.0025)]
    pub value: f64,

    /// Config file to use instead of the per-user one
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print each view as JSON
    #[arg(long)]
    pub json: bool,

    /// Gestures to run instead of reading stdin, separated by `;`
    #[arg(short = 'e', long = "exec", value_name = "SCRIPT")]
    pub script: Option<String>,
}

/// How views are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the driver reads gestures from
#[derive(Debug, Clone, PartialEq)]
pub enum GestureSource {
    Stdin,
    Script(Vec<Gesture>),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub initial_value: ToleranceValue,
    pub config_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub source: GestureSource,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let initial_value = ToleranceValue::new(self.value);
        if !initial_value.is_valid() {
            return Err(format!(
                "--value must be a fraction between 0 and 1, got {}",
                self.value
            ));
        }

        let source = match self.script {
            Some(script) => GestureSource::Script(parse_script(&script)?),
            None => GestureSource::Stdin,
        };

        Ok(StartupConfig {
            initial_value,
            config_path: self.config,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            source,
        })
    }
}

/// A preset named on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum PresetRef {
    /// Zero-based position in the toggle group
    Index(usize),
    /// Displayed label, compared case-insensitively
    Label(String),
}

/// One step of a driver session
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Open,
    Pick(PresetRef),
    Type(String),
    Backspace,
    Clear,
    Confirm,
    Cancel,
    /// Click away or escape
    Close,
    /// Finish the frame, running deferred focus
    Paint,
    /// The caller re-renders with a new fraction
    Value(f64),
    Show,
    Quit,
}

impl FromStr for Gesture {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let gesture = match word.to_ascii_lowercase().as_str() {
            "open" => Gesture::Open,
            "pick" => {
                if rest.is_empty() {
                    return Err("pick needs a preset label or index".to_string());
                }
                match rest.parse::<usize>() {
                    Ok(i) => Gesture::Pick(PresetRef::Index(i)),
                    Err(_) => Gesture::Pick(PresetRef::Label(rest.to_string())),
                }
            }
            "type" => Gesture::Type(rest.to_string()),
            "backspace" | "bs" => Gesture::Backspace,
            "clear" => Gesture::Clear,
            "confirm" => Gesture::Confirm,
            "cancel" => Gesture::Cancel,
            "close" | "escape" | "esc" => Gesture::Close,
            "paint" => Gesture::Paint,
            "value" => {
                let v = rest
                    .parse::<f64>()
                    .map_err(|_| format!("value needs a number, got {:?}", rest))?;
                Gesture::Value(v)
            }
            "show" | "" => Gesture::Show,
            "quit" | "exit" => Gesture::Quit,
            other => return Err(format!("unknown gesture {:?}", other)),
        };
        Ok(gesture)
    }
}

/// Split a `;`-separated script into gestures
pub fn parse_script(script: &str) -> Result<Vec<Gesture>, String> {
    script
        .split(';')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::parse)
        .collect()
}
