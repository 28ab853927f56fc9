//! Command-line parsing and validation helpers.

mod defaults;
#[cfg(test)]
mod tests;
mod validation;

use clap::Parser;
use std::path::PathBuf;

use defaults::{DEFAULT_MODEL, DEFAULT_PLAYER_CMD, DEFAULT_PYTHON_CMD};
pub use defaults::{
    DEFAULT_SENTENCE_SILENCE, DEFAULT_SPEED, DEFAULT_VOLUME, MAX_SENTENCE_SILENCE, MAX_SPEED,
    MAX_VOLUME, MIN_SPEED,
};

/// CLI options for readit. Validated values keep the piper subprocess safe.
#[derive(Debug, Parser, Clone)]
#[command(
    about = "readit — pipe text to the piper speech synthesizer",
    author,
    version
)]
pub struct AppConfig {
    /// Text to speak (all positional words are joined with spaces)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the text to speak from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read the text to speak from the system clipboard
    #[arg(short, long, default_value_t = false)]
    pub clipboard: bool,

    /// Start an interactive prompt (default when no text source is given)
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Piper voice model path
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: PathBuf,

    /// Speech rate multiplier (1.0 = normal)
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    pub speed: f32,

    /// Output volume (1.0 = normal)
    #[arg(short, long, default_value_t = DEFAULT_VOLUME)]
    pub volume: f32,

    /// Pause between sentences, in seconds
    #[arg(long, default_value_t = DEFAULT_SENTENCE_SILENCE, allow_negative_numbers = true)]
    pub silence: f32,

    /// Save synthesized audio to a WAV file instead of playing it
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Python interpreter used to run the piper module
    #[arg(long, default_value = DEFAULT_PYTHON_CMD)]
    pub python_cmd: String,

    /// Audio player command for synthesized WAV files
    #[arg(long, default_value = DEFAULT_PLAYER_CMD)]
    pub player: String,

    /// Enable trace logging to a temp file
    #[arg(long = "logs", env = "READIT_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "READIT_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}

impl AppConfig {
    /// Joined positional text, or None when no words were given.
    pub fn positional_text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}
