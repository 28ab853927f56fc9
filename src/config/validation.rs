use super::defaults::{MAX_SENTENCE_SILENCE, MAX_SPEED, MAX_VOLUME, MIN_SPEED};
use super::AppConfig;
use anyhow::{bail, Context, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values before they reach the piper subprocess.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            bail!(
                "--speed must be between {MIN_SPEED} and {MAX_SPEED}, got {}",
                self.speed
            );
        }
        if self.volume <= 0.0 || self.volume > MAX_VOLUME {
            bail!(
                "--volume must be greater than 0 and at most {MAX_VOLUME}, got {}",
                self.volume
            );
        }
        if !(0.0..=MAX_SENTENCE_SILENCE).contains(&self.silence) {
            bail!(
                "--silence must be between 0.0 and {MAX_SENTENCE_SILENCE} seconds, got {}",
                self.silence
            );
        }

        let mut sources = 0;
        if !self.text.is_empty() {
            sources += 1;
        }
        if self.file.is_some() {
            sources += 1;
        }
        if self.clipboard {
            sources += 1;
        }
        if sources > 1 {
            bail!("give at most one text source: positional TEXT, --file, or --clipboard");
        }

        if let Some(file) = &self.file {
            if !file.is_file() {
                bail!("--file '{}' does not exist or is not a file", file.display());
            }
        }

        let player_argv = shell_words::split(&self.player)
            .with_context(|| format!("failed to parse --player '{}'", self.player))?;
        if player_argv.is_empty() {
            bail!("--player cannot be empty");
        }
        if self.python_cmd.trim().is_empty() {
            bail!("--python-cmd cannot be empty");
        }

        Ok(())
    }

    /// The player command split into argv words. Call after `validate`.
    pub fn player_argv(&self) -> Result<Vec<String>> {
        let argv = shell_words::split(&self.player)
            .with_context(|| format!("failed to parse --player '{}'", self.player))?;
        if argv.is_empty() {
            bail!("--player cannot be empty");
        }
        Ok(argv)
    }
}
