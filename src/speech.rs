//! Piper synthesis and playback dispatch.
//!
//! Builds the `python -m piper` invocation, feeds it the utterance on stdin,
//! and either keeps the WAV the caller asked for or plays a temporary one
//! through the configured player. Subprocess failures are fatal; the caller
//! decides whether that unwinds the whole run.

use crate::config::AppConfig;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::{env, fs, process};
use tracing::debug;

/// What a finished subprocess reported.
pub struct RunOutput {
    pub success: bool,
    pub stderr: String,
}

/// Subprocess seam so dispatch logic is testable without piper installed.
pub trait Runner {
    fn run(&mut self, argv: &[String], stdin_text: Option<&str>) -> Result<RunOutput>;
}

/// Real runner backed by `std::process::Command`.
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&mut self, argv: &[String], stdin_text: Option<&str>) -> Result<RunOutput> {
        let (program, args) = argv.split_first().context("empty command line")?;
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if stdin_text.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        let mut child = command
            .spawn()
            .with_context(|| format!("failed to spawn '{program}'"))?;
        if let Some(text) = stdin_text {
            let mut stdin = child
                .stdin
                .take()
                .with_context(|| format!("failed to open stdin of '{program}'"))?;
            stdin
                .write_all(text.as_bytes())
                .with_context(|| format!("failed to write to '{program}'"))?;
            // stdin drops here so the child sees EOF
        }
        let output = child
            .wait_with_output()
            .with_context(|| format!("failed to wait for '{program}'"))?;
        Ok(RunOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Argv for one piper synthesis run writing to `wav_path`.
///
/// The user-facing speed multiplier inverts into piper's length-scale,
/// which stretches phoneme duration.
pub fn build_piper_cmd(config: &AppConfig, wav_path: &Path) -> Vec<String> {
    vec![
        config.python_cmd.clone(),
        "-m".to_string(),
        "piper".to_string(),
        "--model".to_string(),
        config.model.display().to_string(),
        "--length-scale".to_string(),
        format!("{}", 1.0 / config.speed),
        "--volume".to_string(),
        format!("{}", config.volume),
        "--sentence-silence".to_string(),
        format!("{}", config.silence),
        "--output-file".to_string(),
        wav_path.display().to_string(),
    ]
}

fn temp_wav_path() -> PathBuf {
    env::temp_dir().join(format!("readit-{}.wav", process::id()))
}

/// Synthesize `text` and play or save it. Errors carry the subprocess stderr.
pub fn speak_text(text: &str, config: &AppConfig, runner: &mut dyn Runner) -> Result<()> {
    let wav_path = match &config.output {
        Some(path) => path.clone(),
        None => temp_wav_path(),
    };
    let piper = build_piper_cmd(config, &wav_path);
    debug!(chars = text.len(), "running piper");
    let synth = runner.run(&piper, Some(text))?;
    if !synth.success {
        bail!("piper failed: {}", synth.stderr.trim());
    }

    if let Some(path) = &config.output {
        println!("Saved to {}", path.display());
        return Ok(());
    }

    let mut player = config.player_argv()?;
    player.push(wav_path.display().to_string());
    debug!(player = %player[0], "playing synthesized audio");
    let played = runner.run(&player, None)?;
    let _ = fs::remove_file(&wav_path);
    if !played.success {
        bail!("{} failed: {}", player[0], played.stderr.trim());
    }
    Ok(())
}
