//! readit entrypoint: route text from arguments, a file, the clipboard, or
//! an interactive prompt into the piper synthesis pipeline.

use anyhow::{Context, Result};
use readit::clipboard::clipboard_text;
use readit::config::AppConfig;
use readit::init_tracing;
use readit::interactive::{interactive_loop, LineInput, StdinLineInput};
use readit::speech::{speak_text, ProcessRunner};
use std::fs;
use std::io::{self, Write};
use std::process;
use tracing::debug;

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    init_tracing(&config);
    let mut runner = ProcessRunner;

    if !config.interactive {
        if let Some(text) = resolve_text(&config)? {
            debug!(chars = text.len(), "one-shot dispatch");
            return speak_text(&text, &config, &mut runner);
        }
    }

    // No text source given, or -i requested: run the prompt. A piped stdin
    // lands here too and is drained through the buffered-input probe.
    let mut input = StdinLineInput::new();
    let mut stdout = io::stdout();
    let tty_out: Option<&mut dyn Write> = if input.is_terminal() {
        Some(&mut stdout)
    } else {
        None
    };
    let mut speak = |text: &str| speak_text(text, &config, &mut runner);
    let status = interactive_loop(&mut input, tty_out, &mut speak)?;
    process::exit(status);
}

/// One-shot text from the first available source, if any.
fn resolve_text(config: &AppConfig) -> Result<Option<String>> {
    if let Some(text) = config.positional_text() {
        return Ok(Some(text));
    }
    if let Some(path) = &config.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        return Ok(Some(text));
    }
    if config.clipboard {
        return Ok(Some(clipboard_text()?));
    }
    Ok(None)
}
