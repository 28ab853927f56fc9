//! Interactive read loop for line-at-a-time speech.
//!
//! Reads logical units of text from a line source and hands each one to a
//! speak callback. Pasted multi-line input is batched into a single utterance,
//! either via terminal bracketed-paste markers or by draining input that is
//! already buffered. Bracketed-paste reporting is enabled on entry and always
//! restored on exit, whatever path the loop leaves by.

mod stdin;

pub use stdin::StdinLineInput;

use anyhow::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use std::io::Write;
use tracing::debug;

/// Markers a terminal wraps around pasted text once bracketed-paste
/// reporting is on.
pub const PASTE_START: &str = "\x1b[200~";
pub const PASTE_END: &str = "\x1b[201~";

/// Control sequences that toggle bracketed-paste reporting.
pub const BRACKETED_PASTE_ON: &str = "\x1b[?2004h";
pub const BRACKETED_PASTE_OFF: &str = "\x1b[?2004l";

/// Words that end the interactive session instead of being spoken.
/// Matched case-insensitively after trimming surrounding whitespace.
pub const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", ":q"];

/// Result of one read from a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// One physical line, trailing newline included when present.
    Line(String),
    /// End of input.
    Eof,
    /// A SIGINT arrived while the read was blocking.
    Interrupted,
}

/// Capability set the loop needs from its input stream.
pub trait LineInput {
    fn read_line(&mut self) -> ReadLine;

    /// Whether the stream is a live terminal.
    fn is_terminal(&self) -> bool;

    /// Whether another line is already queued without blocking.
    /// `None` means the source cannot tell.
    fn has_buffered_input(&self) -> Option<bool> {
        None
    }
}

/// Guard that owns bracketed-paste mode on the terminal. Enabled at loop
/// entry, disabled exactly once on drop so the terminal is never left in
/// paste-reporting mode, including when the speak callback errors out.
struct PasteModeGuard<'a> {
    out: Option<&'a mut dyn Write>,
}

impl<'a> PasteModeGuard<'a> {
    fn enable(input_is_terminal: bool, tty_out: Option<&'a mut dyn Write>) -> Self {
        let mut out = match tty_out {
            Some(out) if input_is_terminal => out,
            _ => return Self { out: None },
        };
        if execute!(&mut out, EnableBracketedPaste).is_err() {
            return Self { out: None };
        }
        Self { out: Some(out) }
    }
}

impl Drop for PasteModeGuard<'_> {
    fn drop(&mut self) {
        if let Some(mut out) = self.out.take() {
            let _ = execute!(&mut out, DisableBracketedPaste);
        }
    }
}

fn is_quit_command(line: &str) -> bool {
    let word = line.trim();
    QUIT_COMMANDS.iter().any(|cmd| word.eq_ignore_ascii_case(cmd))
}

fn strip_newline(raw: &str) -> &str {
    raw.trim_end_matches(['\r', '\n'])
}

/// Lines gathered between paste markers, or `None` with `stop` when the
/// collection was cut short by an interrupt.
struct PasteBatch {
    utterance: Option<String>,
    stop: bool,
}

/// Collect everything between a paste-start marker and the matching end
/// marker. `first` is the remainder of the line that carried the start
/// marker. Text before the end marker is kept; both markers are stripped.
fn collect_paste(first: &str, input: &mut dyn LineInput) -> PasteBatch {
    let mut lines: Vec<String> = Vec::new();
    let mut current = first.to_string();
    loop {
        if let Some(idx) = current.find(PASTE_END) {
            lines.push(current[..idx].to_string());
            break;
        }
        lines.push(current);
        match input.read_line() {
            ReadLine::Line(raw) => current = strip_newline(&raw).to_string(),
            // Unterminated paste: flush what arrived before input ended.
            ReadLine::Eof => break,
            ReadLine::Interrupted => {
                return PasteBatch {
                    utterance: None,
                    stop: true,
                }
            }
        }
    }
    let text = lines.join("\n");
    let trimmed = text.trim();
    PasteBatch {
        utterance: if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        },
        stop: false,
    }
}

/// Drive the read-speak cycle until quit, end of input, or interrupt.
///
/// Every non-empty logical unit of text is passed to `speak`. Returns 0 on
/// all of those exits; the only error path is a failing speak callback,
/// which propagates after the terminal is restored.
pub fn interactive_loop(
    input: &mut dyn LineInput,
    tty_out: Option<&mut dyn Write>,
    speak: &mut dyn FnMut(&str) -> Result<()>,
) -> Result<i32> {
    let is_tty = input.is_terminal();
    let _paste_mode = PasteModeGuard::enable(is_tty, tty_out);
    debug!(is_tty, "entering interactive loop");

    loop {
        let raw = match input.read_line() {
            ReadLine::Line(raw) => raw,
            ReadLine::Eof => break,
            ReadLine::Interrupted => {
                debug!("interrupt during read, leaving loop");
                break;
            }
        };
        let line = strip_newline(&raw);

        // Bracketed markers win over the buffered-input probe for this cycle.
        if let Some(rest) = line.strip_prefix(PASTE_START) {
            let batch = collect_paste(rest, input);
            if let Some(text) = batch.utterance {
                speak(&text)?;
            }
            if batch.stop {
                break;
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_quit_command(trimmed) {
            debug!("quit command received");
            break;
        }

        // Candidate utterance. Drain lines the source already has queued so
        // a paste into a dumb terminal is spoken as one block.
        let mut batch = vec![trimmed.to_string()];
        let mut stop = false;
        let mut pending_paste: Option<String> = None;
        while input.has_buffered_input() == Some(true) {
            match input.read_line() {
                ReadLine::Line(raw) => {
                    let next = strip_newline(&raw);
                    if let Some(rest) = next.strip_prefix(PASTE_START) {
                        pending_paste = Some(rest.to_string());
                        break;
                    }
                    let next = next.trim();
                    if next.is_empty() {
                        continue;
                    }
                    if is_quit_command(next) {
                        stop = true;
                        break;
                    }
                    batch.push(next.to_string());
                }
                ReadLine::Eof => {
                    stop = true;
                    break;
                }
                ReadLine::Interrupted => {
                    // Nothing in the batch was spoken yet; an interrupt
                    // drops it rather than speaking after Ctrl-C.
                    batch.clear();
                    stop = true;
                    break;
                }
            }
        }
        if !batch.is_empty() {
            debug!(lines = batch.len(), "speaking batch");
            speak(&batch.join("\n"))?;
        }
        if let Some(first) = pending_paste {
            let paste = collect_paste(&first, input);
            if let Some(text) = paste.utterance {
                speak(&text)?;
            }
            if paste.stop {
                break;
            }
        }
        if stop {
            break;
        }
    }

    debug!("interactive loop finished");
    Ok(0)
}
