use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not supported on this platform")]
    Unsupported,
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// System clipboard, kept behind a trait so commands stay OS-agnostic.
pub trait Clipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into the platform's clipboard tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let (program, args) = clipboard_command().ok_or(ClipboardError::Unsupported)?;
        pipe_to(program, args, text)?;
        tracing::debug!(event = "clipboard_set", program, bytes = text.len());
        Ok(())
    }
}

/// Run `program`, feed `text` on its stdin and wait for it to exit.
///
/// The child is always reaped, even when writing its input fails.
fn pipe_to(program: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn { program, source })?;

    // stdin is dropped before waiting so the tool sees end of input.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;

    if !status.success() {
        return Err(ClipboardError::Failed { program, status });
    }
    Ok(())
}

fn clipboard_command() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Some(("pbcopy", &[]))
    } else if cfg!(target_os = "windows") {
        Some((
            "powershell",
            &["-NoProfile", "-Command", "$input | Set-Clipboard"],
        ))
    } else if cfg!(unix) {
        Some(("xclip", &["-selection", "clipboard"]))
    } else {
        None
    }
}
