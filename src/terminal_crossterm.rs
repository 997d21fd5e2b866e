//! Interactive terminal backend over stdin/stdout
//!
//! Plain line-discipline I/O: no raw mode, no alternate screen. The only
//! crossterm usage is screen clearing, and that is skipped when stdout is
//! not a tty so piped output stays clean.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use log::debug;
use std::io::{self, BufRead, Stdout, Write};

use crate::terminal_trait::{IoError, TerminalIo};

/// Environment capabilities that shape terminal behavior
#[derive(Debug)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub has_color: bool,
    pub is_interactive: bool,
}

impl TerminalCapabilities {
    /// Detect current environment capabilities
    pub fn detect() -> Self {
        Self {
            is_tty: atty::is(atty::Stream::Stdout),
            has_color: std::env::var("COLORTERM").is_ok()
                || std::env::var("TERM").map_or(false, |t| t.contains("color")),
            is_interactive: atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout),
        }
    }
}

/// Real terminal backend.
pub struct CrosstermTerminal {
    stdout: Stdout,
    /// Present until `close_input` releases it.
    input: Option<io::StdinLock<'static>>,
    caps: TerminalCapabilities,
}

impl CrosstermTerminal {
    pub fn new() -> Result<Self, IoError> {
        let caps = TerminalCapabilities::detect();
        debug!("terminal capabilities: {caps:?}");
        if !caps.is_tty || !caps.has_color {
            colored::control::set_override(false);
        }
        Ok(Self {
            stdout: io::stdout(),
            input: Some(io::stdin().lock()),
            caps,
        })
    }
}

impl TerminalIo for CrosstermTerminal {
    fn prompt_line(&mut self, message: &str) -> Result<String, IoError> {
        write!(self.stdout, "{message}")?;
        self.stdout.flush()?;

        let input = self
            .input
            .as_mut()
            .ok_or_else(|| IoError::new("input already closed"))?;
        let mut buffer = String::new();
        let bytes_read = input.read_line(&mut buffer)?;

        // EOF: stdin closed or pipe exhausted. Without this check the
        // prompt would spin forever on empty reads.
        if bytes_read == 0 {
            debug!("prompt: EOF detected (stdin closed)");
            return Err(IoError::new("EOF: no more input available"));
        }

        // Remove trailing newline
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        debug!("prompt input received: '{buffer}'");
        Ok(buffer)
    }

    fn write_line(&mut self, line: &str) -> Result<(), IoError> {
        writeln!(self.stdout, "{line}")?;
        self.stdout.flush()?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), IoError> {
        if !self.caps.is_tty {
            debug!("clear_screen skipped (stdout is not a tty)");
            return Ok(());
        }
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|e| IoError::new(format!("failed to clear screen: {e}")))?;
        Ok(())
    }

    fn close_input(&mut self) -> Result<(), IoError> {
        match self.input.take() {
            Some(lock) => {
                drop(lock);
                debug!("input stream released");
            }
            None => {
                debug!("close_input called twice; ignoring");
            }
        }
        Ok(())
    }
}
