//! Core terminal I/O trait for the interaction loop
//!
//! The session drives a deliberately narrow capability: line-based
//! prompting, line output, screen clearing, and input release. Anything
//! implementing this trait can host a full story session, which is how
//! the headless test backend works.

use std::fmt;

/// Line-oriented terminal capability consumed by the session.
pub trait TerminalIo {
    /// Print a prompt message and block for one line of input.
    fn prompt_line(&mut self, message: &str) -> Result<String, IoError>;

    /// Write one line of (possibly decorated) output.
    fn write_line(&mut self, line: &str) -> Result<(), IoError>;

    /// Clear the screen.
    fn clear_screen(&mut self) -> Result<(), IoError>;

    /// Release the input resource.
    ///
    /// The session calls this exactly once, on the ending path.
    fn close_input(&mut self) -> Result<(), IoError>;
}

/// Terminal I/O error type
#[derive(Debug, Clone)]
pub struct IoError {
    pub message: String,
}

impl IoError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I/O error: {}", self.message)
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(error: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

impl From<IoError> for String {
    fn from(error: IoError) -> String {
        error.message
    }
}
