//! Headless terminal implementation for testing and CI environments
//!
//! Feeds scripted input lines to the session and collects all output
//! without touching a real terminal.

use crate::terminal_trait::{IoError, TerminalIo};
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct HeadlessTerminal {
    inputs: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
    clear_count: usize,
    close_count: usize,
}

impl HeadlessTerminal {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// All lines written so far (for assertions).
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Everything written, joined for substring checks.
    pub fn output_text(&self) -> String {
        self.output.join("\n")
    }

    /// Every prompt message shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn close_count(&self) -> usize {
        self.close_count
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl TerminalIo for HeadlessTerminal {
    fn prompt_line(&mut self, message: &str) -> Result<String, IoError> {
        self.prompts.push(message.to_string());
        match self.inputs.pop_front() {
            Some(line) => {
                debug!("headless input: '{line}'");
                Ok(line)
            }
            None => Err(IoError::new("headless input exhausted")),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), IoError> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), IoError> {
        self.clear_count += 1;
        self.output.clear();
        Ok(())
    }

    fn close_input(&mut self) -> Result<(), IoError> {
        self.close_count += 1;
        Ok(())
    }
}
