//! The interaction loop
//!
//! Drives the story engine one turn at a time: drain pending narrative
//! text, decorate and emit it, then either present the current choices or
//! run the ending screen. The session owns the engine and the terminal
//! for its whole life; nothing else touches either.

use colored::Colorize;
use log::{debug, info};

use crate::banner;
use crate::choice_icon;
use crate::classifier;
use crate::engine::{Choice, StoryEngine};
use crate::terminal_trait::TerminalIo;

pub struct Session<E: StoryEngine, T: TerminalIo> {
    pub engine: E,
    pub terminal: T,
}

impl<E: StoryEngine, T: TerminalIo> Session<E, T> {
    pub fn new(engine: E, terminal: T) -> Self {
        Self { engine, terminal }
    }

    /// Run the story to completion.
    ///
    /// Returns when the narrative ends, after the ending screen and after
    /// releasing the input resource exactly once. Engine faults while
    /// draining are fatal and propagate without closing the input.
    pub fn run(&mut self) -> Result<(), String> {
        self.terminal.clear_screen()?;
        banner::show_banner(&mut self.terminal)?;

        loop {
            self.drain_text()?;

            // Choices must be re-read after every drain; anything fetched
            // before the last select_choice is stale.
            if self.engine.current_choices().is_empty() {
                info!("narrative ended");
                banner::show_ending(&mut self.terminal)?;
                self.terminal.close_input()?;
                return Ok(());
            }

            let index = self.prompt_for_choice()?;
            debug!("advancing engine with choice index {index}");
            self.engine.select_choice(index)?;
        }
    }

    /// Emit all pending narrative text, classified line by line.
    ///
    /// Lines that are empty after trimming are drained but not emitted.
    fn drain_text(&mut self) -> Result<(), String> {
        while self.engine.has_more_text() {
            let text = self.engine.next_text()?;
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!("narrative line: '{trimmed}'");
            self.terminal.write_line(&classifier::classify(trimmed))?;
        }
        Ok(())
    }

    /// Render the choice menu and prompt until the input names one of its
    /// entries. Returns the 0-based index to feed the engine.
    ///
    /// An explicit loop, not recursion: bad input must never grow the
    /// stack. The choice list is re-queried on every pass instead of
    /// being held across the error path.
    fn prompt_for_choice(&mut self) -> Result<usize, String> {
        loop {
            let choices = self.engine.current_choices();
            self.render_choices(&choices)?;

            let prompt = format!("{}", "Enter a number ➤ ".bold());
            let answer = self.terminal.prompt_line(&prompt)?;

            match parse_selection(&answer, choices.len()) {
                Some(index) => {
                    self.terminal.write_line("")?;
                    banner::show_divider(&mut self.terminal)?;
                    self.terminal.write_line("")?;
                    return Ok(index);
                }
                None => {
                    debug!("invalid selection: '{answer}'");
                    let complaint = "❌ Invalid choice. Please enter one of the listed numbers.";
                    self.terminal.write_line(&format!("{}", complaint.red()))?;
                }
            }
        }
    }

    fn render_choices(&mut self, choices: &[Choice]) -> Result<(), String> {
        self.terminal.write_line("")?;
        banner::show_divider(&mut self.terminal)?;
        self.terminal
            .write_line(&format!("{}", "📋 Make your choice:".green().bold()))?;
        self.terminal.write_line("")?;
        for (i, choice) in choices.iter().enumerate() {
            let number = format!("  {}.", i + 1).cyan();
            let icon = choice_icon::icon_for(&choice.text);
            self.terminal
                .write_line(&format!("{number} {icon} {}", choice.text))?;
        }
        self.terminal.write_line("")?;
        Ok(())
    }
}

/// Translate user text into a 0-based choice index.
///
/// Valid only when the trimmed input parses as an integer in `1..=len`;
/// everything else, including `0` and negative numbers, is rejected.
fn parse_selection(answer: &str, len: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    if n >= 1 && n <= len {
        Some(n - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::parse_selection;

    #[test]
    fn accepts_the_full_one_based_range() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection("3", 3), Some(2));
        assert_eq!(parse_selection(" 2 ", 3), Some(1));
    }

    #[test]
    fn rejects_zero_overflow_and_garbage() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
        assert_eq!(parse_selection("two", 3), None);
        assert_eq!(parse_selection("", 3), None);
    }

    #[test]
    fn empty_choice_list_rejects_everything() {
        assert_eq!(parse_selection("1", 0), None);
    }
}
