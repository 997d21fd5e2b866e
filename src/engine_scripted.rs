//! Scripted engine for testing and CI environments
//!
//! Plays back a fixed sequence of turns without a real narrative runtime,
//! and records every selection it is asked to make so tests can assert
//! exactly what reached the engine.

use crate::engine::{Choice, EngineError, StoryEngine};

/// One scripted decision point: the text leading up to it and the
/// branches offered once the text runs out. A turn with no choices is a
/// terminal turn.
#[derive(Debug, Clone, Default)]
pub struct Turn {
    pub lines: Vec<String>,
    pub choices: Vec<String>,
}

impl Turn {
    pub fn new(lines: &[&str], choices: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            choices: choices.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptedEngine {
    turns: Vec<Turn>,
    current: usize,
    line_pos: usize,
    /// Every index passed to `select_choice`, in order.
    pub selections: Vec<usize>,
    /// When set, the next `next_text` call fails (drain-fault injection).
    pub fail_next_text: bool,
}

impl ScriptedEngine {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self {
            turns,
            ..Default::default()
        }
    }

    fn turn(&self) -> Option<&Turn> {
        self.turns.get(self.current)
    }
}

impl StoryEngine for ScriptedEngine {
    fn has_more_text(&self) -> bool {
        self.turn().is_some_and(|t| self.line_pos < t.lines.len())
    }

    fn next_text(&mut self) -> Result<String, EngineError> {
        if self.fail_next_text {
            return Err(EngineError::new("scripted drain fault"));
        }
        let line = self
            .turn()
            .and_then(|t| t.lines.get(self.line_pos))
            .cloned()
            .ok_or_else(|| EngineError::new("next_text called with no text pending"))?;
        self.line_pos += 1;
        Ok(line)
    }

    fn current_choices(&self) -> Vec<Choice> {
        self.turn()
            .map(|t| {
                t.choices
                    .iter()
                    .map(|c| Choice { text: c.clone() })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn select_choice(&mut self, index: usize) -> Result<(), EngineError> {
        let len = self.turn().map_or(0, |t| t.choices.len());
        if index >= len {
            return Err(EngineError::new(format!(
                "choice index {index} out of range (have {len})"
            )));
        }
        self.selections.push(index);
        self.current += 1;
        self.line_pos = 0;
        Ok(())
    }
}
