//! Ink runtime adapter
//!
//! Wraps the `bladeink` port of inkle's Ink runtime behind the
//! `StoryEngine` trait so the session never sees the runtime's own types.

use crate::engine::{Choice, EngineError, StoryEngine};
use bladeink::story::Story;
use log::debug;

/// A compiled Ink story behind the engine contract.
pub struct InkEngine {
    story: Story,
}

impl InkEngine {
    /// Build an engine from the contents of a compiled `.ink.json` file.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let story = Story::new(json)
            .map_err(|e| EngineError::new(format!("failed to load compiled story: {e}")))?;
        debug!("ink story loaded");
        Ok(Self { story })
    }
}

impl StoryEngine for InkEngine {
    fn has_more_text(&self) -> bool {
        self.story.can_continue()
    }

    fn next_text(&mut self) -> Result<String, EngineError> {
        self.story
            .cont()
            .map_err(|e| EngineError::new(format!("story advance failed: {e}")))
    }

    fn current_choices(&self) -> Vec<Choice> {
        self.story
            .get_current_choices()
            .iter()
            .map(|c| Choice {
                text: c.text.clone(),
            })
            .collect()
    }

    fn select_choice(&mut self, index: usize) -> Result<(), EngineError> {
        self.story
            .choose_choice_index(index)
            .map_err(|e| EngineError::new(format!("choice {index} rejected: {e}")))
    }
}
