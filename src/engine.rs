//! Story engine contract consumed by the session loop
//!
//! The engine is an opaque collaborator: it owns the compiled narrative
//! state, and the session only ever talks to it through these four
//! operations.

use std::fmt;

/// One selectable branch option offered by the engine at a decision point.
///
/// A choice is only valid until the next `select_choice` call. Callers
/// must re-fetch the sequence instead of caching it across a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
}

/// Interface to the story interpreter.
pub trait StoryEngine {
    /// True while the engine still has narrative text to emit.
    fn has_more_text(&self) -> bool;

    /// Produce the next text unit and advance the internal position.
    ///
    /// Must not be called when `has_more_text()` is false.
    fn next_text(&mut self) -> Result<String, EngineError>;

    /// The current ordered choice sequence. Returns a fresh vector on
    /// every call.
    fn current_choices(&self) -> Vec<Choice>;

    /// Advance the narrative down the given 0-based branch.
    ///
    /// Errors if the index is out of range; the session's own validation
    /// keeps that call from ever being made.
    fn select_choice(&mut self, index: usize) -> Result<(), EngineError>;
}

/// Engine error type
#[derive(Debug, Clone)]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Engine error: {}", self.message)
    }
}

impl std::error::Error for EngineError {}

impl From<EngineError> for String {
    fn from(error: EngineError) -> String {
        error.message
    }
}
