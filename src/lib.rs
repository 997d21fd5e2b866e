//! inkslinger - a terminal player for compiled Ink stories
//!
//! The session loop drives an opaque story engine one turn at a time:
//! drain pending narrative text, decorate it, present the current choices
//! as a numbered menu, feed the selection back in, repeat until the story
//! ends. Both the engine and the terminal sit behind narrow traits so the
//! whole loop can be exercised headlessly in tests.

pub mod banner;
pub mod choice_icon;
pub mod classifier;
pub mod engine;
pub mod engine_ink;
pub mod engine_scripted;
pub mod session;
pub mod story_file;
pub mod terminal_crossterm;
pub mod terminal_headless;
pub mod terminal_trait;
