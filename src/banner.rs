//! Banner and ending screens
//!
//! Purely cosmetic framing around the session: a framed title at startup,
//! a divider between turns, and a farewell frame when the narrative ends.
//! Routed through `TerminalIo` so headless runs capture it too.

use colored::Colorize;

use crate::terminal_trait::{IoError, TerminalIo};

const FRAME_TOP: &str = "╔═══════════════════════════════════════════════════╗";
const FRAME_GAP: &str = "║                                                   ║";
const FRAME_BOTTOM: &str = "╚═══════════════════════════════════════════════════╝";

pub fn show_banner<T: TerminalIo>(terminal: &mut T) -> Result<(), IoError> {
    terminal.write_line(&FRAME_TOP.cyan().bold().to_string())?;
    terminal.write_line(&FRAME_GAP.cyan().bold().to_string())?;
    terminal.write_line(
        &"║            🏰  Text RPG - Ink Edition  ⚔️          ║"
            .cyan()
            .bold()
            .to_string(),
    )?;
    terminal.write_line(&FRAME_GAP.cyan().bold().to_string())?;
    terminal.write_line(&FRAME_BOTTOM.cyan().bold().to_string())?;
    terminal.write_line("")?;
    Ok(())
}

pub fn show_divider<T: TerminalIo>(terminal: &mut T) -> Result<(), IoError> {
    terminal.write_line(&"─".repeat(55).dimmed().to_string())
}

pub fn show_ending<T: TerminalIo>(terminal: &mut T) -> Result<(), IoError> {
    terminal.write_line("")?;
    show_divider(terminal)?;
    terminal.write_line("")?;
    terminal.write_line(&FRAME_TOP.yellow().bold().to_string())?;
    terminal.write_line(&FRAME_GAP.yellow().bold().to_string())?;
    terminal.write_line(
        &"║                 The story ends                    ║"
            .yellow()
            .bold()
            .to_string(),
    )?;
    terminal.write_line(&FRAME_GAP.yellow().bold().to_string())?;
    terminal.write_line(&FRAME_BOTTOM.yellow().bold().to_string())?;
    terminal.write_line("")?;
    terminal.write_line(&"Thanks for playing!".cyan().to_string())?;
    terminal.write_line("")?;
    Ok(())
}
