//! Narrative line classification
//!
//! Maps a raw story line to a decorated display line. The rules are an
//! ordered list of keyword tests; the first match wins and unmatched
//! lines get a neutral indent, so the function is total. Every decorated
//! line carries its own color reset, so styling never bleeds into the
//! next line.

use colored::Colorize;

/// Decorate one trimmed narrative line for display.
pub fn classify(line: &str) -> String {
    let lower = line.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if matches(&["hp:", "gold:"]) {
        return format!("📊 {line}").yellow().to_string();
    }
    if matches(&["dragon"]) {
        return format!("🐉 {line}").red().bold().to_string();
    }
    if matches(&["game over"]) {
        return format!("💀 {line}").red().bold().to_string();
    }
    if matches(&["congratulations"]) {
        return format!("🎉 {line}").green().bold().to_string();
    }
    if matches(&["castle", "town", "inn", "shop", "armory"]) {
        return format!("📍 {line}").cyan().to_string();
    }
    if matches(&["battle", "fight"]) {
        return format!("⚔️  {line}").red().to_string();
    }
    if matches(&["key", "sword", "treasure"]) {
        return format!("✨ {line}").magenta().to_string();
    }

    format!("   {line}")
}
