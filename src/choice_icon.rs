//! Choice iconography
//!
//! Same ordered first-match contract as the line classifier, with an
//! independent rule set. Returns a short icon for a choice's display
//! text; the default is a plain forward marker.

/// Icon for one choice, derived from its text.
pub fn icon_for(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if matches(&["fight", "attack"]) {
        return "⚔️";
    }
    if matches(&["flee", "run"]) {
        return "🏃";
    }
    if matches(&["enter", "head"]) {
        return "🚪";
    }
    if matches(&["back", "return"]) {
        return "↩️";
    }
    if matches(&["rest", "inn"]) {
        return "🛏️";
    }
    if matches(&["buy", "shop"]) {
        return "🛒";
    }
    if matches(&["leave"]) {
        return "👋";
    }
    if matches(&["left"]) {
        return "⬅️";
    }
    if matches(&["right"]) {
        return "➡️";
    }
    if matches(&["outside"]) {
        return "🚪";
    }
    "➤"
}
