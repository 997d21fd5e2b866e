//! Compiled story loading
//!
//! The engine consumes the contents of a compiled `.ink.json` file.
//! inklecate writes these with a UTF-8 byte order mark, which the JSON
//! reader rejects, so the marker is stripped before the text is handed
//! over.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Read a compiled story file, stripping a leading byte order mark.
pub fn load_story_json(path: &Path) -> io::Result<String> {
    let raw = fs::read_to_string(path)?;
    let json = strip_bom(&raw);
    debug!("loaded story file {} ({} bytes)", path.display(), json.len());
    Ok(json.to_string())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::strip_bom;

    #[test]
    fn strips_leading_bom() {
        assert_eq!(strip_bom("\u{feff}{\"inkVersion\":21}"), "{\"inkVersion\":21}");
    }

    #[test]
    fn leaves_clean_text_alone() {
        assert_eq!(strip_bom("{\"inkVersion\":21}"), "{\"inkVersion\":21}");
    }

    #[test]
    fn only_strips_the_first_marker() {
        assert_eq!(strip_bom("\u{feff}\u{feff}x"), "\u{feff}x");
    }
}
