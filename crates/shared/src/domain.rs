use serde::{Deserialize, Serialize};

/// A word queued for insertion into the dictionary. `code` is `None` when the
/// code should be computed by composition at review time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub code: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, code: Option<String>) -> Self {
        Self {
            word: word.into(),
            code,
        }
    }

    /// Parse a single batch-input line: the first whitespace run separates the
    /// word from an optional explicit code. Returns `None` for blank lines.
    pub fn parse_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => Some(Self::new(word, Some(rest.trim().to_string()))),
            None => Some(Self::new(trimmed, None)),
        }
    }
}
