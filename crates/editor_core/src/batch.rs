//! Manual review queue for bulk word import.

use shared::domain::WordEntry;

/// Result of a batch navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchStep {
    /// The cursor landed on an entry to populate into the add-word inputs.
    Entry { index: usize, entry: WordEntry },
    /// Forward navigation ran past the last entry; the cursor stays on it.
    Finished,
    /// Backward navigation ran past the first entry; the cursor stays on it.
    AtStart,
}

/// Queue of pending (word, optional code) entries with a cursor that starts
/// before the first entry. Navigation at either boundary reports the boundary
/// instead of moving.
#[derive(Debug)]
pub struct BatchAddWorkflow {
    queue: Vec<WordEntry>,
    cursor: isize,
}

impl Default for BatchAddWorkflow {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            cursor: -1,
        }
    }
}

impl BatchAddWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue from raw multi-line text, one entry per non-empty
    /// line, and rewind the cursor. Text with no usable lines is ignored and
    /// leaves the current queue untouched.
    pub fn load(&mut self, raw_text: &str) -> bool {
        let parsed: Vec<WordEntry> = raw_text.lines().filter_map(WordEntry::parse_line).collect();
        if parsed.is_empty() {
            return false;
        }
        self.queue = parsed;
        self.cursor = -1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Advance to the next entry, or report `Finished` at the end of the
    /// queue (leaving the cursor on the last entry).
    pub fn next(&mut self) -> BatchStep {
        if self.cursor + 1 < self.queue.len() as isize {
            self.cursor += 1;
            self.current_entry()
        } else {
            BatchStep::Finished
        }
    }

    /// Step back to the previous entry, or report `AtStart` at the head of
    /// the queue (leaving the cursor in place).
    pub fn previous(&mut self) -> BatchStep {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.current_entry()
        } else {
            BatchStep::AtStart
        }
    }

    fn current_entry(&self) -> BatchStep {
        let index = self.cursor as usize;
        BatchStep::Entry {
            index,
            entry: self.queue[index].clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
