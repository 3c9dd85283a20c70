//! Ordered candidate list for the active code.

/// Glyphs used to fill ranking slots left empty by `reposition`. The first
/// nine empty slots get distinct glyphs; any further slot reuses the tenth.
pub const PLACEHOLDER_GLYPHS: [&str; 10] =
    ["①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩"];

/// The in-memory ranked candidate order for the active code. Structural edits
/// happen here; pushing the result to the backend is the session's job and
/// must follow every mutation before the list is considered consistent.
#[derive(Debug, Default)]
pub struct OrderedWordList {
    code: Option<String>,
    items: Vec<String>,
}

impl OrderedWordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the list wholesale with a fresh backend read for `code`.
    pub fn replace(&mut self, code: impl Into<String>, items: Vec<String>) {
        self.code = Some(code.into());
        self.items = items;
    }

    /// Discard the list, e.g. when the code input is cleared.
    pub fn clear(&mut self) {
        self.code = None;
        self.items.clear();
    }

    /// Pop-and-reinsert: remove the element at `from` and insert it at `to`
    /// in the remaining sequence (drag-and-drop drop semantics). Out-of-range
    /// indices are ignored. Returns whether the list was mutated.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Remove the element at `index`, shifting the tail left. Out-of-range
    /// indices are ignored.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Move the word at `index` to the 1-based rank `target_position`. A
    /// target of 0 is UI shorthand for rank 10. The word's old slot becomes
    /// empty, whatever occupied the target rank is dropped (not relocated),
    /// a target beyond the current length grows the list with empty slots,
    /// and every empty slot is then filled left-to-right from
    /// `PLACEHOLDER_GLYPHS`. Lossy by design. Ranks past the current length
    /// and past the glyph set are ignored; only one placeholder set exists,
    /// so the list never grows beyond ten slots this way.
    pub fn reposition(&mut self, index: usize, target_position: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        let target = if target_position == 0 {
            9
        } else {
            target_position - 1
        };
        if target >= self.items.len().max(PLACEHOLDER_GLYPHS.len()) {
            return false;
        }

        let mut slots: Vec<Option<String>> =
            std::mem::take(&mut self.items).into_iter().map(Some).collect();
        let word = slots[index].take();
        if target >= slots.len() {
            slots.resize_with(target + 1, || None);
        }
        slots[target] = word;

        let mut empties = 0;
        self.items = slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    let glyph = PLACEHOLDER_GLYPHS[empties.min(PLACEHOLDER_GLYPHS.len() - 1)];
                    empties += 1;
                    glyph.to_string()
                })
            })
            .collect();
        true
    }
}

#[cfg(test)]
#[path = "tests/word_list_tests.rs"]
mod tests;
