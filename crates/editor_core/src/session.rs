//! Editing session: ties the ordered word list and the batch workflow to the
//! backend, and owns the active dictionary path and active code.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context, Result};

use crate::{
    backend::DictBackend,
    batch::{BatchAddWorkflow, BatchStep},
    word_list::OrderedWordList,
};

/// What a batch navigation step produced, ready for the add-word inputs. For
/// entries without an explicit code the code has already been composed (empty
/// string when composition failed), and `words` is the refreshed candidate
/// list for that code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Entry {
        index: usize,
        total: usize,
        word: String,
        code: String,
        words: Vec<String>,
    },
    Finished,
    AtStart,
}

pub struct EditorSession {
    backend: Arc<dyn DictBackend>,
    dict_path: Option<PathBuf>,
    word_list: OrderedWordList,
    batch: BatchAddWorkflow,
}

impl EditorSession {
    pub fn new(backend: Arc<dyn DictBackend>) -> Self {
        Self {
            backend,
            dict_path: None,
            word_list: OrderedWordList::new(),
            batch: BatchAddWorkflow::new(),
        }
    }

    pub fn dict_path(&self) -> Option<&Path> {
        self.dict_path.as_deref()
    }

    pub fn active_code(&self) -> Option<&str> {
        self.word_list.code()
    }

    pub fn words(&self) -> &[String] {
        self.word_list.items()
    }

    /// Load (or reload) the dictionary and remember its path as the target of
    /// every later persist. The path is only adopted on success.
    pub async fn load_dictionary(
        &mut self,
        dict_path: PathBuf,
        char_map_path: Option<&Path>,
    ) -> Result<()> {
        self.backend.load_file(&dict_path, char_map_path).await?;
        tracing::info!(path = %dict_path.display(), "dictionary loaded");
        self.dict_path = Some(dict_path);
        self.word_list.clear();
        Ok(())
    }

    /// Make `code` the active code and fetch its candidates. An empty code
    /// discards the list. Safe to call repeatedly; the list is replaced
    /// wholesale each time.
    pub async fn set_active_code(&mut self, code: &str) -> Result<Vec<String>> {
        if code.is_empty() {
            self.word_list.clear();
            return Ok(Vec::new());
        }
        let words = self.backend.query_words(code).await?;
        self.word_list.replace(code, words);
        Ok(self.word_list.items().to_vec())
    }

    /// Drag-to-reorder: pop the word at `from` and reinsert it at `to`, then
    /// synchronize. Out-of-range indices are ignored.
    pub async fn move_word(&mut self, from: usize, to: usize) -> Result<Vec<String>> {
        if self.word_list.move_entry(from, to) {
            self.synchronize().await?;
        }
        Ok(self.word_list.items().to_vec())
    }

    /// Delete the word at `index`, then synchronize.
    pub async fn delete_word_at(&mut self, index: usize) -> Result<Vec<String>> {
        if self.word_list.delete_at(index) {
            self.synchronize().await?;
        }
        Ok(self.word_list.items().to_vec())
    }

    /// Force the word at `index` to a 1-based rank (0 means rank 10), then
    /// synchronize. Evicted words are replaced by placeholder glyphs, not
    /// relocated.
    pub async fn reposition_word(
        &mut self,
        index: usize,
        target_position: usize,
    ) -> Result<Vec<String>> {
        if self.word_list.reposition(index, target_position) {
            self.synchronize().await?;
        }
        Ok(self.word_list.items().to_vec())
    }

    /// Add a word under a code and persist immediately. If the active code is
    /// the one just extended, the returned refresh keeps the visible list in
    /// step.
    pub async fn add_word(&mut self, word: &str, code: &str) -> Result<Vec<String>> {
        self.backend.add_word(word, code).await?;
        let path = self.require_dict_path()?.to_path_buf();
        self.backend.write_to_file(&path).await?;
        if self.word_list.code() == Some(code) {
            let words = self.backend.query_words(code).await?;
            self.word_list.replace(code, words);
        }
        Ok(self.word_list.items().to_vec())
    }

    pub async fn compose_code(&self, word: &str) -> Result<Option<String>> {
        self.backend.compose_code(word).await
    }

    /// Replace the batch queue from raw text. Returns false (and changes
    /// nothing) when the text has no usable lines.
    pub fn load_batch(&mut self, raw_text: &str) -> bool {
        self.batch.load(raw_text)
    }

    pub fn batch_len(&self) -> usize {
        self.batch.len()
    }

    pub async fn batch_next(&mut self) -> Result<BatchOutcome> {
        let step = self.batch.next();
        self.populate_batch_step(step).await
    }

    pub async fn batch_previous(&mut self) -> Result<BatchOutcome> {
        let step = self.batch.previous();
        self.populate_batch_step(step).await
    }

    /// Entry population: an explicit code is used directly, otherwise the
    /// code is composed (empty string when composition yields nothing), and
    /// the candidate list is refreshed for the resulting code either way.
    async fn populate_batch_step(&mut self, step: BatchStep) -> Result<BatchOutcome> {
        let (index, entry) = match step {
            BatchStep::Finished => return Ok(BatchOutcome::Finished),
            BatchStep::AtStart => return Ok(BatchOutcome::AtStart),
            BatchStep::Entry { index, entry } => (index, entry),
        };

        let code = match entry.code {
            Some(code) => code,
            None => self
                .backend
                .compose_code(&entry.word)
                .await?
                .unwrap_or_default(),
        };
        let words = self.set_active_code(&code).await?;
        Ok(BatchOutcome::Entry {
            index,
            total: self.batch.len(),
            word: entry.word,
            code,
            words,
        })
    }

    /// Push the local order to the backend, then persist the dictionary to
    /// the active file. Strictly sequenced; a failure propagates without
    /// rolling back the in-memory list, and the next successful
    /// `set_active_code` is the only reconciliation.
    async fn synchronize(&self) -> Result<()> {
        let code = self
            .word_list
            .code()
            .ok_or_else(|| anyhow!("no active code to synchronize"))?
            .to_string();
        let path = self.require_dict_path()?.to_path_buf();

        self.backend
            .update_words(&code, self.word_list.items().to_vec())
            .await
            .with_context(|| format!("update stored order for code '{code}'"))?;
        self.backend
            .write_to_file(&path)
            .await
            .with_context(|| format!("persist dictionary to '{}'", path.display()))?;
        tracing::debug!(code = %code, words = self.word_list.items().len(), "order synchronized");
        Ok(())
    }

    fn require_dict_path(&self) -> Result<&Path> {
        self.dict_path
            .as_deref()
            .ok_or_else(|| anyhow!("no dictionary file loaded"))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
