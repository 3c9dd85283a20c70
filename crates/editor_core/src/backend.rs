//! Asynchronous command interface to the dictionary engine, plus the local
//! in-process implementation over `dict_store`.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use dict_store::Dictionary;
use shared::error::DictError;
use tokio::sync::RwLock;

/// Dictionary commands the editor core issues. File picking and launch
/// arguments stay on the application side.
#[async_trait]
pub trait DictBackend: Send + Sync {
    /// Ordered candidate words for a code. Unknown codes yield an empty list.
    async fn query_words(&self, code: &str) -> Result<Vec<String>>;
    /// Compose the full code for a word, `None` when composition is not
    /// possible.
    async fn compose_code(&self, word: &str) -> Result<Option<String>>;
    /// Append a word under a code; duplicates are an error.
    async fn add_word(&self, word: &str, code: &str) -> Result<()>;
    /// Replace the stored candidate order for a code wholesale.
    async fn update_words(&self, code: &str, words: Vec<String>) -> Result<()>;
    /// Persist the in-memory dictionary to a file.
    async fn write_to_file(&self, path: &Path) -> Result<()>;
    /// Load (or reload) the dictionary, optionally with a char-map file.
    async fn load_file(&self, dict_path: &Path, char_map_path: Option<&Path>) -> Result<()>;
}

/// In-process backend holding the loaded dictionary behind a lock. Commands
/// before the first successful `load_file` fail with `DictError::NotLoaded`.
#[derive(Default)]
pub struct LocalDictBackend {
    dict: RwLock<Option<Dictionary>>,
}

impl LocalDictBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DictBackend for LocalDictBackend {
    async fn query_words(&self, code: &str) -> Result<Vec<String>> {
        let guard = self.dict.read().await;
        let dict = guard.as_ref().ok_or(DictError::NotLoaded)?;
        Ok(dict.query(code))
    }

    async fn compose_code(&self, word: &str) -> Result<Option<String>> {
        let guard = self.dict.read().await;
        let dict = guard.as_ref().ok_or(DictError::NotLoaded)?;
        Ok(dict.compose(word))
    }

    async fn add_word(&self, word: &str, code: &str) -> Result<()> {
        let mut guard = self.dict.write().await;
        let dict = guard.as_mut().ok_or(DictError::NotLoaded)?;
        dict.add_word(word, code)?;
        Ok(())
    }

    async fn update_words(&self, code: &str, words: Vec<String>) -> Result<()> {
        let mut guard = self.dict.write().await;
        let dict = guard.as_mut().ok_or(DictError::NotLoaded)?;
        dict.update_words(code, words);
        Ok(())
    }

    async fn write_to_file(&self, path: &Path) -> Result<()> {
        let guard = self.dict.read().await;
        let dict = guard.as_ref().ok_or(DictError::NotLoaded)?;
        dict.write_to(path)
            .with_context(|| format!("persist dictionary to '{}'", path.display()))
    }

    async fn load_file(&self, dict_path: &Path, char_map_path: Option<&Path>) -> Result<()> {
        let dict = Dictionary::load(dict_path, char_map_path)
            .with_context(|| format!("load dictionary from '{}'", dict_path.display()))?;
        self.dict.write().await.replace(dict);
        Ok(())
    }
}
