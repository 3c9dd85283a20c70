//! UI/backend events and error modeling for the editor GUI controller.

use std::path::PathBuf;

pub enum UiEvent {
    Info(String),
    DictionaryLoaded {
        path: PathBuf,
    },
    /// Fresh snapshot of the candidate list for a code. An empty code means
    /// the list was discarded.
    WordList {
        code: String,
        words: Vec<String>,
    },
    /// Result of code composition for a word; empty when nothing composed.
    ComposedCode {
        word: String,
        code: String,
    },
    WordAdded {
        word: String,
        code: String,
    },
    BatchLoaded {
        total: usize,
    },
    BatchEntry {
        index: usize,
        total: usize,
        word: String,
        code: String,
        words: Vec<String>,
    },
    BatchFinished,
    BatchAtStart,
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Io,
    Duplicate,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadDictionary,
    Query,
    Compose,
    AddWord,
    Synchronize,
    Batch,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("already exists")
            || message_lower.contains("duplicate")
        {
            UiErrorCategory::Duplicate
        } else if message_lower.contains("failed to read")
            || message_lower.contains("failed to write")
            || message_lower.contains("persist dictionary")
            || message_lower.contains("no such file")
            || message_lower.contains("permission denied")
        {
            UiErrorCategory::Io
        } else if message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("no dictionary loaded")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Io => "File",
        UiErrorCategory::Duplicate => "Duplicate",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
