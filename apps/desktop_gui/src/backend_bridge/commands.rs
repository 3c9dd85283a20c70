//! Backend commands queued from UI to backend worker.

use std::path::PathBuf;

pub enum BackendCommand {
    LoadDictionary {
        dict_path: PathBuf,
        char_map_path: Option<PathBuf>,
    },
    SetActiveCode {
        code: String,
    },
    MoveWord {
        old_index: usize,
        new_index: usize,
    },
    DeleteWordAt {
        index: usize,
    },
    RepositionWord {
        index: usize,
        target_position: usize,
    },
    ComposeCode {
        word: String,
    },
    AddWord {
        word: String,
        code: String,
    },
    LoadBatch {
        raw_text: String,
    },
    BatchNext,
    BatchPrevious,
}
