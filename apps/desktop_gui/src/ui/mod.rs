//! UI layer for the editor GUI: app shell and panels.

pub mod app;

pub use app::{DictEditorApp, SETTINGS_STORAGE_KEY};
