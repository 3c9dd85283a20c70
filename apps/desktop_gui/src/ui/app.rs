use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

pub const SETTINGS_STORAGE_KEY: &str = "dict_editor_settings";

/// Last-used file paths, restored on the next launch unless launch arguments
/// override them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedEditorSettings {
    pub dict_path: Option<String>,
    pub char_map_path: Option<String>,
}

struct RepositionPrompt {
    index: usize,
    word: String,
    input: String,
}

struct DragState {
    from: usize,
    target: Option<usize>,
}

pub struct DictEditorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    status: String,
    dict_path_input: String,
    char_map_path_input: String,
    loading: bool,
    loaded: bool,

    word_input: String,
    code_input: String,
    words: Vec<String>,
    drag: Option<DragState>,
    reposition_prompt: Option<RepositionPrompt>,

    batch_text: String,
    batch_total: Option<usize>,
    batch_position: Option<usize>,
}

impl DictEditorApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        launch_dict_path: Option<PathBuf>,
        launch_char_map_path: Option<PathBuf>,
        persisted: Option<PersistedEditorSettings>,
    ) -> Self {
        let persisted = persisted.unwrap_or_default();
        let dict_path_input = launch_dict_path
            .map(|p| p.display().to_string())
            .or(persisted.dict_path)
            .unwrap_or_default();
        let char_map_path_input = launch_char_map_path
            .map(|p| p.display().to_string())
            .or(persisted.char_map_path)
            .unwrap_or_default();

        Self {
            cmd_tx,
            ui_rx,
            status: "Pick a dictionary file and press Load".to_string(),
            dict_path_input,
            char_map_path_input,
            loading: false,
            loaded: false,
            word_input: String::new(),
            code_input: String::new(),
            words: Vec::new(),
            drag: None,
            reposition_prompt: None,
            batch_text: String::new(),
            batch_total: None,
            batch_position: None,
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::DictionaryLoaded { path } => {
                    self.loading = false;
                    self.loaded = true;
                    self.status = format!("Loaded {}", path.display());
                    // Reloading invalidates whatever list was on screen.
                    if !self.code_input.trim().is_empty() {
                        let code = self.code_input.trim().to_string();
                        self.dispatch(BackendCommand::SetActiveCode { code });
                    }
                }
                UiEvent::WordList { code, words } => {
                    // Drop stale snapshots if the operator kept typing.
                    if code == self.code_input.trim() {
                        self.words = words;
                    }
                }
                UiEvent::ComposedCode { word, code } => {
                    if word == self.word_input {
                        self.code_input = code.clone();
                        self.dispatch(BackendCommand::SetActiveCode { code });
                    }
                }
                UiEvent::WordAdded { word, code } => {
                    self.status = format!("Added '{word}' under '{code}'");
                }
                UiEvent::BatchLoaded { total } => {
                    self.batch_total = Some(total);
                    self.batch_position = None;
                    self.status = format!("Batch list loaded: {total} entries");
                }
                UiEvent::BatchEntry {
                    index,
                    total,
                    word,
                    code,
                    words,
                } => {
                    self.word_input = word;
                    self.code_input = code;
                    self.words = words;
                    self.batch_position = Some(index);
                    self.batch_total = Some(total);
                    self.status = format!("Batch entry {}/{total}", index + 1);
                }
                UiEvent::BatchFinished => {
                    self.status = "End of batch list".to_string();
                }
                UiEvent::BatchAtStart => {
                    self.status = "Start of batch list".to_string();
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::LoadDictionary {
                        // Re-enable the load control so the operator can retry.
                        self.loading = false;
                    }
                    self.status = format!("{} error: {}", err_label(err.category()), err.message());
                }
            }
        }
    }

    /// Single-key batch navigation, inactive while any text input has focus.
    fn handle_batch_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() || self.batch_total.is_none() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.dispatch(BackendCommand::BatchNext);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::P)) {
            self.dispatch(BackendCommand::BatchPrevious);
        }
    }

    fn show_file_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("file_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Dictionary:");
                ui.monospace(if self.dict_path_input.is_empty() {
                    "(none)"
                } else {
                    self.dict_path_input.as_str()
                });
                if ui.button("Pick file...").clicked() {
                    // Cancelled dialogs are a no-op.
                    if let Some(path) = rfd::FileDialog::new().pick_file() {
                        self.dict_path_input = path.display().to_string();
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Char map:");
                ui.monospace(if self.char_map_path_input.is_empty() {
                    "(derived from dictionary)"
                } else {
                    self.char_map_path_input.as_str()
                });
                if ui.button("Pick char map...").clicked() {
                    if let Some(path) = rfd::FileDialog::new().pick_file() {
                        self.char_map_path_input = path.display().to_string();
                    }
                }
                if !self.char_map_path_input.is_empty() && ui.button("Clear").clicked() {
                    self.char_map_path_input.clear();
                }
            });
            ui.horizontal(|ui| {
                let can_load = !self.loading && !self.dict_path_input.is_empty();
                let label = if self.loaded { "Reload" } else { "Load" };
                if ui.add_enabled(can_load, egui::Button::new(label)).clicked() {
                    self.loading = true;
                    self.status = "Loading dictionary...".to_string();
                    let dict_path = PathBuf::from(&self.dict_path_input);
                    let char_map_path = if self.char_map_path_input.is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(&self.char_map_path_input))
                    };
                    self.dispatch(BackendCommand::LoadDictionary {
                        dict_path,
                        char_map_path,
                    });
                }
            });
            ui.add_space(4.0);
        });
    }

    fn show_word_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Code:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.code_input)
                    .hint_text("type a code to list its candidates")
                    .desired_width(200.0),
            );
            if response.changed() {
                let code = self.code_input.trim().to_string();
                self.dispatch(BackendCommand::SetActiveCode { code });
            }
        });
        ui.separator();

        if self.words.is_empty() {
            ui.weak("No candidates for the current code.");
            return;
        }

        let words = self.words.clone();
        let mut row_rects = Vec::with_capacity(words.len());

        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .show(ui, |ui| {
                for (index, word) in words.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let dragged = matches!(&self.drag, Some(drag) if drag.from == index);
                        let text = format!("{:>2}. {word}", index + 1);
                        let label = if dragged {
                            egui::RichText::new(text).strong()
                        } else {
                            egui::RichText::new(text)
                        };
                        let response = ui.add(
                            egui::Label::new(label).sense(egui::Sense::click_and_drag()),
                        );
                        if response.drag_started() {
                            self.drag = Some(DragState {
                                from: index,
                                target: None,
                            });
                        }
                        row_rects.push(response.rect);

                        if ui.small_button("#").clicked() {
                            self.reposition_prompt = Some(RepositionPrompt {
                                index,
                                word: word.clone(),
                                input: String::new(),
                            });
                        }
                        if ui.small_button("✕").clicked() {
                            self.dispatch(BackendCommand::DeleteWordAt { index });
                        }
                    });
                }
            });

        self.handle_drag_drop(ui, &row_rects);
    }

    /// Row-rect hit testing turns a drag gesture into the `{old, new}` index
    /// pair the reorder operation consumes.
    fn handle_drag_drop(&mut self, ui: &egui::Ui, row_rects: &[egui::Rect]) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);

        if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
            let target = row_rects
                .iter()
                .position(|rect| pos.y < rect.bottom())
                .unwrap_or(row_rects.len().saturating_sub(1));
            drag.target = Some(target);
        }

        if ui.input(|i| i.pointer.any_released()) {
            let from = drag.from;
            let target = drag.target;
            self.drag = None;
            if let Some(to) = target {
                if to != from {
                    self.dispatch(BackendCommand::MoveWord {
                        old_index: from,
                        new_index: to,
                    });
                }
            }
        }
    }

    fn show_reposition_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.reposition_prompt.as_mut() else {
            return;
        };

        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new("Set position")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Move '{}' to 1-based position (0 means 10):",
                    prompt.word
                ));
                let edit = ui.text_edit_singleline(&mut prompt.input);
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            let index = prompt.index;
            let parsed = parse_position_input(&prompt.input);
            self.reposition_prompt = None;
            // Non-numeric input is a silent no-op, like a cancelled prompt.
            if let Some(target_position) = parsed {
                self.dispatch(BackendCommand::RepositionWord {
                    index,
                    target_position,
                });
            }
        } else if cancelled || !open {
            self.reposition_prompt = None;
        }
    }

    fn show_add_word(&mut self, ui: &mut egui::Ui) {
        ui.heading("Add word");
        ui.horizontal(|ui| {
            ui.label("Word:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.word_input).desired_width(180.0),
            );
            if response.changed() {
                // Every edit re-composes, mirroring the code field behavior.
                let word = self.word_input.clone();
                self.dispatch(BackendCommand::ComposeCode { word });
            }
        });
        let can_add =
            !self.word_input.trim().is_empty() && !self.code_input.trim().is_empty();
        if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
            self.dispatch(BackendCommand::AddWord {
                word: self.word_input.trim().to_string(),
                code: self.code_input.trim().to_string(),
            });
        }
    }

    fn show_batch_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Batch import");
        ui.label("One entry per line: word, optionally followed by a code.");
        ui.add(
            egui::TextEdit::multiline(&mut self.batch_text)
                .desired_rows(6)
                .hint_text("你们 wqwu\n你好"),
        );
        ui.horizontal(|ui| {
            if ui.button("Load list").clicked() && !self.batch_text.trim().is_empty() {
                let raw_text = self.batch_text.clone();
                self.dispatch(BackendCommand::LoadBatch { raw_text });
            }
            let has_batch = self.batch_total.is_some();
            if ui
                .add_enabled(has_batch, egui::Button::new("Prev (p)"))
                .clicked()
            {
                self.dispatch(BackendCommand::BatchPrevious);
            }
            if ui
                .add_enabled(has_batch, egui::Button::new("Next (n)"))
                .clicked()
            {
                self.dispatch(BackendCommand::BatchNext);
            }
        });
        if let (Some(total), Some(position)) = (self.batch_total, self.batch_position) {
            ui.weak(format!("Reviewing entry {}/{total}", position + 1));
        }
    }
}

impl eframe::App for DictEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_batch_shortcuts(ctx);
        self.show_file_panel(ctx);
        self.show_reposition_prompt(ctx);

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::right("editor_panel")
            .min_width(260.0)
            .show(ctx, |ui| {
                if self.loaded {
                    self.show_add_word(ui);
                    ui.separator();
                    self.show_batch_panel(ui);
                } else {
                    ui.weak("Load a dictionary to enable editing.");
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loaded {
                self.show_word_list(ui);
            } else {
                ui.weak("No dictionary loaded.");
            }
        });

        // Worker events arrive asynchronously; poll at a relaxed cadence.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedEditorSettings {
            dict_path: (!self.dict_path_input.is_empty()).then(|| self.dict_path_input.clone()),
            char_map_path: (!self.char_map_path_input.is_empty())
                .then(|| self.char_map_path_input.clone()),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

/// Parse the reposition prompt input. Only a bare non-negative integer is
/// accepted; anything else means "leave the list alone".
fn parse_position_input(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_position_input;

    #[test]
    fn accepts_plain_integers_including_the_zero_shorthand() {
        assert_eq!(parse_position_input("3"), Some(3));
        assert_eq!(parse_position_input(" 10 "), Some(10));
        assert_eq!(parse_position_input("0"), Some(0));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_position_input(""), None);
        assert_eq!(parse_position_input("abc"), None);
        assert_eq!(parse_position_input("1.5"), None);
        assert_eq!(parse_position_input("-2"), None);
    }
}
