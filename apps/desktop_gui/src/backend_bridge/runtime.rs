//! Backend worker: a dedicated thread with its own tokio runtime draining the
//! UI command queue one command at a time. The serial loop is what keeps
//! overlapping synchronizations from racing each other in flight.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use editor_core::{BatchOutcome, EditorSession, LocalDictBackend};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let mut session = EditorSession::new(Arc::new(LocalDictBackend::new()));
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&mut session, cmd, &ui_tx).await;
            }
        });
    });
}

async fn handle_command(
    session: &mut EditorSession,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    let send = |event: UiEvent| {
        let _ = ui_tx.try_send(event);
    };
    let send_error = |context: UiErrorContext, err: anyhow::Error| {
        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
            context,
            format!("{err:#}"),
        )));
    };
    let word_list_snapshot = |session: &EditorSession| UiEvent::WordList {
        code: session.active_code().unwrap_or_default().to_string(),
        words: session.words().to_vec(),
    };

    match cmd {
        BackendCommand::LoadDictionary {
            dict_path,
            char_map_path,
        } => match session
            .load_dictionary(dict_path.clone(), char_map_path.as_deref())
            .await
        {
            Ok(()) => send(UiEvent::DictionaryLoaded { path: dict_path }),
            Err(err) => send_error(UiErrorContext::LoadDictionary, err),
        },
        BackendCommand::SetActiveCode { code } => match session.set_active_code(&code).await {
            Ok(words) => send(UiEvent::WordList { code, words }),
            Err(err) => send_error(UiErrorContext::Query, err),
        },
        BackendCommand::MoveWord {
            old_index,
            new_index,
        } => {
            if let Err(err) = session.move_word(old_index, new_index).await {
                send_error(UiErrorContext::Synchronize, err);
            }
            // The local list stays mutated even when synchronization failed.
            send(word_list_snapshot(session));
        }
        BackendCommand::DeleteWordAt { index } => {
            if let Err(err) = session.delete_word_at(index).await {
                send_error(UiErrorContext::Synchronize, err);
            }
            send(word_list_snapshot(session));
        }
        BackendCommand::RepositionWord {
            index,
            target_position,
        } => {
            if let Err(err) = session.reposition_word(index, target_position).await {
                send_error(UiErrorContext::Synchronize, err);
            }
            send(word_list_snapshot(session));
        }
        BackendCommand::ComposeCode { word } => match session.compose_code(&word).await {
            Ok(code) => send(UiEvent::ComposedCode {
                word,
                code: code.unwrap_or_default(),
            }),
            Err(err) => send_error(UiErrorContext::Compose, err),
        },
        BackendCommand::AddWord { word, code } => match session.add_word(&word, &code).await {
            Ok(_) => {
                send(UiEvent::WordAdded { word, code });
                send(word_list_snapshot(session));
            }
            Err(err) => send_error(UiErrorContext::AddWord, err),
        },
        BackendCommand::LoadBatch { raw_text } => {
            // Text with no usable lines is silently ignored.
            if session.load_batch(&raw_text) {
                send(UiEvent::BatchLoaded {
                    total: session.batch_len(),
                });
            }
        }
        BackendCommand::BatchNext => match session.batch_next().await {
            Ok(outcome) => send(batch_event(outcome)),
            Err(err) => send_error(UiErrorContext::Batch, err),
        },
        BackendCommand::BatchPrevious => match session.batch_previous().await {
            Ok(outcome) => send(batch_event(outcome)),
            Err(err) => send_error(UiErrorContext::Batch, err),
        },
    }
}

fn batch_event(outcome: BatchOutcome) -> UiEvent {
    match outcome {
        BatchOutcome::Entry {
            index,
            total,
            word,
            code,
            words,
        } => UiEvent::BatchEntry {
            index,
            total,
            word,
            code,
            words,
        },
        BatchOutcome::Finished => UiEvent::BatchFinished,
        BatchOutcome::AtStart => UiEvent::BatchAtStart,
    }
}
