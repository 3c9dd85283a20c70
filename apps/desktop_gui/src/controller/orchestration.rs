//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadDictionary { .. } => "load_dictionary",
        BackendCommand::SetActiveCode { .. } => "set_active_code",
        BackendCommand::MoveWord { .. } => "move_word",
        BackendCommand::DeleteWordAt { .. } => "delete_word_at",
        BackendCommand::RepositionWord { .. } => "reposition_word",
        BackendCommand::ComposeCode { .. } => "compose_code",
        BackendCommand::AddWord { .. } => "add_word",
        BackendCommand::LoadBatch { .. } => "load_batch",
        BackendCommand::BatchNext => "batch_next",
        BackendCommand::BatchPrevious => "batch_previous",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
        }
    }
}
