//! Command dispatch from UI actions to the worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = match &cmd {
        BackendCommand::AcquireFix { .. } => "acquire_fix",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->worker command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err("worker command queue is full".to_string()),
        Err(TrySendError::Disconnected(_)) => {
            Err("acquisition worker disconnected before the request was queued".to_string())
        }
    }
}
