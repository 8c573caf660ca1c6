//! Worker thread: owns the tokio runtime and the location providers.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use location_core::{acquire_region, LocationProvider, PermissionProvider};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    permissions: Arc<dyn PermissionProvider>,
    locations: Arc<dyn LocationProvider>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build acquisition worker runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerFailed {
                    detail: format!("worker runtime startup failed: {err}"),
                });
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::AcquireFix { token } => {
                        tracing::info!("worker: acquire_fix");
                        let outcome =
                            acquire_region(permissions.as_ref(), locations.as_ref()).await;
                        let _ = ui_tx.try_send(UiEvent::AcquisitionResolved { token, outcome });
                    }
                }
            }
        });
    });
}
