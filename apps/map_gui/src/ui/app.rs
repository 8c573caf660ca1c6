use anyhow::anyhow;
use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

use location_core::screen::{AcquisitionToken, MountedScreen};
use location_core::view::{view_for_state, ScreenView};
use location_core::MapRenderer;
use shared::error::AcquireError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::map::{EguiMapCanvas, MapPan};

pub const SETTINGS_STORAGE_KEY: &str = "map_gui.settings";

/// Surface preferences that survive restarts. Screen state itself is never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedMapSettings {
    pub show_graticule: bool,
}

impl Default for PersistedMapSettings {
    fn default() -> Self {
        Self {
            show_graticule: true,
        }
    }
}

pub struct MapGuiApp {
    ui_rx: Receiver<UiEvent>,

    screen: MountedScreen,
    token: AcquisitionToken,

    pan: MapPan,
    settings: PersistedMapSettings,
}

impl MapGuiApp {
    /// Construction is the mount: the single acquisition run is dispatched
    /// here and never again for this screen. The command sender is dropped
    /// afterwards; the worker drains the queue and exits.
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted: Option<PersistedMapSettings>,
    ) -> Self {
        let (mut screen, token) = MountedScreen::mount();
        if let Err(detail) = dispatch_backend_command(&cmd_tx, BackendCommand::AcquireFix { token })
        {
            tracing::error!("could not start acquisition: {detail}");
            screen.resolve(token, Err(AcquireError::acquisition(anyhow!(detail))));
        }

        Self {
            ui_rx,
            screen,
            token,
            pan: MapPan::default(),
            settings: persisted.unwrap_or_default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerFailed { detail } => {
                    tracing::error!("acquisition worker failed: {detail}");
                    self.screen
                        .resolve(self.token, Err(AcquireError::acquisition(anyhow!(detail))));
                }
                UiEvent::AcquisitionResolved { token, outcome } => {
                    if !self.screen.resolve(token, outcome) {
                        tracing::debug!("ignored acquisition result for a superseded mount");
                    }
                }
            }
        }
    }
}

impl eframe::App for MapGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let view = view_for_state(self.screen.state());
        egui::CentralPanel::default().show(ctx, |ui| match &view {
            ScreenView::Loading { caption } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.4);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.add_space(8.0);
                    ui.label(*caption);
                });
            }
            ScreenView::Error { message } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.4);
                    ui.label(message);
                });
            }
            ScreenView::Map(map) => {
                let mut canvas = EguiMapCanvas {
                    ui,
                    pan: &mut self.pan,
                    show_graticule: &mut self.settings.show_graticule,
                };
                canvas.render_map(map.region, &map.markers, map.options);
            }
        });

        // Keep polling the worker channel while the acquisition is pending.
        if !self.screen.state().is_terminal() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
