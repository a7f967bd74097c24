//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use anyhow::Context;
use client_core::UserApi;
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info, warn};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        form::FormState,
        user_list::{ControllerOptions, UserListController, UserListView, UserRow},
    },
};

/// View that forwards every update to the UI thread.
pub struct ChannelView {
    ui_tx: Sender<UiEvent>,
}

impl ChannelView {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    /// Blocks while the UI queue is full so the rendered list never misses
    /// a fetch; fails only once the UI side has hung up.
    fn emit(&self, event: UiEvent) {
        if let Err(err) = self.ui_tx.send(event) {
            warn!(error = %err, "ui receiver gone; dropping backend->ui event");
        }
    }
}

impl UserListView for ChannelView {
    fn render_rows(&mut self, rows: &[UserRow]) {
        self.emit(UiEvent::RowsRendered(rows.to_vec()));
    }

    fn show_error(&mut self, message: &str) {
        self.emit(UiEvent::ErrorShown(message.to_string()));
    }

    fn clear_error(&mut self) {
        self.emit(UiEvent::ErrorCleared);
    }

    fn show_form(&mut self, form: &FormState) {
        self.emit(UiEvent::FormShown(form.clone()));
    }

    fn hide_form(&mut self) {
        self.emit(UiEvent::FormHidden);
    }
}

/// Starts the backend worker: loads the list once, then serves commands in
/// arrival order until the command queue closes.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    api: Arc<dyn UserApi>,
    options: ControllerOptions,
) -> anyhow::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("user-admin-backend".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!(error = %err, "failed to build backend runtime");
                    let _ = ui_tx.try_send(UiEvent::Notice(format!(
                        "Backend worker startup failure: {err}"
                    )));
                    return;
                }
            };

            runtime.block_on(async move {
                let mut controller =
                    UserListController::new(api, ChannelView::new(ui_tx), options);
                controller.load_users().await;
                while let Ok(cmd) = cmd_rx.recv() {
                    controller.handle(cmd).await;
                }
                info!("command queue closed; backend worker exiting");
            });
        })
        .context("failed to spawn backend worker thread")
}
