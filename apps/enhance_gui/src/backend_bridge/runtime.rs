//! Backend worker: owns the tokio runtime and runs page components against the
//! shared page.

use std::{sync::Arc, thread};

use client_core::{
    ClientSettings, CopyOutcome, EnhanceController, FrameworkLoader, HeadlessPage,
    HttpEnhancerApi, SubmitOutcome,
};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    page: Arc<HeadlessPage>,
    settings: ClientSettings,
) {
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
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Backend: {}",
                settings.api_base_url()
            )));
            let api = Arc::new(HttpEnhancerApi::new(settings));
            let handles = page.handles();
            let loader = Arc::new(FrameworkLoader::new(api.clone(), &handles));
            let controller = Arc::new(EnhanceController::new(api, handles));

            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend command received");
                let ui_tx = ui_tx.clone();
                match cmd {
                    BackendCommand::LoadFrameworks => {
                        let loader = Arc::clone(&loader);
                        tokio::spawn(async move {
                            let event = match loader.load().await {
                                Ok(count) => UiEvent::Info(format!("{count} frameworks available")),
                                Err(err) => UiEvent::Error(UiError::from_client_error(
                                    UiErrorContext::LoadFrameworks,
                                    &err,
                                )),
                            };
                            let _ = ui_tx.try_send(event);
                        });
                    }
                    BackendCommand::Enhance => {
                        let controller = Arc::clone(&controller);
                        tokio::spawn(async move {
                            let event = match controller.submit().await {
                                SubmitOutcome::Enhanced(response) => UiEvent::Info(format!(
                                    "Enhanced with {}",
                                    response.selected_framework
                                )),
                                SubmitOutcome::Failed(err) => UiEvent::Error(
                                    UiError::from_client_error(UiErrorContext::Enhance, &err),
                                ),
                                SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => return,
                            };
                            let _ = ui_tx.try_send(event);
                        });
                    }
                    BackendCommand::CopyResult => {
                        let controller = Arc::clone(&controller);
                        tokio::spawn(async move {
                            if controller.copy_result().await == CopyOutcome::Failed {
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Copy,
                                    "clipboard write failed",
                                )));
                            }
                        });
                    }
                }
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}
