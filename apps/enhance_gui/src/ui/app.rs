use std::{sync::Arc, time::Duration};

use client_core::{
    view::{ActionButton, FrameworkSelect, ResultsPanel, SelectOption},
    HeadlessPage, RenderedResult,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};

pub struct EnhancerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    page: Arc<HeadlessPage>,
    prompt_draft: String,
    notice: Option<String>,
    status: String,
}

impl EnhancerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        page: Arc<HeadlessPage>,
    ) -> Self {
        let mut status = "Loading frameworks...".to_string();
        dispatch_backend_command(&cmd_tx, BackendCommand::LoadFrameworks, &mut status);
        Self {
            cmd_tx,
            ui_rx,
            page,
            prompt_draft: String::new(),
            notice: None,
            status,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.status_line());
                    self.status = err.status_line();
                }
            }
        }

        if self.notice.is_none() {
            let pending = self.page.notifier.take();
            if !pending.is_empty() {
                self.notice = Some(pending.join("\n"));
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.notice = None;
                }
            });
    }

    fn show_framework_select(&self, ui: &mut egui::Ui) {
        let options = self.page.framework_select.options();
        let selected = self.page.framework_select.selected_value();
        let selected_label = options
            .iter()
            .find(|option| option.value == selected)
            .map(|option| option.label.clone())
            .unwrap_or_default();

        egui::ComboBox::from_id_salt("framework_select")
            .selected_text(selected_label)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in &options {
                    self.framework_entry(ui, option, option.value == selected);
                }
            });
    }

    fn framework_entry(&self, ui: &mut egui::Ui, option: &SelectOption, is_selected: bool) {
        ui.add_enabled_ui(!option.disabled, |ui| {
            if ui.selectable_label(is_selected, &option.label).clicked() {
                self.page.framework_select.select(&option.value);
            }
        });
    }

    fn show_results(&mut self, ui: &mut egui::Ui) {
        if !self.page.results.is_visible() {
            return;
        }
        let Some(rendered) = self.page.results.rendered() else {
            return;
        };

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Enhanced Prompt").strong());
            egui::ScrollArea::vertical()
                .max_height(260.0)
                .show(ui, |ui| {
                    for line in &rendered.output_lines {
                        ui.label(line);
                    }
                });
            ui.separator();
            show_quality(ui, &rendered);

            let copy_label = self.page.copy_button.label();
            if ui
                .add_enabled(
                    self.page.copy_button.is_enabled(),
                    egui::Button::new(copy_label),
                )
                .clicked()
            {
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::CopyResult,
                    &mut self.status,
                );
            }
        });
    }

    fn show_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Prompt Enhancer");
        ui.add_space(8.0);

        ui.label("Framework");
        self.show_framework_select(ui);
        ui.add_space(8.0);

        ui.label("Prompt");
        if ui
            .add(
                egui::TextEdit::multiline(&mut self.prompt_draft)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
                    .hint_text("Describe what you want the model to do"),
            )
            .changed()
        {
            self.page.prompt_input.set_text(self.prompt_draft.clone());
        }
        ui.add_space(8.0);

        let enhance = &self.page.enhance_button;
        if ui
            .add_enabled(enhance.is_enabled(), egui::Button::new(enhance.label()))
            .clicked()
        {
            dispatch_backend_command(&self.cmd_tx, BackendCommand::Enhance, &mut self.status);
        }

        self.show_results(ui);
    }
}

fn show_quality(ui: &mut egui::Ui, rendered: &RenderedResult) {
    ui.label(&rendered.framework_label);
    ui.horizontal_wrapped(|ui| {
        for metric in &rendered.metrics {
            ui.label(egui::RichText::new(metric.display()).monospace());
            ui.add_space(6.0);
        }
    });
    for note in &rendered.notes {
        ui.label(format!("- {note}"));
    }
}

impl eframe::App for EnhancerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let blocked = self.notice.is_some();
            ui.add_enabled_ui(!blocked, |ui| self.show_page(ui));
        });
        self.show_notice(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
