// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

//! eframe rendering of the welcome window

use eframe::egui;

use super::window::{LoopControl, WelcomeWindow};
use crate::opener::UrlOpener;
use crate::{OrganizerError, Result};

struct WelcomeApp {
    window: WelcomeWindow,
    opener: Box<dyn UrlOpener>,
}

impl eframe::App for WelcomeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(self.window.heading()).size(20.0).strong());
                ui.label(
                    egui::RichText::new(self.window.version_line())
                        .size(12.0)
                        .color(egui::Color32::GRAY),
                );
                ui.add_space(8.0);
                ui.label(self.window.intro());
                ui.add_space(6.0);
                for feature in self.window.features() {
                    ui.label(egui::RichText::new(format!("• {}", feature)).size(12.0));
                }
                ui.add_space(10.0);

                for control in self.window.controls() {
                    if ui.button(control.label()).clicked()
                        && self.window.activate(control, self.opener.as_ref()) == LoopControl::Exit
                    {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    ui.add_space(6.0);
                }
            });
        });
    }
}

/// Run the window on the calling thread until it closes
pub fn launch(window: WelcomeWindow, opener: Box<dyn UrlOpener>) -> Result<()> {
    let spec = window.spec();
    let title = window.window_title();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([spec.width, spec.height])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(WelcomeApp { window, opener }))),
    )
    .map_err(|e| OrganizerError::Gui(e.to_string()))
}
