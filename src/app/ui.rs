// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use super::InstallerApp;
use crate::bridge::{NotificationKind, Operation, Outcome};
use crate::config::APP_NAME;
use crate::router::Route;
use eframe::egui;
use egui_thematic::render_theme_panel;

const GREEN: egui::Color32 = egui::Color32::from_rgb(72, 187, 120);
const RED: egui::Color32 = egui::Color32::from_rgb(235, 87, 87);
const LOG_PANEL_WIDTH: f32 = 320.0;

fn big_button(text: &str, fill: Option<egui::Color32>) -> egui::Button<'_> {
    let button = egui::Button::new(text).min_size(egui::vec2(140.0, 48.0));
    match fill {
        Some(color) => button.fill(color),
        None => button,
    }
}

impl eframe::App for InstallerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        let show_modal = !self.notices.is_empty();

        // Sync with system theme if it changes
        let is_dark = ctx.style().visuals.dark_mode;
        if is_dark != self.last_system_dark_mode {
            self.last_system_dark_mode = is_dark;
            self.theme_state.current_config = self.get_theme_config();
        }

        // Theme editor panel
        if !show_modal {
            render_theme_panel(ctx, &mut self.theme_state, &mut self.show_theme_editor);

            // Keyboard shortcut to toggle theme editor (Ctrl+T)
            if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::CTRL, egui::Key::T))) {
                self.show_theme_editor = !self.show_theme_editor;
            }
        }

        if show_modal {
            self.notification_modal(ctx);
        }

        if self.show_log {
            self.log_panel(ctx, show_modal);
        }

        let panel_frame = egui::Frame::central_panel(&ctx.style()).fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!show_modal, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(APP_NAME);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            if ui.button("🎨").on_hover_text("Toggle Theme Editor (Ctrl+T)").clicked() {
                                self.show_theme_editor = !self.show_theme_editor;
                            }
                            if ui.button("📜").on_hover_text("Toggle Log Area").clicked() {
                                self.toggle_log(ctx);
                            }
                        });
                    });

                    ui.add_space(16.0);
                    ui.separator();
                    ui.add_space(32.0);

                    match self.router.current().unwrap_or(Route::Home) {
                        Route::Home => self.home_view(ui),
                        Route::Install => self.install_view(ui),
                        Route::Uninstall => self.uninstall_view(ui),
                    }
                });
            });
    }
}

impl InstallerApp {
    fn toggle_log(&mut self, ctx: &egui::Context) {
        self.show_log = !self.show_log;

        // Adjust window size when toggling log
        let current_size = ctx.content_rect().size();
        let new_width = if self.show_log {
            current_size.x + LOG_PANEL_WIDTH
        } else {
            current_size.x - LOG_PANEL_WIDTH
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(new_width, current_size.y)));
    }

    fn home_view(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(format!("Welcome! What would you like to do with {}?", APP_NAME));
            ui.add_space(24.0);

            let busy = self.running.is_some();
            ui.add_enabled_ui(!busy, |ui| {
                if ui.add(big_button("Install", Some(GREEN))).clicked() {
                    self.navigate(Route::Install.path());
                }
                ui.add_space(12.0);
                if ui.add(big_button("Uninstall", None)).clicked() {
                    self.navigate(Route::Uninstall.path());
                }
            });
        });
    }

    fn progress_section(&self, ui: &mut egui::Ui) {
        let progress = self.store.snapshot();

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&progress.progress_msg).size(16.0));
            ui.add_space(12.0);
            ui.add(
                egui::ProgressBar::new(progress.fraction())
                    .show_percentage()
                    .fill(ui.visuals().selection.bg_fill)
                    .desired_height(16.0)
                    .desired_width(ui.available_width() / 2.0),
            );
        });
    }

    /// Result line for the last finished `operation`, if it was that one
    fn outcome_section(&self, ui: &mut egui::Ui, operation: Operation) {
        let Some((op, outcome)) = &self.last_outcome else {
            return;
        };
        if *op != operation {
            return;
        }

        ui.vertical_centered(|ui| match outcome {
            Outcome::Completed => {
                ui.colored_label(GREEN, "Done.");
            }
            Outcome::Cancelled => {
                ui.label("Cancelled. Nothing else was changed.");
            }
            Outcome::Failed(e) => {
                ui.colored_label(RED, e);
            }
        });
    }

    fn install_view(&mut self, ui: &mut egui::Ui) {
        self.progress_section(ui);
        ui.add_space(16.0);
        self.outcome_section(ui, Operation::Install);
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            if self.running == Some(Operation::Install) {
                // Cancel button (only while the install is cancellable)
                if self.cancel_token.is_some() && ui.add(big_button("Cancel", Some(RED))).clicked() {
                    self.cancel_installation();
                }
                return;
            }

            let failed = matches!(
                self.last_outcome,
                Some((Operation::Install, Outcome::Failed(_) | Outcome::Cancelled))
            );
            if failed && ui.add(big_button("Retry", Some(GREEN))).clicked() {
                self.start_install();
            }
            ui.add_space(8.0);
            if ui.add(big_button("Back", None)).clicked() {
                self.go_home();
            }
        });
    }

    fn uninstall_view(&mut self, ui: &mut egui::Ui) {
        if self.confirm_uninstall && self.running.is_none() {
            ui.vertical_centered(|ui| {
                ui.heading(format!("Uninstall {}?", APP_NAME));
                ui.add_space(8.0);
                ui.label("This removes the wallet, its SDK files and shortcuts.");
                ui.colored_label(
                    RED,
                    "Your wallet data in the .dag folder is deleted too. Make sure you have a backup of your keys.",
                );
                ui.add_space(24.0);

                if ui.add(big_button("Uninstall", Some(RED))).clicked() {
                    self.start_uninstall();
                }
                ui.add_space(8.0);
                if ui.add(big_button("Back", None)).clicked() {
                    self.go_home();
                }
            });
            return;
        }

        self.progress_section(ui);
        ui.add_space(16.0);
        self.outcome_section(ui, Operation::Uninstall);
        ui.add_space(16.0);

        if self.running.is_none() {
            ui.vertical_centered(|ui| {
                if ui.add(big_button("Back", None)).clicked() {
                    self.go_home();
                }
            });
        }
    }

    fn notification_modal(&mut self, ctx: &egui::Context) {
        // Background Dimmer - paint at Background layer, below everything
        let screen_rect = ctx.viewport_rect();
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::from("modal_dimmer"),
        ))
        .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(140));

        let Some(notice) = self.notices.first().cloned() else {
            return;
        };

        let window_frame = egui::Frame::window(&ctx.style())
            .fill(ctx.style().visuals.window_fill)
            .stroke(ctx.style().visuals.window_stroke);

        egui::Window::new(&notice.title)
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(window_frame)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    let color = match notice.kind {
                        NotificationKind::Success => GREEN,
                        NotificationKind::Error => RED,
                    };
                    ui.heading(egui::RichText::new(&notice.title).color(color));
                    ui.add_space(8.0);
                    ui.label(&notice.body);
                    ui.add_space(12.0);

                    if ui.button("OK").clicked() {
                        self.notices.remove(0);
                    }
                    ui.add_space(8.0);
                });
            });
    }

    fn log_panel(&mut self, ctx: &egui::Context, show_modal: bool) {
        egui::SidePanel::right("log_panel")
            .resizable(true)
            .default_width(LOG_PANEL_WIDTH)
            .min_width(200.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!show_modal, |ui| {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.heading("Debug Log");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("X").on_hover_text("Close Log").clicked() {
                                self.toggle_log(ui.ctx());
                            }
                        });
                    });

                    // Copy the full debug log, not just what the panel shows
                    ui.horizontal(|ui| {
                        if ui.button("📋 Copy to Clipboard").clicked() {
                            let log_path = crate::debug::get_log_path();
                            match std::fs::read_to_string(&log_path) {
                                Ok(contents) => {
                                    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(contents)) {
                                        Ok(_) => self.log("Log copied to clipboard"),
                                        Err(e) => self.log(&format!("Failed to copy to clipboard: {}", e)),
                                    }
                                }
                                Err(e) => self.log(&format!("Failed to read log file: {}", e)),
                            }
                        }
                        ui.label(format!("Log: {:?}", crate::debug::get_log_path().file_name().unwrap_or_default()));
                    });

                    ui.separator();

                    egui::ScrollArea::vertical()
                        .stick_to_bottom(true)
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            let lines = self
                                .log_messages
                                .lock()
                                .map(|logs| logs.join("\n"))
                                .unwrap_or_default();
                            ui.add(
                                egui::TextEdit::multiline(&mut lines.as_str())
                                    .font(egui::TextStyle::Monospace)
                                    .desired_width(f32::INFINITY)
                                    .interactive(false),
                            );
                        });
                });
            });
    }
}
