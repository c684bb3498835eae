// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use super::InstallerApp;
use crate::bridge::{BridgeEvent, Operation, Outcome};
use crate::config::CLOSE_DELAY_SECS;
use crate::installer::Installer;
use crate::layout::InstallLayout;
use crate::router::Route;
use crate::store::ProgressAction;
use eframe::egui;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Store update carried by a bridge event, if any
pub(super) fn progress_action(event: &BridgeEvent) -> Option<ProgressAction> {
    match event {
        BridgeEvent::Status(msg) => Some(ProgressAction::SetMessage(msg.clone())),
        BridgeEvent::Progress(percent) => Some(ProgressAction::SetPercent(*percent)),
        _ => None,
    }
}

impl InstallerApp {
    pub(super) fn log(&self, msg: &str) {
        crate::debug::log(msg);
        if let Ok(mut logs) = self.log_messages.lock() {
            logs.push(msg.to_string());
            // Keep only last 100 messages
            if logs.len() > 100 {
                logs.remove(0);
            }
        }
    }

    /// Apply everything the backend sent since the last frame
    pub(super) fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events_rx.try_recv() {
            if let Some(action) = progress_action(&event) {
                self.store.dispatch(action);
                continue;
            }

            match event {
                BridgeEvent::Notify(notice) => {
                    self.log(&format!("{}: {}", notice.title, notice.body));
                    self.notices.push(notice);
                }
                BridgeEvent::Finished(operation, outcome) => {
                    match &outcome {
                        Outcome::Completed => self.log(&format!("{:?} completed", operation)),
                        Outcome::Cancelled => self.log(&format!("{:?} cancelled", operation)),
                        Outcome::Failed(e) => self.log(&format!("{:?} failed: {}", operation, e)),
                    }
                    if self.running == Some(operation) {
                        self.running = None;
                        self.cancel_token = None;
                    }
                    self.last_outcome = Some((operation, outcome));
                }
                BridgeEvent::CloseWindow => {
                    self.log("Closing installer");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                BridgeEvent::Status(_) | BridgeEvent::Progress(_) => {}
            }
        }
    }

    /// Push-navigate to a path or route name. Entering Install starts it.
    pub(super) fn navigate(&mut self, target: &str) {
        match self.router.push(target) {
            Ok(Route::Install) => self.start_install(),
            Ok(Route::Uninstall) => {
                if self.running.is_none() {
                    self.confirm_uninstall = true;
                }
            }
            Ok(Route::Home) => {}
            Err(e) => self.log(&format!("Navigation failed: {}", e)),
        }
    }

    pub(super) fn go_home(&mut self) {
        if self.router.back() != Some(Route::Home) {
            self.navigate(Route::Home.path());
        }
    }

    pub(super) fn start_install(&mut self) {
        if self.running.is_some() {
            return;
        }

        self.log("Starting installation...");
        self.store.dispatch(ProgressAction::Reset);
        self.last_outcome = None;

        let cancel_token = CancellationToken::new();
        self.cancel_token = Some(cancel_token.clone());
        self.running = Some(Operation::Install);

        let bridge = self.bridge.clone();
        self.runtime.spawn(async move {
            let outcome = match InstallLayout::detect() {
                Ok(layout) => Installer::new(layout, bridge.clone()).run(cancel_token).await,
                Err(e) => {
                    bridge.send_error_notification("Unable to install Molly Wallet", &e.to_string());
                    Outcome::Failed(e.to_string())
                }
            };

            let completed = outcome == Outcome::Completed;
            bridge.finish(Operation::Install, outcome);

            if completed {
                tokio::time::sleep(Duration::from_secs(CLOSE_DELAY_SECS)).await;
                bridge.close_window();
            }
        });
    }

    pub(super) fn start_uninstall(&mut self) {
        if self.running.is_some() {
            return;
        }

        self.log("Starting uninstall...");
        self.store.dispatch(ProgressAction::Update {
            percent: 0,
            message: "Uninstalling Molly Wallet...".to_string(),
        });
        self.last_outcome = None;
        self.confirm_uninstall = false;
        self.running = Some(Operation::Uninstall);

        let bridge = self.bridge.clone();
        self.runtime.spawn(async move {
            let outcome = match InstallLayout::detect() {
                Ok(layout) => Installer::new(layout, bridge.clone()).uninstall().await,
                Err(e) => {
                    bridge.send_error_notification("Unable to uninstall Molly Wallet", &e.to_string());
                    Outcome::Failed(e.to_string())
                }
            };
            bridge.finish(Operation::Uninstall, outcome);
        });
    }

    pub(super) fn cancel_installation(&mut self) {
        if let Some(token) = &self.cancel_token {
            self.log("Cancelling installation...");
            token.cancel();
            self.store.dispatch(ProgressAction::SetMessage("Cancelling...".to_string()));
            // Clear the cancel token so we don't try to cancel again
            self.cancel_token = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{Notification, NotificationKind};
    use crate::store::Store;

    #[test]
    fn test_progress_events_update_store() {
        let store = Store::new();
        for event in [
            BridgeEvent::Progress(33),
            BridgeEvent::Status("Preparing filesystem...".to_string()),
        ] {
            if let Some(action) = progress_action(&event) {
                store.dispatch(action);
            }
        }

        let state = store.snapshot();
        assert_eq!(state.progress_percent, "33");
        assert_eq!(state.progress_msg, "Preparing filesystem...");
    }

    #[test]
    fn test_other_events_leave_store_alone() {
        let notice = BridgeEvent::Notify(Notification {
            kind: NotificationKind::Error,
            title: "Unable to unzip contents".to_string(),
            body: "bad archive".to_string(),
        });
        assert_eq!(progress_action(&notice), None);
        assert_eq!(progress_action(&BridgeEvent::CloseWindow), None);
        assert_eq!(
            progress_action(&BridgeEvent::Finished(Operation::Install, Outcome::Completed)),
            None
        );
    }
}
