// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

//! Backend → UI events.
//!
//! The installer tasks never touch UI state directly. They emit events on
//! this channel and the UI drains it once per frame.

use eframe::egui;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Install,
    Uninstall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    Status(String),
    Progress(u8),
    Notify(Notification),
    Finished(Operation, Outcome),
    CloseWindow,
}

#[derive(Clone)]
pub struct Bridge {
    tx: mpsc::UnboundedSender<BridgeEvent>,
    ctx: Option<egui::Context>,
}

impl Bridge {
    pub fn new(ctx: Option<egui::Context>) -> (Self, mpsc::UnboundedReceiver<BridgeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, ctx }, rx)
    }

    fn emit(&self, event: BridgeEvent) {
        // The receiver only goes away when the window is closing
        let _ = self.tx.send(event);
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }

    pub fn send_status_msg(&self, msg: &str) {
        self.emit(BridgeEvent::Status(msg.to_string()));
    }

    pub fn send_progress(&self, percent: u8) {
        self.emit(BridgeEvent::Progress(percent));
    }

    pub fn update_progress(&self, percent: u8, msg: &str) {
        crate::debug::log(&format!("[{:>3}%] {}", percent, msg));
        self.send_progress(percent);
        self.send_status_msg(msg);
    }

    pub fn send_error_notification(&self, title: &str, body: &str) {
        crate::debug::log(&format!("ERROR: {}: {}", title, body));
        self.emit(BridgeEvent::Notify(Notification {
            kind: NotificationKind::Error,
            title: title.to_string(),
            body: body.to_string(),
        }));
    }

    pub fn send_success_notification(&self, title: &str, body: &str) {
        self.emit(BridgeEvent::Notify(Notification {
            kind: NotificationKind::Success,
            title: title.to_string(),
            body: body.to_string(),
        }));
    }

    pub fn finish(&self, operation: Operation, outcome: Outcome) {
        crate::debug::log(&format!("{:?} finished: {:?}", operation, outcome));
        self.emit(BridgeEvent::Finished(operation, outcome));
    }

    pub fn close_window(&self) {
        self.emit(BridgeEvent::CloseWindow);
    }
}
