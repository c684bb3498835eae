// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::config::{DEFAULT_PROGRESS_MSG, DEFAULT_PROGRESS_PERCENT};
use std::sync::{Arc, Mutex};

/// Installer progress as shown by the UI.
/// The percent is kept in its display form ("0".."100").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallProgress {
    pub progress_msg: String,
    pub progress_percent: String,
}

impl Default for InstallProgress {
    fn default() -> Self {
        Self {
            progress_msg: DEFAULT_PROGRESS_MSG.to_string(),
            progress_percent: DEFAULT_PROGRESS_PERCENT.to_string(),
        }
    }
}

/// Every write to the store goes through one of these
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressAction {
    SetMessage(String),
    SetPercent(u8),
    Update { percent: u8, message: String },
    Reset,
}

impl InstallProgress {
    fn reduce(&mut self, action: ProgressAction) {
        match action {
            ProgressAction::SetMessage(message) => {
                self.progress_msg = message;
            }
            ProgressAction::SetPercent(percent) => {
                self.progress_percent = percent.min(100).to_string();
            }
            ProgressAction::Update { percent, message } => {
                self.progress_percent = percent.min(100).to_string();
                self.progress_msg = message;
            }
            ProgressAction::Reset => {
                *self = Self::default();
            }
        }
    }

    /// Progress as a fraction in 0.0..=1.0; anything unparsable reads as 0
    pub fn fraction(&self) -> f32 {
        self.progress_percent
            .trim()
            .parse::<f32>()
            .map(|p| (p / 100.0).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }
}

/// Shared handle to the one progress state of the process
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<Mutex<InstallProgress>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, action: ProgressAction) {
        if let Ok(mut state) = self.state.lock() {
            state.reduce(action);
        }
    }

    pub fn snapshot(&self) -> InstallProgress {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}
