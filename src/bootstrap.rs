// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::error::BootstrapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Waiting for the native window to report it is ready
    Pending,
    /// UI root mounted
    Ready,
}

/// One-shot gate between process start and mounting the UI root.
#[derive(Debug)]
pub struct Bootstrap {
    lifecycle: Lifecycle,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Pending,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Called from the native ready callback. Runs `mount` on the first call
    /// only; later calls fail without running it.
    pub fn mount<T, F>(&mut self, mount: F) -> Result<T, BootstrapError>
    where
        F: FnOnce() -> T,
    {
        if self.lifecycle == Lifecycle::Ready {
            crate::debug::log("WARNING: native runtime reported ready twice, ignoring");
            return Err(BootstrapError::AlreadyMounted);
        }

        self.lifecycle = Lifecycle::Ready;
        crate::debug::log("Native runtime ready, mounting UI");
        Ok(mount())
    }
}
