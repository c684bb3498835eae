// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

// UI root of the installer
//
// - state.rs: InstallerApp struct and initialization
// - theme.rs: Theme configuration
// - logic.rs: Navigation, bridge event handling, starting install/uninstall
// - ui.rs: UI rendering (eframe::App implementation)

mod state;
mod theme;
mod logic;
mod ui;

pub use state::InstallerApp;
