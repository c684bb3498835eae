// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

// ============================================================================
// INSTALLER CONFIGURATION
// ============================================================================
// Everything the installer needs to know about the wallet it installs lives
// here: branding, where releases are published, which files make up an
// installation and what the progress store shows before anything happens.
//
// Runtime paths (home directory, .dag folder, per-OS binary locations) are
// derived in src/layout.rs from the constants below.
// ============================================================================

use eframe::egui;

// ----------------------------------------------------------------------------
// BRANDING
// ----------------------------------------------------------------------------

/// Name of the product being installed
pub const APP_NAME: &str = "Molly Wallet";

/// Window title (displayed in title bar)
pub const WINDOW_TITLE: &str = "Molly Wallet Installer";

/// User-Agent string for HTTP requests to GitHub
pub const USER_AGENT: &str = env!("CARGO_PKG_NAME");

// ----------------------------------------------------------------------------
// WINDOW SETTINGS
// ----------------------------------------------------------------------------

/// Default window size (width, height)
pub const WINDOW_SIZE: (f32, f32) = (1024.0, 768.0);

/// Minimum window size (width, height)
pub const WINDOW_MIN_SIZE: (f32, f32) = (640.0, 420.0);

/// Background colour used before the theme is applied (#131313)
pub const COLOR_BG_DARK: egui::Color32 = egui::Color32::from_rgb(0x13, 0x13, 0x13);

// ----------------------------------------------------------------------------
// PROGRESS STORE DEFAULTS
// ----------------------------------------------------------------------------

pub const DEFAULT_PROGRESS_MSG: &str = "Installing Molly Wallet...";
pub const DEFAULT_PROGRESS_PERCENT: &str = "0";

// ----------------------------------------------------------------------------
// RELEASE SOURCES
// ----------------------------------------------------------------------------

/// GitHub repository publishing Molly Wallet releases ("owner/repo")
pub const WALLET_REPO: &str = "grvlle/constellation_wallet";

/// Base URL for release downloads.
/// Assets live under `<base>/v<version>-<os>/<file>`.
pub const RELEASE_DOWNLOAD_URL: &str = "https://github.com/grvlle/constellation_wallet/releases/download";

/// Packaged wallet archive published with every release
pub const WALLET_PACKAGE: &str = "mollywallet.zip";

/// SHA-256 of the packaged archive, published next to it
pub const CHECKSUM_FILE: &str = "checksum.sha256";

/// Constellation wallet SDK (Java) release
pub const CL_SDK_URL: &str = "https://github.com/Constellation-Labs/constellation/releases/download/v2.6.0";

/// SDK jars downloaded into the .dag folder
pub const CL_SDK_FILES: &[&str] = &["cl-keytool.jar", "cl-wallet.jar"];

// ----------------------------------------------------------------------------
// INSTALLATION LAYOUT
// ----------------------------------------------------------------------------

/// Wallet folder in the user's home directory
pub const DAG_DIR_NAME: &str = ".dag";

/// Staging folder in the user's home directory
pub const TMP_DIR_NAME: &str = ".tmp";

/// Folder inside the staging folder that receives the unpacked archive
pub const EXTRACT_DIR_NAME: &str = "new_build";

/// Wallet executable name (without platform extension)
pub const WALLET_BINARY: &str = "mollywallet";

/// Self-update executable name (without platform extension)
pub const UPDATE_BINARY: &str = "update";

/// macOS application bundle shipped in the archive and copied to /Applications
pub const MACOS_APP_NAME: &str = "Molly - Constellation Desktop Wallet.app";

/// Windows shortcut name
pub const SHORTCUT_NAME: &str = "Molly Wallet.lnk";

/// Debug log name inside the .dag folder
pub const INSTALL_LOG_NAME: &str = "install.log";

/// Leftovers of earlier installs, removed before a new install
pub const STALE_INSTALL_FILES: &[&str] = &[
    "cl-keytool.jar.tmp",
    "cl-keytool.jar",
    "cl-wallet.jar",
    "cl-wallet.jar.tmp",
    "mollywallet.zip",
    "mollywallet.zip.tmp",
    "Molly Wallet.lnk",
    "mollywallet.exe",
];

/// Free space needed in the home directory before downloading
/// (package + SDK jars + unpacked copy, with headroom)
pub const REQUIRED_DISK_SPACE: u64 = 512 * 1_048_576;

/// Attempts at replacing the wallet binary (a running wallet may hold it)
pub const BINARY_COPY_ATTEMPTS: usize = 5;

/// Pause between "Installation Complete" and closing the window
pub const CLOSE_DELAY_SECS: u64 = 5;

/// Install artifacts removed once the wallet is in place
pub const CLEANUP_FILES: &[&str] = &["mollywallet.zip", "checksum.sha256"];

/// Everything the wallet writes into .dag, removed on uninstall
pub const UNINSTALL_FILES: &[&str] = &[
    "update.log",
    "wallet.log",
    "install.log",
    "store.db",
    "cl-keytool.jar.tmp",
    "cl-keytool.jar",
    "cl-wallet.jar",
    "cl-wallet.jar.tmp",
    "mollywallet.zip",
    "mollywallet.zip.tmp",
    "checksum.sha256",
    "Molly Wallet.lnk",
    "mollywallet.exe",
    "mollywallet",
    "update",
    "update.exe",
];

// ============================================================================
// THEME SETUP (internal use)
// ============================================================================

pub fn setup_theme(ctx: &egui::Context) {
    use egui_thematic::ThemeConfig;

    ctx.set_visuals(ThemeConfig::gruvbox_dark_preset().to_visuals());
}
