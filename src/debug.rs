// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

// Centralized debug logging for the Molly Wallet installer
// Logs are written to a temp file and copied into the .dag folder after installation

use crate::config::INSTALL_LOG_NAME;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref DEBUG_LOG: Mutex<DebugLog> = Mutex::new(DebugLog::new());
}

const LOG_FILE_NAME: &str = "molly_installer_debug.txt";

pub struct DebugLog {
    path: PathBuf,
    enabled: bool,
}

impl DebugLog {
    fn new() -> Self {
        let path = std::env::temp_dir().join(LOG_FILE_NAME);

        // Clear existing log and write header
        if let Ok(mut f) = std::fs::File::create(&path) {
            let _ = writeln!(f, "=== Molly Wallet Installer Debug Log ===");
            let _ = writeln!(f, "Log file: {:?}", path);
            let _ = writeln!(f, "Version: {}", env!("CARGO_PKG_VERSION"));
            let _ = writeln!(f, "Platform: {}", std::env::consts::OS);
            let _ = writeln!(f, "Arch: {}", std::env::consts::ARCH);
            let _ = writeln!(f);
        }

        Self {
            path,
            enabled: !cfg!(test),
        }
    }
}

/// Log a debug message
pub fn log(message: &str) {
    if let Ok(debug_log) = DEBUG_LOG.lock() {
        if debug_log.enabled {
            if let Ok(mut f) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&debug_log.path)
            {
                let timestamp = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                let _ = writeln!(f, "[{}] {}", timestamp, message);
            }
        }
    }
}

/// Log a section header
pub fn log_section(section: &str) {
    log(&format!("\n=== {} ===", section));
}

/// Get the path to the debug log file
pub fn get_log_path() -> PathBuf {
    if let Ok(debug_log) = DEBUG_LOG.lock() {
        debug_log.path.clone()
    } else {
        std::env::temp_dir().join(LOG_FILE_NAME)
    }
}

/// Copy the debug log into the wallet folder as install.log
pub fn copy_log_to(dest_dir: &Path) -> Result<PathBuf, String> {
    let log_path = get_log_path();
    let dest_path = dest_dir.join(INSTALL_LOG_NAME);

    log(&format!("Copying debug log to {:?}", dest_path));

    std::fs::copy(&log_path, &dest_path)
        .map_err(|e| format!("Failed to copy debug log: {}", e))?;

    Ok(dest_path)
}
