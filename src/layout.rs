// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::config::{
    DAG_DIR_NAME, EXTRACT_DIR_NAME, MACOS_APP_NAME, SHORTCUT_NAME, TMP_DIR_NAME, WALLET_BINARY,
};
use crate::error::InstallError;
use std::path::{Path, PathBuf};

/// Release flavour published for each OS (`v1.1.9-linux`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsBuild {
    Darwin,
    Linux,
    Windows,
    Unsupported,
}

impl OsBuild {
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "darwin" => OsBuild::Darwin,
            "linux" => OsBuild::Linux,
            "windows" => OsBuild::Windows,
            _ => OsBuild::Unsupported,
        }
    }

    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OsBuild::Darwin => "darwin",
            OsBuild::Linux => "linux",
            OsBuild::Windows => "windows",
            OsBuild::Unsupported => "unsupported",
        }
    }

    pub fn exe_ext(self) -> &'static str {
        match self {
            OsBuild::Windows => ".exe",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsSettings {
    pub os_build: OsBuild,
    /// Where the wallet executable ends up
    pub binary_path: PathBuf,
    pub start_menu_dir: Option<PathBuf>,
    pub desktop_dir: Option<PathBuf>,
    /// `.lnk` on Windows, the `.app` bundle on macOS
    pub shortcut_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub dag_dir: PathBuf,
    pub tmp_dir: PathBuf,
    pub os: OsSettings,
}

impl InstallLayout {
    pub fn detect() -> Result<Self, InstallError> {
        let home = dirs::home_dir().ok_or(InstallError::NoHomeDir)?;
        Ok(Self::for_home(&home, OsBuild::current()))
    }

    pub fn for_home(home: &Path, os_build: OsBuild) -> Self {
        let dag_dir = home.join(DAG_DIR_NAME);
        let tmp_dir = home.join(TMP_DIR_NAME);

        let os = match os_build {
            OsBuild::Darwin => OsSettings {
                os_build,
                binary_path: PathBuf::from("/usr/local/bin").join(WALLET_BINARY),
                start_menu_dir: None,
                desktop_dir: None,
                shortcut_path: Some(PathBuf::from("/Applications").join(MACOS_APP_NAME)),
            },
            OsBuild::Linux => OsSettings {
                os_build,
                binary_path: PathBuf::from("/usr/local/bin").join(WALLET_BINARY),
                start_menu_dir: None,
                desktop_dir: None,
                shortcut_path: None,
            },
            OsBuild::Windows => OsSettings {
                os_build,
                binary_path: dag_dir.join(format!("{}.exe", WALLET_BINARY)),
                start_menu_dir: Some(
                    home.join("AppData")
                        .join("Roaming")
                        .join("Microsoft")
                        .join("Windows")
                        .join("Start Menu")
                        .join("Programs"),
                ),
                desktop_dir: Some(home.join("Desktop")),
                shortcut_path: Some(dag_dir.join(SHORTCUT_NAME)),
            },
            OsBuild::Unsupported => OsSettings {
                os_build,
                binary_path: dag_dir.clone(),
                start_menu_dir: None,
                desktop_dir: None,
                shortcut_path: None,
            },
        };

        Self { dag_dir, tmp_dir, os }
    }

    pub fn extract_dir(&self) -> PathBuf {
        self.tmp_dir.join(EXTRACT_DIR_NAME)
    }

    /// Executable to start once the install is done
    pub fn launch_path(&self) -> PathBuf {
        match (&self.os.os_build, &self.os.shortcut_path) {
            (OsBuild::Darwin, Some(app)) => app.join("Contents").join("MacOS").join(WALLET_BINARY),
            _ => self.os.binary_path.clone(),
        }
    }
}
