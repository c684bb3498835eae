// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("{0} cancelled")]
    Cancelled(&'static str),

    #[error("the OS is not supported")]
    UnsupportedOs,

    #[error("unable to locate the user's home directory")]
    NoHomeDir,

    #[error("failed to send HTTP request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {0}")]
    GitHubStatus(reqwest::StatusCode),

    #[error("unexpected release tag: {0:?}")]
    InvalidTag(String),

    #[error("download of {url} failed: {status}")]
    DownloadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("checksum file {0:?} is empty")]
    EmptyChecksum(PathBuf),

    #[error("checksum mismatch, corrupted download (expected {expected}, got {actual})")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("insufficient disk space: need {required_mb} MB, {available_mb} MB available")]
    InsufficientSpace { required_mb: u64, available_mb: u64 },

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Command(String),

    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl InstallError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, InstallError::Cancelled(_))
    }
}

/// Attach a message to an I/O error, in the spirit of `anyhow::Context`.
pub trait IoContext<T> {
    fn io_context<F>(self, context: F) -> Result<T, InstallError>
    where
        F: FnOnce() -> String;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<F>(self, context: F) -> Result<T, InstallError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| InstallError::Io {
            context: context(),
            source,
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches {0:?}")]
    Unknown(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("the installer UI has already been mounted")]
    AlreadyMounted,
}
