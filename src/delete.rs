// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::error::{InstallError, IoContext};
use std::path::{Path, PathBuf};

/// Remove the named files from `dir`. Missing files and empty names are skipped.
pub async fn remove_files(dir: &Path, files: &[&str]) -> Result<usize, InstallError> {
    let mut removed = 0;

    for name in files.iter().filter(|n| !n.is_empty()) {
        let path = dir.join(name);
        if !path.is_file() && !path.is_symlink() {
            continue;
        }

        tokio::fs::remove_file(&path)
            .await
            .io_context(|| format!("Failed to delete {:?}", path))?;
        crate::debug::log(&format!("Deleted file: {:?}", path));
        removed += 1;
    }

    Ok(removed)
}

pub async fn remove_file(dir: &Path, name: &str) -> Result<bool, InstallError> {
    Ok(remove_files(dir, &[name]).await? == 1)
}

/// Remove each folder if it exists. Folders are only removed when empty,
/// so anything the wallet wrote that we don't know about is kept.
pub async fn remove_folders(folders: &[PathBuf]) -> Result<usize, InstallError> {
    let mut removed = 0;

    for folder in folders {
        if folder.as_os_str().is_empty() || !folder.is_dir() {
            continue;
        }

        tokio::fs::remove_dir(folder)
            .await
            .io_context(|| format!("Failed to delete folder {:?}", folder))?;
        crate::debug::log(&format!("Deleted folder: {:?}", folder));
        removed += 1;
    }

    Ok(removed)
}

/// Recursive removal, for staging folders we own entirely
pub async fn remove_tree(path: &Path) -> Result<(), InstallError> {
    if !path.exists() {
        return Ok(());
    }

    crate::debug::log(&format!("Deleting directory tree: {:?}", path));
    tokio::fs::remove_dir_all(path)
        .await
        .io_context(|| format!("Failed to delete {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_remove_files_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cl-wallet.jar"), b"jar").unwrap();
        std::fs::write(dir.path().join("store.db"), b"keep").unwrap();

        let removed = remove_files(dir.path(), &["", "cl-wallet.jar", "mollywallet.zip"]).await.unwrap();

        assert_eq!(removed, 1);
        assert!(!dir.path().join("cl-wallet.jar").exists());
        assert!(dir.path().join("store.db").exists());
        assert!(!remove_file(dir.path(), "cl-wallet.jar").await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_folders_only_removes_empty() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("tmp");
        let dag = dir.path().join(".dag");
        std::fs::create_dir_all(&empty).unwrap();
        std::fs::create_dir_all(&dag).unwrap();
        std::fs::write(dag.join("store.db"), b"keep").unwrap();

        assert_eq!(remove_folders(&[PathBuf::new(), empty.clone()]).await.unwrap(), 1);
        assert!(!empty.exists());

        assert!(remove_folders(&[dag.clone()]).await.is_err());
        assert!(dag.join("store.db").exists());
    }

    #[tokio::test]
    async fn test_remove_tree() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join(".tmp");
        std::fs::create_dir_all(staging.join("new_build")).unwrap();
        std::fs::write(staging.join("new_build/mollywallet"), b"bin").unwrap();

        remove_tree(&staging).await.unwrap();
        assert!(!staging.exists());
        remove_tree(&staging).await.unwrap();
    }
}
