use crate::error::{InstallError, IoContext};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyProgress {
    Started { total_bytes: u64, total_files: u64 },
    Progress { copied_bytes: u64, total_bytes: u64, current_file: String },
    Completed,
    Cancelled,
}

/// Recursively collect all files in a directory (including hidden files)
fn collect_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files_recursive(dir, &mut files)?;
    Ok(files)
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    if dir.is_dir() {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                collect_files_recursive(&path, files)?;
            } else {
                files.push(path);
            }
        }
    }
    Ok(())
}

/// Copy a single file, creating the destination's parent folder.
/// Retries with a growing pause since a running wallet may still hold the old binary.
pub async fn copy_file_with_retry(src: &Path, dest: &Path, attempts: usize) -> Result<u64, InstallError> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .io_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let mut delay = Duration::from_millis(500);
    let mut attempt = 1;
    loop {
        match tokio::fs::copy(src, dest).await {
            Ok(bytes) => return Ok(bytes),
            Err(e) if attempt < attempts.max(1) => {
                crate::debug::log(&format!(
                    "Copy {:?} -> {:?} failed (attempt {}/{}): {}",
                    src, dest, attempt, attempts, e
                ));
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, Duration::from_secs(5));
                attempt += 1;
            }
            Err(e) => {
                return Err(InstallError::Io {
                    context: format!("Failed to copy {:?} to {:?}", src, dest),
                    source: e,
                });
            }
        }
    }
}

/// Copy all files from source to destination with progress reporting
pub async fn copy_directory(
    source_dir: &Path,
    dest_dir: &Path,
    progress_tx: mpsc::UnboundedSender<CopyProgress>,
    cancel_token: CancellationToken,
) -> Result<(), InstallError> {
    crate::debug::log(&format!("Copying directory {:?} -> {:?}", source_dir, dest_dir));

    let files = collect_files(source_dir)
        .io_context(|| format!("Failed to scan source directory {:?}", source_dir))?;

    let total_files = files.len() as u64;
    let total_bytes: u64 = files
        .iter()
        .filter_map(|f| std::fs::metadata(f).ok())
        .map(|m| m.len())
        .sum();

    crate::debug::log(&format!("Found {} files, {} bytes total", total_files, total_bytes));
    let _ = progress_tx.send(CopyProgress::Started { total_bytes, total_files });

    std::fs::create_dir_all(dest_dir)
        .io_context(|| format!("Failed to create destination directory {:?}", dest_dir))?;

    let mut copied_bytes: u64 = 0;

    for file_path in &files {
        if cancel_token.is_cancelled() {
            crate::debug::log("Copy cancelled by user");
            let _ = progress_tx.send(CopyProgress::Cancelled);
            return Err(InstallError::Cancelled("Copy"));
        }

        let relative_path = file_path
            .strip_prefix(source_dir)
            .map_err(|e| InstallError::Command(format!("Failed to get relative path: {}", e)))?;
        let dest_path = dest_dir.join(relative_path);

        let _ = progress_tx.send(CopyProgress::Progress {
            copied_bytes,
            total_bytes,
            current_file: relative_path.to_string_lossy().to_string(),
        });

        copied_bytes += copy_file_with_retry(file_path, &dest_path, 1).await?;
    }

    let _ = progress_tx.send(CopyProgress::Completed);
    crate::debug::log("Copy completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_directory_keeps_structure() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("Molly.app");
        std::fs::create_dir_all(app.join("Contents/MacOS")).unwrap();
        std::fs::write(app.join("Contents/Info.plist"), b"plist").unwrap();
        std::fs::write(app.join("Contents/MacOS/mollywallet"), b"binary").unwrap();

        let dest = dir.path().join("Applications/Molly.app");
        let (tx, mut rx) = mpsc::unbounded_channel();
        copy_directory(&app, &dest, tx, CancellationToken::new()).await.unwrap();

        assert_eq!(std::fs::read(dest.join("Contents/MacOS/mollywallet")).unwrap(), b"binary");
        assert_eq!(std::fs::read(dest.join("Contents/Info.plist")).unwrap(), b"plist");
        assert_eq!(
            rx.try_recv().unwrap(),
            CopyProgress::Started { total_bytes: 11, total_files: 2 }
        );
    }

    #[tokio::test]
    async fn test_copy_directory_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("a"), b"a").unwrap();

        let token = CancellationToken::new();
        token.cancel();
        let (tx, _rx) = mpsc::unbounded_channel();
        let err = copy_directory(&src, &dir.path().join("dest"), tx, token).await.unwrap_err();
        assert!(err.is_cancelled());
        assert!(!dir.path().join("dest/a").exists());
    }

    #[tokio::test]
    async fn test_copy_file_with_retry_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("mollywallet");
        let err = copy_file_with_retry(&missing, &dir.path().join("out/mollywallet"), 2)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to copy"));
    }
}
