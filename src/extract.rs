use crate::config::{MACOS_APP_NAME, UPDATE_BINARY, WALLET_BINARY};
use crate::error::{InstallError, IoContext};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractProgress {
    Started { total_entries: usize },
    Extracting { index: usize, total_entries: usize },
    Completed,
}

/// Where the interesting parts of the wallet package landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnzippedContents {
    pub wallet_binary: PathBuf,
    pub update_binary: PathBuf,
    pub macos_app: PathBuf,
}

impl UnzippedContents {
    pub fn in_dir(dest_dir: &Path, exe_ext: &str) -> Self {
        Self {
            wallet_binary: dest_dir.join(format!("{}{}", WALLET_BINARY, exe_ext)),
            update_binary: dest_dir.join(format!("{}{}", UPDATE_BINARY, exe_ext)),
            macos_app: dest_dir.join(MACOS_APP_NAME),
        }
    }
}

pub async fn extract_zip(
    archive_path: &Path,
    dest_dir: &Path,
    exe_ext: &str,
    progress_tx: mpsc::UnboundedSender<ExtractProgress>,
) -> Result<UnzippedContents, InstallError> {
    let archive_path = archive_path.to_path_buf();
    let dest = dest_dir.to_path_buf();

    // zip is synchronous, keep it off the async workers
    tokio::task::spawn_blocking(move || extract_zip_sync(&archive_path, &dest, progress_tx)).await??;

    Ok(UnzippedContents::in_dir(dest_dir, exe_ext))
}

fn extract_zip_sync(
    archive_path: &Path,
    dest_dir: &Path,
    progress_tx: mpsc::UnboundedSender<ExtractProgress>,
) -> Result<(), InstallError> {
    crate::debug::log(&format!("Extracting {:?} -> {:?}", archive_path, dest_dir));

    let file = std::fs::File::open(archive_path)
        .io_context(|| format!("Archive not found: {:?}", archive_path))?;
    let mut archive = zip::ZipArchive::new(file)?;

    std::fs::create_dir_all(dest_dir)
        .io_context(|| format!("Failed to create destination directory {:?}", dest_dir))?;

    let total_entries = archive.len();
    let _ = progress_tx.send(ExtractProgress::Started { total_entries });

    for index in 0..total_entries {
        let mut entry = archive.by_index(index)?;

        let Some(relative) = entry.enclosed_name() else {
            crate::debug::log(&format!("WARNING: skipping unsafe archive entry {:?}", entry.name()));
            continue;
        };
        let out_path = dest_dir.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)
                .io_context(|| format!("Failed to create {:?}", out_path))?;
        } else {
            if let Some(parent) = out_path.parent() {
                std::fs::create_dir_all(parent)
                    .io_context(|| format!("Failed to create {:?}", parent))?;
            }
            let mut out = std::fs::File::create(&out_path)
                .io_context(|| format!("Failed to create {:?}", out_path))?;
            std::io::copy(&mut entry, &mut out)
                .io_context(|| format!("Failed to write {:?}", out_path))?;
        }

        // Executables need to keep their mode bits. Directories stay
        // traversable by the owner so their children can still be written.
        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            let mode = if entry.is_dir() {
                (mode & 0o7777) | 0o700
            } else {
                mode & 0o7777
            };
            std::fs::set_permissions(&out_path, std::fs::Permissions::from_mode(mode))
                .io_context(|| format!("Failed to set permissions on {:?}", out_path))?;
        }

        let _ = progress_tx.send(ExtractProgress::Extracting { index: index + 1, total_entries });
    }

    let _ = progress_tx.send(ExtractProgress::Completed);
    crate::debug::log(&format!("Extracted {} entries", total_entries));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_package(path: &Path) {
        let file = std::fs::File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let exec = SimpleFileOptions::default().unix_permissions(0o755);

        zip.start_file("mollywallet", exec).unwrap();
        zip.write_all(b"wallet").unwrap();
        zip.start_file("update", exec).unwrap();
        zip.write_all(b"updater").unwrap();
        zip.add_directory("assets/", SimpleFileOptions::default()).unwrap();
        zip.start_file("assets/readme.txt", SimpleFileOptions::default()).unwrap();
        zip.write_all(b"hi").unwrap();
        zip.finish().unwrap();
    }

    #[tokio::test]
    async fn test_extract_package() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("mollywallet.zip");
        let dest = dir.path().join("new_build");
        write_package(&archive);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let contents = extract_zip(&archive, &dest, "", tx).await.unwrap();

        assert_eq!(contents.wallet_binary, dest.join("mollywallet"));
        assert_eq!(std::fs::read(&contents.wallet_binary).unwrap(), b"wallet");
        assert_eq!(std::fs::read(&contents.update_binary).unwrap(), b"updater");
        assert_eq!(std::fs::read(dest.join("assets/readme.txt")).unwrap(), b"hi");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&contents.wallet_binary).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }

        assert_eq!(rx.try_recv().unwrap(), ExtractProgress::Started { total_entries: 4 });
        let mut last = None;
        while let Ok(p) = rx.try_recv() {
            last = Some(p);
        }
        assert_eq!(last, Some(ExtractProgress::Completed));
    }

    #[tokio::test]
    async fn test_extract_skips_entries_outside_destination() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("mollywallet.zip");
        let dest = dir.path().join("new_build");

        let file = std::fs::File::create(&archive).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("../evil", SimpleFileOptions::default()).unwrap();
        zip.write_all(b"escaped").unwrap();
        zip.start_file("mollywallet", SimpleFileOptions::default()).unwrap();
        zip.write_all(b"wallet").unwrap();
        zip.finish().unwrap();

        let (tx, _rx) = mpsc::unbounded_channel();
        let contents = extract_zip(&archive, &dest, "", tx).await.unwrap();

        assert!(!dir.path().join("evil").exists());
        assert!(!dest.join("evil").exists());
        assert_eq!(std::fs::read(&contents.wallet_binary).unwrap(), b"wallet");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_extract_keeps_directories_writable() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("mollywallet.zip");
        let dest = dir.path().join("new_build");

        let file = std::fs::File::create(&archive).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.add_directory("resources/", SimpleFileOptions::default().unix_permissions(0o644))
            .unwrap();
        zip.start_file("resources/icon.png", SimpleFileOptions::default()).unwrap();
        zip.write_all(b"png").unwrap();
        zip.finish().unwrap();

        let (tx, _rx) = mpsc::unbounded_channel();
        extract_zip(&archive, &dest, "", tx).await.unwrap();

        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(dest.join("resources")).unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o700);
        assert_eq!(std::fs::read(dest.join("resources/icon.png")).unwrap(), b"png");
    }

    #[tokio::test]
    async fn test_extract_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("mollywallet.zip");
        std::fs::write(&archive, b"not a zip").unwrap();

        let (tx, _rx) = mpsc::unbounded_channel();
        let err = extract_zip(&archive, &dir.path().join("out"), "", tx).await.unwrap_err();
        assert!(matches!(err, InstallError::Archive(_)));
    }
}
