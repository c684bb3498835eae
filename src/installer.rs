// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

// ============================================================================
// INSTALL / UNINSTALL PIPELINE
// ============================================================================
// Everything here runs on the tokio runtime owned by the UI. Progress and
// notifications only ever leave through the Bridge; the UI turns them into
// store updates and dialogs.
//
// Install steps and the progress shown for each:
//    8%  Java check (Windows installs Java through scoop when missing)
//   33%  prepare .dag / .tmp
//   35%  download mollywallet.zip for this OS
//   42%  download the Constellation SDK jars (failure is not fatal)
//   86%  download checksum.sha256 and verify the package
//   95%  unzip into .tmp/new_build
//   98%  copy binaries, shortcuts, macOS .app
//  100%  launch the wallet, clean up
// ============================================================================

use crate::bridge::{Bridge, Outcome};
use crate::checksum::verify_checksum;
use crate::config::{
    BINARY_COPY_ATTEMPTS, CHECKSUM_FILE, CLEANUP_FILES, CL_SDK_FILES, CL_SDK_URL, REQUIRED_DISK_SPACE,
    SHORTCUT_NAME, STALE_INSTALL_FILES, UNINSTALL_FILES, UPDATE_BINARY, WALLET_PACKAGE, WALLET_REPO,
};
use crate::copy::{copy_directory, copy_file_with_retry, CopyProgress};
use crate::delete::{remove_file, remove_files, remove_folders, remove_tree};
use crate::disk::{available_space, ensure_space};
use crate::error::{InstallError, IoContext};
use crate::extract::{extract_zip, ExtractProgress, UnzippedContents};
use crate::github::{download_file, get_latest_release, release_asset_url, release_version, DownloadProgress};
use crate::java::{install_java, java_installed};
use crate::layout::{InstallLayout, OsBuild};
use crate::shortcuts::create_windows_shortcut;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Map `done / total` onto the `from..to` slice of the progress bar
pub fn scale_percent(done: u64, total: u64, from: u8, to: u8) -> u8 {
    if total == 0 || to <= from {
        return from;
    }
    let span = (to - from) as u64;
    let step = done.min(total) * span / total;
    from + step as u8
}

fn check_cancelled(cancel: &CancellationToken) -> Result<(), InstallError> {
    if cancel.is_cancelled() {
        return Err(InstallError::Cancelled("Installation"));
    }
    Ok(())
}

pub struct Installer {
    layout: InstallLayout,
    bridge: Bridge,
    client: reqwest::Client,
    /// Free bytes needed in the home directory before downloading
    required_space: u64,
}

impl Installer {
    pub fn new(layout: InstallLayout, bridge: Bridge) -> Self {
        Self {
            layout,
            bridge,
            client: reqwest::Client::new(),
            required_space: REQUIRED_DISK_SPACE,
        }
    }

    pub fn with_required_space(mut self, bytes: u64) -> Self {
        self.required_space = bytes;
        self
    }

    /// Send an error notification for a failed step, unless the user cancelled
    fn report(&self, title: &str, err: InstallError) -> InstallError {
        if !err.is_cancelled() {
            self.bridge.send_error_notification(title, &err.to_string());
        }
        err
    }

    pub async fn run(&self, cancel: CancellationToken) -> Outcome {
        crate::debug::log_section("Installation Started");
        crate::debug::log(&format!("Layout: {:?}", self.layout));

        match self.run_steps(&cancel).await {
            Ok(()) => Outcome::Completed,
            Err(e) if e.is_cancelled() => {
                crate::debug::log("Installation cancelled by user");
                if let Err(e) = remove_tree(&self.layout.tmp_dir).await {
                    crate::debug::log(&format!("WARNING: {}", e));
                }
                self.bridge.send_status_msg("Installation cancelled");
                Outcome::Cancelled
            }
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    async fn run_steps(&self, cancel: &CancellationToken) -> Result<(), InstallError> {
        let os_build = self.layout.os.os_build;
        if os_build == OsBuild::Unsupported {
            return Err(self.report("Unable to install Molly Wallet", InstallError::UnsupportedOs));
        }

        self.bridge.update_progress(8, "Checking Java Installation...");
        if os_build == OsBuild::Windows && !java_installed().await {
            self.bridge.update_progress(10, "Java not found. Installing Java (This may take some time)...");
            install_java()
                .await
                .map_err(|e| self.report("Unable to install Java", e))?;
        }
        check_cancelled(cancel)?;

        self.bridge.update_progress(33, "Preparing filesystem...");
        self.prepare_fs()
            .await
            .map_err(|e| self.report("Unable to prepare filesystem", e))?;
        check_cancelled(cancel)?;

        self.bridge.update_progress(35, "Downloading packages...");
        let release = get_latest_release(&self.client, WALLET_REPO)
            .await
            .map_err(|e| self.report("Unable to fetch the latest release", e))?;
        let version = release_version(&release.tag_name)
            .map_err(|e| self.report("Unable to fetch the latest release", e))?;
        crate::debug::log(&format!(
            "Latest release: {} ({})",
            release.name.as_deref().unwrap_or(&release.tag_name),
            version
        ));

        let archive = self
            .download_app_package(&version, cancel)
            .await
            .map_err(|e| self.report("Unable to download Molly Wallet package", e))?;

        self.bridge.update_progress(42, "Downloading the wallet SDK...");
        if let Err(e) = self.fetch_wallet_cli(cancel).await {
            if e.is_cancelled() {
                return Err(e);
            }
            // The wallet still starts without the SDK, it only limits what it can do
            self.report("Unable to download CL files", e);
        }

        self.bridge.update_progress(86, "Verifying Checksum...");
        self.verify_package(&archive, &version, cancel)
            .await
            .map_err(|e| self.report("Checksum mismatch. Corrupted download", e))?;

        self.bridge.update_progress(95, "Extracting contents...");
        let contents = self
            .extract_package(&archive)
            .await
            .map_err(|e| self.report("Unable to unzip contents", e))?;
        check_cancelled(cancel)?;

        self.bridge.update_progress(98, "Copy binaries...");
        self.copy_app_binaries(&contents, cancel)
            .await
            .map_err(|e| self.report("Unable to overwrite old installation", e))?;

        self.bridge.update_progress(100, "Installation Complete! Launching Molly Wallet...");
        self.bridge
            .send_success_notification("Success!", "Molly wallet has been successfully installed.");

        if let Err(e) = crate::debug::copy_log_to(&self.layout.dag_dir) {
            crate::debug::log(&format!("WARNING: {}", e));
        }

        if let Err(e) = self.launch_wallet() {
            self.report("Unable to start up Molly after Install", e);
        }

        self.clean_up()
            .await
            .map_err(|e| self.report("Unable to clear previous local state", e))?;

        crate::debug::log("Installation complete!");
        Ok(())
    }

    /// Remove leftovers of earlier attempts and make sure .dag exists
    pub async fn prepare_fs(&self) -> Result<(), InstallError> {
        crate::debug::log_section("Preparing Filesystem");
        let dag = &self.layout.dag_dir;

        if dag.exists() {
            if let Err(e) = remove_files(dag, STALE_INSTALL_FILES).await {
                crate::debug::log(&format!("WARNING: {}", e));
            }
        }

        // A failed previous attempt may have left extracted artifacts behind
        remove_tree(&self.layout.tmp_dir).await?;

        // The old .dag only goes when nothing (e.g. store.db) is left in it
        if let Err(e) = remove_folders(&[dag.clone()]).await {
            crate::debug::log(&format!("Keeping existing wallet folder: {}", e));
        }

        tokio::fs::create_dir_all(dag)
            .await
            .io_context(|| format!("Failed to create {:?}", dag))?;

        if self.layout.os.os_build == OsBuild::Darwin {
            if let Some(app) = &self.layout.os.shortcut_path {
                remove_tree(app).await?;
            }
        }

        let home = dag.parent().unwrap_or(dag);
        ensure_space(available_space(home), self.required_space)
    }

    async fn download_with_progress(
        &self,
        url: &str,
        dest: &Path,
        from: u8,
        to: u8,
        cancel: &CancellationToken,
    ) -> Result<(), InstallError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<DownloadProgress>();
        let bridge = self.bridge.clone();

        // Spawn download progress handler
        let handle = tokio::spawn(async move {
            let mut last = from;
            while let Some(prog) = rx.recv().await {
                match prog {
                    DownloadProgress::Started { total_bytes } => {
                        crate::debug::log(&format!("Download size: {:?} bytes", total_bytes));
                    }
                    DownloadProgress::Progress { downloaded, total: Some(total) } => {
                        let percent = scale_percent(downloaded, total, from, to);
                        if percent != last {
                            last = percent;
                            bridge.send_progress(percent);
                        }
                    }
                    DownloadProgress::Completed => bridge.send_progress(to),
                    DownloadProgress::Progress { total: None, .. } | DownloadProgress::Cancelled => {}
                }
            }
        });

        let result = download_file(&self.client, url, dest, tx, cancel.clone()).await;
        let _ = handle.await;
        result
    }

    /// Download mollywallet.zip for this OS into .dag
    async fn download_app_package(&self, version: &str, cancel: &CancellationToken) -> Result<PathBuf, InstallError> {
        let url = release_asset_url(version, self.layout.os.os_build.as_str(), WALLET_PACKAGE);
        crate::debug::log(&format!("Constructed the following URL: {}", url));

        let dest = self.layout.dag_dir.join(WALLET_PACKAGE);
        self.download_with_progress(&url, &dest, 35, 41, cancel).await?;
        Ok(dest)
    }

    /// Download the Constellation SDK jars into .dag
    async fn fetch_wallet_cli(&self, cancel: &CancellationToken) -> Result<(), InstallError> {
        let per_file = 20 / CL_SDK_FILES.len().max(1) as u8;

        for (i, jar) in CL_SDK_FILES.iter().enumerate() {
            let url = format!("{}/{}", CL_SDK_URL, jar);
            crate::debug::log(&format!("Constructed the following URL: {}", url));

            let from = 42 + per_file * i as u8;
            let dest = self.layout.dag_dir.join(jar);
            self.download_with_progress(&url, &dest, from, from + per_file, cancel)
                .await?;
        }

        let missing: Vec<&str> = CL_SDK_FILES
            .iter()
            .copied()
            .filter(|jar| !self.layout.dag_dir.join(jar).is_file())
            .collect();
        if !missing.is_empty() {
            return Err(InstallError::Command(format!("download failed: {}", missing.join(", "))));
        }
        Ok(())
    }

    async fn verify_package(&self, archive: &Path, version: &str, cancel: &CancellationToken) -> Result<(), InstallError> {
        let url = release_asset_url(version, self.layout.os.os_build.as_str(), CHECKSUM_FILE);
        crate::debug::log(&format!("Constructed the following URL: {}", url));

        let checksum_path = self.layout.dag_dir.join(CHECKSUM_FILE);
        self.download_with_progress(&url, &checksum_path, 86, 86, cancel).await?;

        let archive = archive.to_path_buf();
        tokio::task::spawn_blocking(move || verify_checksum(&archive, &checksum_path)).await?
    }

    async fn extract_package(&self, archive: &Path) -> Result<UnzippedContents, InstallError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<ExtractProgress>();
        let bridge = self.bridge.clone();

        let handle = tokio::spawn(async move {
            while let Some(prog) = rx.recv().await {
                match prog {
                    ExtractProgress::Started { total_entries } => {
                        crate::debug::log(&format!("Archive has {} entries", total_entries));
                    }
                    ExtractProgress::Extracting { index, total_entries } => {
                        bridge.send_status_msg(&format!("Extracting contents... ({}/{})", index, total_entries));
                    }
                    ExtractProgress::Completed => bridge.send_status_msg("Extracting contents..."),
                }
            }
        });

        let result = extract_zip(
            archive,
            &self.layout.extract_dir(),
            self.layout.os.os_build.exe_ext(),
            tx,
        )
        .await;
        let _ = handle.await;
        result
    }

    /// Put the wallet and update binaries in place, plus shortcuts / .app bundle
    pub async fn copy_app_binaries(
        &self,
        contents: &UnzippedContents,
        cancel: &CancellationToken,
    ) -> Result<(), InstallError> {
        crate::debug::log_section("Copying Binaries");
        let os = &self.layout.os;

        copy_file_with_retry(&contents.wallet_binary, &os.binary_path, BINARY_COPY_ATTEMPTS).await?;

        // Replace old update binary with the new one
        if contents.update_binary.is_file() {
            let dest = self
                .layout
                .dag_dir
                .join(format!("{}{}", UPDATE_BINARY, os.os_build.exe_ext()));
            copy_file_with_retry(&contents.update_binary, &dest, 1).await?;
        }

        match os.os_build {
            OsBuild::Darwin => {
                if let Some(app) = &os.shortcut_path {
                    let (tx, mut rx) = mpsc::unbounded_channel::<CopyProgress>();
                    let bridge = self.bridge.clone();
                    let handle = tokio::spawn(async move {
                        while let Some(prog) = rx.recv().await {
                            match prog {
                                CopyProgress::Started { total_bytes, total_files } => {
                                    crate::debug::log(&format!(
                                        "Copying {} files ({} bytes) to /Applications",
                                        total_files, total_bytes
                                    ));
                                }
                                CopyProgress::Progress { current_file, copied_bytes, total_bytes } => {
                                    crate::debug::log(&format!("[{}/{}] {}", copied_bytes, total_bytes, current_file));
                                    bridge.send_status_msg(&format!("Copy binaries... {}", current_file));
                                }
                                CopyProgress::Completed | CopyProgress::Cancelled => {}
                            }
                        }
                    });
                    let result = copy_directory(&contents.macos_app, app, tx, cancel.clone()).await;
                    let _ = handle.await;
                    result?;
                }
            }
            OsBuild::Windows => {
                if let Some(shortcut) = &os.shortcut_path {
                    create_windows_shortcut(&os.binary_path, shortcut).await?;
                    for dir in [&os.start_menu_dir, &os.desktop_dir].into_iter().flatten() {
                        copy_file_with_retry(shortcut, &dir.join(SHORTCUT_NAME), 1).await?;
                    }
                }
            }
            OsBuild::Linux | OsBuild::Unsupported => {}
        }

        Ok(())
    }

    pub fn launch_wallet(&self) -> Result<(), InstallError> {
        let path = self.layout.launch_path();
        crate::debug::log(&format!("Launching {:?}", path));

        std::process::Command::new(&path)
            .spawn()
            .io_context(|| format!("unable to execute run command for Molly Wallet ({:?})", path))?;
        Ok(())
    }

    /// Remove install artifacts
    pub async fn clean_up(&self) -> Result<(), InstallError> {
        remove_files(&self.layout.dag_dir, CLEANUP_FILES).await?;
        remove_tree(&self.layout.tmp_dir).await
    }

    /// Remove the wallet files, folders and shortcuts
    pub async fn uninstall(&self) -> Outcome {
        crate::debug::log_section("Uninstall");
        let layout = &self.layout;
        let mut failures: Vec<String> = Vec::new();

        self.bridge.update_progress(10, "Removing wallet files...");
        if let Err(e) = remove_files(&layout.dag_dir, UNINSTALL_FILES).await {
            failures.push(self.report("Unable to remove all files", e).to_string());
        }

        // Binaries installed outside .dag (/usr/local/bin on Linux/macOS)
        if !layout.os.binary_path.starts_with(&layout.dag_dir) && layout.os.binary_path.is_file() {
            if let Err(e) = tokio::fs::remove_file(&layout.os.binary_path)
                .await
                .io_context(|| format!("Failed to delete {:?}", layout.os.binary_path))
            {
                failures.push(self.report("Unable to remove the wallet binary", e).to_string());
            }
        }

        if layout.os.os_build == OsBuild::Darwin {
            if let Some(app) = &layout.os.shortcut_path {
                if let Err(e) = remove_tree(app).await {
                    failures.push(self.report("Unable to remove the application bundle", e).to_string());
                }
            }
        }

        self.bridge.update_progress(60, "Removing folders...");
        let folders = [layout.dag_dir.join("tmp"), layout.tmp_dir.clone(), layout.dag_dir.clone()];
        if let Err(e) = remove_folders(&folders).await {
            failures.push(self.report("Unable to remove all folders", e).to_string());
        }

        if layout.os.os_build == OsBuild::Windows {
            for (dir, place) in [
                (&layout.os.start_menu_dir, "start menu"),
                (&layout.os.desktop_dir, "desktop"),
            ] {
                let Some(dir) = dir else { continue };
                if let Err(e) = remove_file(dir, SHORTCUT_NAME).await {
                    let title = format!("Unable to remove shortcut from {}", place);
                    failures.push(self.report(&title, e).to_string());
                }
            }
        }

        self.bridge.update_progress(100, "Uninstall complete");
        if failures.is_empty() {
            self.bridge
                .send_success_notification("Success!", "Molly wallet has been successfully uninstalled.");
            Outcome::Completed
        } else {
            Outcome::Failed(failures.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeEvent, NotificationKind};

    fn test_layout(home: &Path, os_build: OsBuild) -> InstallLayout {
        let mut layout = InstallLayout::for_home(home, os_build);
        layout.os.binary_path = home.join("bin").join("mollywallet");
        if os_build == OsBuild::Darwin {
            layout.os.shortcut_path = Some(home.join("Applications").join("Molly.app"));
        }
        layout
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<BridgeEvent>) -> Vec<BridgeEvent> {
        let mut events = Vec::new();
        while let Ok(e) = rx.try_recv() {
            events.push(e);
        }
        events
    }

    #[test]
    fn test_scale_percent() {
        assert_eq!(scale_percent(0, 100, 35, 41), 35);
        assert_eq!(scale_percent(50, 100, 35, 41), 38);
        assert_eq!(scale_percent(100, 100, 35, 41), 41);
        assert_eq!(scale_percent(500, 100, 35, 41), 41);
        assert_eq!(scale_percent(10, 0, 35, 41), 35);
        assert_eq!(scale_percent(10, 100, 86, 86), 86);
    }

    #[tokio::test]
    async fn test_unsupported_os_fails_with_notification() {
        let home = tempfile::tempdir().unwrap();
        let (bridge, mut rx) = Bridge::new(None);
        let installer = Installer::new(test_layout(home.path(), OsBuild::Unsupported), bridge);

        let outcome = installer.run(CancellationToken::new()).await;
        assert_eq!(outcome, Outcome::Failed("the OS is not supported".to_string()));

        let events = drain(&mut rx);
        assert!(events.iter().any(|e| matches!(
            e,
            BridgeEvent::Notify(n) if n.kind == NotificationKind::Error
        )));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let home = tempfile::tempdir().unwrap();
        let (bridge, mut rx) = Bridge::new(None);
        let installer = Installer::new(test_layout(home.path(), OsBuild::Linux), bridge);

        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(installer.run(token).await, Outcome::Cancelled);

        let events = drain(&mut rx);
        assert!(!events.iter().any(|e| matches!(e, BridgeEvent::Notify(_))));
        assert_eq!(
            events.last(),
            Some(&BridgeEvent::Status("Installation cancelled".to_string()))
        );
    }

    #[tokio::test]
    async fn test_prepare_fs_keeps_wallet_data() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Linux);
        std::fs::create_dir_all(&layout.dag_dir).unwrap();
        std::fs::create_dir_all(layout.extract_dir()).unwrap();
        std::fs::write(layout.dag_dir.join("store.db"), b"keys").unwrap();
        std::fs::write(layout.dag_dir.join("mollywallet.zip.tmp"), b"partial").unwrap();
        std::fs::write(layout.extract_dir().join("mollywallet"), b"old").unwrap();

        let (bridge, _rx) = Bridge::new(None);
        let installer = Installer::new(layout.clone(), bridge);
        installer.prepare_fs().await.unwrap();

        assert!(layout.dag_dir.join("store.db").exists());
        assert!(!layout.dag_dir.join("mollywallet.zip.tmp").exists());
        assert!(!layout.tmp_dir.exists());
    }

    #[tokio::test]
    async fn test_prepare_fs_creates_dag() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Linux);
        let (bridge, _rx) = Bridge::new(None);
        Installer::new(layout.clone(), bridge).prepare_fs().await.unwrap();
        assert!(layout.dag_dir.is_dir());
    }

    #[tokio::test]
    async fn test_prepare_fs_needs_free_space() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Linux);
        let (bridge, _rx) = Bridge::new(None);

        let err = Installer::new(layout, bridge)
            .with_required_space(u64::MAX)
            .prepare_fs()
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::InsufficientSpace { .. }));
    }

    #[tokio::test]
    async fn test_low_disk_space_stops_before_download() {
        let home = tempfile::tempdir().unwrap();
        let (bridge, mut rx) = Bridge::new(None);
        let installer = Installer::new(test_layout(home.path(), OsBuild::Linux), bridge)
            .with_required_space(u64::MAX);

        let outcome = installer.run(CancellationToken::new()).await;
        assert!(matches!(&outcome, Outcome::Failed(e) if e.starts_with("insufficient disk space")));

        let events = drain(&mut rx);
        assert!(events.iter().any(|e| matches!(
            e,
            BridgeEvent::Notify(n) if n.title == "Unable to prepare filesystem"
        )));
        assert!(events.contains(&BridgeEvent::Progress(33)));
        assert!(!events.contains(&BridgeEvent::Progress(35)));
        assert!(!home.path().join(".dag").join("mollywallet.zip.tmp").exists());
    }

    #[tokio::test]
    async fn test_copy_app_binaries_linux() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Linux);
        let build = layout.extract_dir();
        std::fs::create_dir_all(&build).unwrap();
        std::fs::write(build.join("mollywallet"), b"wallet").unwrap();
        std::fs::write(build.join("update"), b"update").unwrap();

        let (bridge, _rx) = Bridge::new(None);
        let installer = Installer::new(layout.clone(), bridge);
        let contents = UnzippedContents::in_dir(&build, "");
        installer
            .copy_app_binaries(&contents, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(std::fs::read(&layout.os.binary_path).unwrap(), b"wallet");
        assert_eq!(std::fs::read(layout.dag_dir.join("update")).unwrap(), b"update");
    }

    #[tokio::test]
    async fn test_copy_app_binaries_macos_bundle() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Darwin);
        let build = layout.extract_dir();
        let contents = UnzippedContents::in_dir(&build, "");
        std::fs::create_dir_all(contents.macos_app.join("Contents/MacOS")).unwrap();
        std::fs::write(&contents.wallet_binary, b"wallet").unwrap();
        std::fs::write(contents.macos_app.join("Contents/MacOS/mollywallet"), b"app").unwrap();

        let (bridge, _rx) = Bridge::new(None);
        let installer = Installer::new(layout.clone(), bridge);
        installer
            .copy_app_binaries(&contents, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(std::fs::read(layout.launch_path()).unwrap(), b"app");
    }

    #[tokio::test]
    async fn test_clean_up() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Linux);
        std::fs::create_dir_all(layout.extract_dir()).unwrap();
        std::fs::create_dir_all(&layout.dag_dir).unwrap();
        std::fs::write(layout.dag_dir.join("mollywallet.zip"), b"zip").unwrap();
        std::fs::write(layout.dag_dir.join("checksum.sha256"), b"sum").unwrap();
        std::fs::write(layout.dag_dir.join("cl-wallet.jar"), b"jar").unwrap();

        let (bridge, _rx) = Bridge::new(None);
        Installer::new(layout.clone(), bridge).clean_up().await.unwrap();

        assert!(!layout.dag_dir.join("mollywallet.zip").exists());
        assert!(!layout.dag_dir.join("checksum.sha256").exists());
        assert!(layout.dag_dir.join("cl-wallet.jar").exists());
        assert!(!layout.tmp_dir.exists());
    }

    #[tokio::test]
    async fn test_uninstall_removes_everything() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Linux);
        std::fs::create_dir_all(layout.dag_dir.join("tmp")).unwrap();
        std::fs::create_dir_all(layout.os.binary_path.parent().unwrap()).unwrap();
        for file in ["store.db", "wallet.log", "cl-wallet.jar", "mollywallet"] {
            std::fs::write(layout.dag_dir.join(file), b"x").unwrap();
        }
        std::fs::write(&layout.os.binary_path, b"wallet").unwrap();

        let (bridge, mut rx) = Bridge::new(None);
        let outcome = Installer::new(layout.clone(), bridge).uninstall().await;

        assert_eq!(outcome, Outcome::Completed);
        assert!(!layout.dag_dir.exists());
        assert!(!layout.os.binary_path.exists());

        let events = drain(&mut rx);
        assert!(events.contains(&BridgeEvent::Progress(100)));
        assert!(events.iter().any(|e| matches!(
            e,
            BridgeEvent::Notify(n) if n.kind == NotificationKind::Success
        )));
    }

    #[tokio::test]
    async fn test_uninstall_reports_leftovers() {
        let home = tempfile::tempdir().unwrap();
        let layout = test_layout(home.path(), OsBuild::Linux);
        std::fs::create_dir_all(&layout.dag_dir).unwrap();
        std::fs::write(layout.dag_dir.join("notes.txt"), b"mine").unwrap();

        let (bridge, mut rx) = Bridge::new(None);
        let outcome = Installer::new(layout.clone(), bridge).uninstall().await;

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert!(layout.dag_dir.join("notes.txt").exists());
        assert!(drain(&mut rx).iter().any(|e| matches!(
            e,
            BridgeEvent::Notify(n) if n.kind == NotificationKind::Error && n.title == "Unable to remove all folders"
        )));
    }
}
