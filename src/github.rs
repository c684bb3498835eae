use crate::config::{RELEASE_DOWNLOAD_URL, USER_AGENT};
use crate::error::{InstallError, IoContext};
use futures_util::StreamExt;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
}

#[derive(Debug)]
pub enum DownloadProgress {
    Started { total_bytes: Option<u64> },
    Progress { downloaded: u64, total: Option<u64> },
    Completed,
    Cancelled,
}

/// Latest release of `repo` ("owner/name")
pub async fn get_latest_release(client: &reqwest::Client, repo: &str) -> Result<Release, InstallError> {
    let api_url = format!("https://api.github.com/repos/{}/releases/latest", repo);
    crate::debug::log(&format!("Querying latest release: {}", api_url));

    let response = client
        .get(&api_url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(InstallError::GitHubStatus(response.status()));
    }

    Ok(response.json::<Release>().await?)
}

/// Semantic version from a release tag: `v1.1.9-linux` -> `1.1.9`
pub fn release_version(tag: &str) -> Result<String, InstallError> {
    let trimmed = tag.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let version = version.split('-').next().unwrap_or_default();

    let valid = !version.is_empty()
        && version
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if !valid {
        return Err(InstallError::InvalidTag(tag.to_string()));
    }
    Ok(version.to_string())
}

/// e.g. https://github.com/grvlle/constellation_wallet/releases/download/v1.1.9-linux/mollywallet.zip
pub fn release_asset_url(version: &str, os_build: &str, filename: &str) -> String {
    format!("{}/v{}-{}/{}", RELEASE_DOWNLOAD_URL, version, os_build, filename)
}

/// Path the download is streamed into before being renamed into place
pub fn partial_path(dest_path: &Path) -> PathBuf {
    let mut name = dest_path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    dest_path.with_file_name(name)
}

/// Close and delete a download that will not be completed
async fn discard_partial(file: File, tmp_path: &Path) {
    drop(file);
    if let Err(e) = tokio::fs::remove_file(tmp_path).await {
        crate::debug::log(&format!("WARNING: could not remove {:?}: {}", tmp_path, e));
    }
}

pub async fn download_file(
    client: &reqwest::Client,
    url: &str,
    dest_path: &Path,
    progress_tx: mpsc::UnboundedSender<DownloadProgress>,
    cancel_token: CancellationToken,
) -> Result<(), InstallError> {
    // Check for cancellation before starting
    if cancel_token.is_cancelled() {
        let _ = progress_tx.send(DownloadProgress::Cancelled);
        return Err(InstallError::Cancelled("Download"));
    }

    crate::debug::log(&format!("Downloading {} -> {:?}", url, dest_path));

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(InstallError::DownloadStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let total_size = response.content_length();
    let _ = progress_tx.send(DownloadProgress::Started { total_bytes: total_size });

    let tmp_path = partial_path(dest_path);
    let mut file = File::create(&tmp_path)
        .await
        .io_context(|| format!("Failed to create {:?}", tmp_path))?;

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                discard_partial(file, &tmp_path).await;
                let _ = progress_tx.send(DownloadProgress::Cancelled);
                return Err(InstallError::Cancelled("Download"));
            }
            chunk_result = stream.next() => {
                match chunk_result {
                    Some(Ok(chunk)) => {
                        if let Err(source) = file.write_all(&chunk).await {
                            discard_partial(file, &tmp_path).await;
                            return Err(InstallError::Io {
                                context: format!("Write error on {:?}", tmp_path),
                                source,
                            });
                        }

                        downloaded += chunk.len() as u64;
                        let _ = progress_tx.send(DownloadProgress::Progress {
                            downloaded,
                            total: total_size,
                        });
                    }
                    Some(Err(e)) => {
                        discard_partial(file, &tmp_path).await;
                        return Err(e.into());
                    }
                    None => {
                        // Stream complete
                        break;
                    }
                }
            }
        }
    }

    if let Err(source) = file.flush().await {
        discard_partial(file, &tmp_path).await;
        return Err(InstallError::Io {
            context: format!("Flush error on {:?}", tmp_path),
            source,
        });
    }
    drop(file);

    tokio::fs::rename(&tmp_path, dest_path)
        .await
        .io_context(|| format!("Failed to move {:?} into place", tmp_path))?;

    let _ = progress_tx.send(DownloadProgress::Completed);
    Ok(())
}
