// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::error::{InstallError, IoContext};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

/// Lowercase hex SHA-256 of a file
pub fn sha256_file(path: &Path) -> Result<String, InstallError> {
    let mut file = std::fs::File::open(path).io_context(|| format!("Failed to open {:?}", path))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; 64 * 1024];

    loop {
        let n = file
            .read(&mut buf)
            .io_context(|| format!("Failed to read {:?}", path))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let mut hex = String::with_capacity(64);
    for byte in hasher.finalize() {
        let _ = write!(hex, "{:02x}", byte);
    }
    Ok(hex)
}

/// First token of the first non-empty line (`<hash>` or `<hash>  <file>`)
pub fn parse_checksum(contents: &str) -> Option<&str> {
    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.split_whitespace().next())
}

pub fn verify_checksum(archive_path: &Path, checksum_path: &Path) -> Result<(), InstallError> {
    let contents = std::fs::read_to_string(checksum_path)
        .io_context(|| format!("Failed to read {:?}", checksum_path))?;
    let expected = parse_checksum(&contents)
        .ok_or_else(|| InstallError::EmptyChecksum(checksum_path.to_path_buf()))?
        .to_ascii_lowercase();
    crate::debug::log(&format!("Remote file checksum: {}", expected));

    let actual = sha256_file(archive_path)?;
    crate::debug::log(&format!("Local file checksum: {}", actual));

    if expected != actual {
        return Err(InstallError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("hello world")
    const HELLO: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn test_sha256_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mollywallet.zip");
        std::fs::write(&path, b"hello world").unwrap();
        assert_eq!(sha256_file(&path).unwrap(), HELLO);
    }

    #[test]
    fn test_parse_checksum() {
        assert_eq!(parse_checksum("abc123\n"), Some("abc123"));
        assert_eq!(parse_checksum("\r\n  abc123  mollywallet.zip\r\nother"), Some("abc123"));
        assert_eq!(parse_checksum("   \n\n"), None);
    }

    #[test]
    fn test_verify_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("mollywallet.zip");
        let checksum = dir.path().join("checksum.sha256");
        std::fs::write(&archive, b"hello world").unwrap();

        std::fs::write(&checksum, format!("{}\n", HELLO.to_uppercase())).unwrap();
        verify_checksum(&archive, &checksum).unwrap();

        std::fs::write(&checksum, "deadbeef\n").unwrap();
        match verify_checksum(&archive, &checksum) {
            Err(InstallError::ChecksumMismatch { expected, actual }) => {
                assert_eq!(expected, "deadbeef");
                assert_eq!(actual, HELLO);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }

        std::fs::write(&checksum, "").unwrap();
        assert!(matches!(
            verify_checksum(&archive, &checksum),
            Err(InstallError::EmptyChecksum(_))
        ));
    }
}
