// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::error::InstallError;
use std::path::Path;

const MB: u64 = 1_048_576;

/// Free bytes on the volume holding `path`, or `None` when the platform
/// can't tell us.
pub fn available_space(path: &Path) -> Option<u64> {
    let free = free_bytes(path);
    if free.is_none() {
        crate::debug::log(&format!("WARNING: could not read free space for {:?}", path));
    }
    free
}

#[cfg(target_os = "windows")]
fn free_bytes(path: &Path) -> Option<u64> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    let wide: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();
    let mut free = 0u64;
    // SAFETY: `wide` is NUL-terminated and outlives the call
    unsafe { GetDiskFreeSpaceExW(windows::core::PCWSTR(wide.as_ptr()), None, None, Some(&mut free)) }
        .ok()
        .map(|_| free)
}

#[cfg(unix)]
fn free_bytes(path: &Path) -> Option<u64> {
    use std::os::unix::ffi::OsStrExt;

    let c_path = std::ffi::CString::new(path.as_os_str().as_bytes()).ok()?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    // SAFETY: `c_path` is a valid C string and `stat` a writable statvfs
    if unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) } != 0 {
        return None;
    }
    // f_bavail/f_bsize are u32 on some targets
    Some((stat.f_bavail as u64).saturating_mul(stat.f_bsize as u64))
}

#[cfg(not(any(unix, target_os = "windows")))]
fn free_bytes(_path: &Path) -> Option<u64> {
    None
}

/// Fail when fewer than `required` bytes are free. Unknown free space passes,
/// the download itself will fail loudly if the disk fills up.
pub fn ensure_space(available: Option<u64>, required: u64) -> Result<(), InstallError> {
    match available {
        Some(free) if free < required => Err(InstallError::InsufficientSpace {
            required_mb: required.div_ceil(MB),
            available_mb: free / MB,
        }),
        Some(free) => {
            crate::debug::log(&format!("Available disk space: {} MB", free / MB));
            Ok(())
        }
        None => Ok(()),
    }
}
