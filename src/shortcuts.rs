// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::error::InstallError;
use crate::java::run_powershell;
use std::path::Path;

/// Quote a value for a single-quoted PowerShell string
fn ps_quote(value: &Path) -> String {
    format!("'{}'", value.to_string_lossy().replace('\'', "''"))
}

/// PowerShell that creates a `.lnk` at `shortcut` pointing at `target`
pub fn shortcut_script(target: &Path, shortcut: &Path) -> String {
    format!(
        "$s = (New-Object -ComObject WScript.Shell).CreateShortcut({}); $s.TargetPath = {}; $s.Save()",
        ps_quote(shortcut),
        ps_quote(target)
    )
}

pub async fn create_windows_shortcut(target: &Path, shortcut: &Path) -> Result<(), InstallError> {
    crate::debug::log(&format!("Creating shortcut {:?} -> {:?}", shortcut, target));
    run_powershell(&shortcut_script(target, shortcut))
        .await
        .map_err(|e| InstallError::Command(format!("unable to create app shortcut: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_script_quotes_paths() {
        let script = shortcut_script(
            Path::new("C:\\Users\\o'neil\\.dag\\mollywallet.exe"),
            Path::new("C:\\Users\\o'neil\\.dag\\Molly Wallet.lnk"),
        );
        assert_eq!(
            script,
            "$s = (New-Object -ComObject WScript.Shell).CreateShortcut('C:\\Users\\o''neil\\.dag\\Molly Wallet.lnk'); \
             $s.TargetPath = 'C:\\Users\\o''neil\\.dag\\mollywallet.exe'; $s.Save()"
        );
    }
}
