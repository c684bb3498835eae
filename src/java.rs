// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

// Java is needed by the wallet SDK jars. Only Windows installs get a managed
// Java; on other systems it is expected to come from the package manager.

use crate::error::InstallError;
use std::path::PathBuf;
use tokio::process::Command;

/// PowerShell steps that install AdoptOpenJDK through scoop
const JAVA_INSTALL_STEPS: &[(&str, &str)] = &[
    ("Set-ExecutionPolicy RemoteSigned -scope CurrentUser", "setting ExecutionPolicy to CurrentUser"),
    ("iwr -useb get.scoop.sh | iex", "installing scoop"),
    ("scoop install git", "installing git using scoop"),
    ("scoop bucket add java", "adding java bucket to scoop"),
    ("scoop install adoptopenjdk-hotspot", "installing java using scoop"),
    ("scoop uninstall git", "uninstalling git using scoop"),
];

/// Pick `javaw.exe` from `where java` output. When several Java
/// installations are listed the second one wins.
pub fn javaw_from_where_output(output: &str) -> Option<PathBuf> {
    let paths: Vec<&str> = output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let chosen = paths.get(1).or_else(|| paths.first())?;
    let base = chosen.strip_suffix(".exe").unwrap_or(chosen);
    Some(PathBuf::from(format!("{}w.exe", base)))
}

pub async fn detect_java_path() -> Result<PathBuf, InstallError> {
    crate::debug::log("Running command: cmd /c where java");
    let output = Command::new("cmd")
        .args(["/c", "where", "java"])
        .output()
        .await
        .map_err(|e| InstallError::Command(format!("unable to run command: {}", e)))?;

    if !output.status.success() {
        return Err(InstallError::Command(format!(
            "unable to run command: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let path = javaw_from_where_output(&stdout)
        .ok_or_else(|| InstallError::Command("unable to find Java Installation".to_string()))?;
    crate::debug::log(&format!("Java path selected: {:?}", path));
    Ok(path)
}

pub async fn java_installed() -> bool {
    match detect_java_path().await {
        Ok(path) => path
            .file_name()
            .is_some_and(|n| n.eq_ignore_ascii_case("javaw.exe")),
        Err(e) => {
            crate::debug::log(&format!("Java detection failed: {}", e));
            false
        }
    }
}

pub async fn run_powershell(script: &str) -> Result<String, InstallError> {
    let output = Command::new("powershell")
        .args(["-NoProfile", "-NonInteractive", "-Command", script])
        .output()
        .await
        .map_err(|e| InstallError::Command(format!("unable to start PowerShell: {}", e)))?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !output.status.success() || !stderr.is_empty() {
        return Err(InstallError::Command(stderr));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

pub async fn install_java() -> Result<(), InstallError> {
    crate::debug::log_section("Installing Java");

    for (script, step) in JAVA_INSTALL_STEPS {
        let stdout = run_powershell(script)
            .await
            .map_err(|e| InstallError::Command(format!("errors occurred while {}: {}", step, e)))?;
        crate::debug::log(&format!("{}. stdout: {}", step, stdout.trim()));
    }
    Ok(())
}
