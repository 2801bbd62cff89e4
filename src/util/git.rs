//! `git credential reject` via stdin.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Build the key=value block `git credential` reads, terminated by a blank line.
pub fn credential_input(protocol: &str, host: &str, username: Option<&str>) -> String {
    let mut input = format!("protocol={}\nhost={}\n", protocol, host);
    if let Some(username) = username.filter(|u| !u.is_empty()) {
        input.push_str(&format!("username={}\n", username));
    }
    input.push('\n');
    input
}

/// Ask git's configured credential helpers to forget a credential.
pub fn reject(protocol: &str, host: &str, username: Option<&str>) -> Result<()> {
    let mut child = Command::new("git")
        .arg("credential")
        .arg("reject")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .context("run git credential reject")?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(credential_input(protocol, host, username).as_bytes())
            .context("write to git credential reject")?;
    }

    let output = child
        .wait_with_output()
        .context("wait for git credential reject")?;
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    bail!("git credential reject failed: {}", stderr.trim());
}

/// Whether a `git` executable is on PATH.
pub fn available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
