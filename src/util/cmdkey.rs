//! Thin wrappers around the `cmdkey` credential manager CLI.

use crate::constants;
use crate::core::store::StoreError;
use std::process::{Command, Output, Stdio};

/// Run `<program> /list` and return its stdout as text.
///
/// The output is decoded lossily; cmdkey writes in the console code page and
/// only the ASCII `Target:` label matters here.
pub fn list(program: &str) -> Result<String, StoreError> {
    let mut cmd = Command::new(program);
    cmd.arg(constants::LIST_ARG);
    let output = run(program, cmd)?;
    listing_text(program, &output.stdout, &output.stderr, &output.status.to_string())
}

/// A listing that printed nothing but wrote to stderr is an error even when
/// the exit status claims success.
fn listing_text(
    program: &str,
    stdout: &[u8],
    stderr: &[u8],
    status: &str,
) -> Result<String, StoreError> {
    let text = String::from_utf8_lossy(stdout).into_owned();
    if text.trim().is_empty() && !stderr.is_empty() {
        return Err(StoreError::CommandFailed {
            program: program.to_string(),
            status: status.to_string(),
            output: String::from_utf8_lossy(stderr).trim().to_string(),
        });
    }
    Ok(text)
}

/// Run `<program> /delete:<target>`.
pub fn delete(program: &str, target: &str) -> Result<(), StoreError> {
    let mut cmd = Command::new(program);
    cmd.arg(format!("{}{}", constants::DELETE_ARG_PREFIX, target));
    run(program, cmd).map(|_| ())
}

/// Whether `program` can be spawned at all.
pub fn available(program: &str) -> bool {
    Command::new(program)
        .arg("/?")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

fn run(program: &str, mut cmd: Command) -> Result<Output, StoreError> {
    tracing::debug!(?cmd, "running credential manager");
    let output = cmd.output().map_err(|source| StoreError::Unavailable {
        program: program.to_string(),
        source,
    })?;
    if output.status.success() {
        return Ok(output);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(StoreError::CommandFailed {
        program: program.to_string(),
        status: output.status.to_string(),
        output: format!("{}{}", stdout, stderr).trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let err = list("git-cred-prune-no-such-tool").unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
        assert!(!available("git-cred-prune-no-such-tool"));
    }

    #[test]
    fn test_listing_with_only_stderr_is_error() {
        let err = listing_text("cmdkey", b"", b"Element not found.\r\n", "exit status: 0")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cmdkey failed (exit status: 0): Element not found."
        );
    }

    #[test]
    fn test_listing_keeps_stdout() {
        let text = listing_text(
            "cmdkey",
            b"\r\n    Target: git:https://github.com\r\n",
            b"warning",
            "exit status: 0",
        )
        .unwrap();
        assert!(text.contains("Target: git:https://github.com"));
    }

    #[test]
    fn test_empty_listing_without_stderr_is_ok() {
        assert_eq!(listing_text("cmdkey", b"", b"", "exit status: 0").unwrap(), "");
    }

    #[test]
    fn test_delete_missing_program_is_unavailable() {
        let err = delete("git-cred-prune-no-such-tool", "LegacyGeneric:git").unwrap_err();
        assert!(err.to_string().contains("git-cred-prune-no-such-tool"));
    }
}
