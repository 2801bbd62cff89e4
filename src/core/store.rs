//! Credential store seam.
//!
//! The prune loop only ever sees listing lines and issues deletes by target,
//! so the OS store sits behind a two-method trait and tests swap in a fake.

use crate::constants;
use crate::util::cmdkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The credential manager could not be started at all.
    #[error("cannot run {program}: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The credential manager ran and reported failure.
    #[error("{program} failed ({status}): {output}")]
    CommandFailed {
        program: String,
        status: String,
        output: String,
    },
}

pub trait CredentialStore {
    /// Raw listing output, one entry per line, in the order the tool printed it.
    fn list_lines(&self) -> Result<Vec<String>, StoreError>;

    /// Remove the credential with the given target.
    fn delete(&self, target: &str) -> Result<(), StoreError>;
}

/// The Windows credential manager, driven through `cmdkey`.
#[derive(Debug, Clone)]
pub struct CmdkeyStore {
    program: String,
}

impl CmdkeyStore {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CmdkeyStore {
    fn default() -> Self {
        Self::new(constants::DEFAULT_PROGRAM)
    }
}

impl CredentialStore for CmdkeyStore {
    fn list_lines(&self) -> Result<Vec<String>, StoreError> {
        let text = cmdkey::list(&self.program)?;
        Ok(text.lines().map(str::to_string).collect())
    }

    fn delete(&self, target: &str) -> Result<(), StoreError> {
        cmdkey::delete(&self.program, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program() {
        assert_eq!(CmdkeyStore::default().program(), "cmdkey");
    }

    #[test]
    fn test_unavailable_program_surfaces_error() {
        let store = CmdkeyStore::new("git-cred-prune-no-such-tool");
        assert!(matches!(
            store.list_lines(),
            Err(StoreError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = StoreError::CommandFailed {
            program: "cmdkey".into(),
            status: "exit code: 1".into(),
            output: "Element not found.".into(),
        };
        assert_eq!(
            err.to_string(),
            "cmdkey failed (exit code: 1): Element not found."
        );
    }
}
