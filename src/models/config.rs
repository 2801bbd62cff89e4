//! Config file model.

use crate::constants;
use serde::{Deserialize, Serialize};

/// How the target text after `Target:` becomes an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Strip leading whitespace only; every match is deleted.
    Raw,
    /// Trim both sides and skip identifiers that end up empty.
    #[default]
    Trimmed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub prune: PruneSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneSection {
    /// Regular expression searched for in each target label.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Match the pattern case-insensitively.
    #[serde(default)]
    pub ignore_case: bool,

    #[serde(default)]
    pub mode: ExtractMode,

    /// Exit non-zero when the store is unreachable or a delete fails.
    #[serde(default)]
    pub strict: bool,

    /// Credential manager executable.
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for PruneSection {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            ignore_case: false,
            mode: ExtractMode::default(),
            strict: false,
            program: default_program(),
        }
    }
}

fn default_pattern() -> String {
    constants::DEFAULT_PATTERN.to_string()
}

fn default_program() -> String {
    constants::DEFAULT_PROGRAM.to_string()
}
