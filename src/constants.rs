//! Centralized constants for external tools, config lookup, and output.

/// Credential manager executable used for listing and deleting entries.
pub const DEFAULT_PROGRAM: &str = "cmdkey";

/// Argument that makes the credential manager print every stored entry.
pub const LIST_ARG: &str = "/list";

/// Prefix of the delete argument; the target is appended verbatim.
pub const DELETE_ARG_PREFIX: &str = "/delete:";

/// Label that introduces a credential's target in the listing output.
pub const TARGET_LABEL: &str = "Target:";

/// Default filter applied to the target label.
pub const DEFAULT_PATTERN: &str = "git";

/// Config file picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "git-cred-prune.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GIT_CRED_PRUNE_CONFIG";

/// Message printed once after the prune loop finishes.
pub const DONE_MESSAGE: &str = "Done.";

/// Hosts rejected through `git credential reject` when none are given.
pub const DEFAULT_REJECT_HOSTS: &[&str] = &["github.com", "api.github.com"];

/// Protocol used for `git credential reject` when none is given.
pub const DEFAULT_REJECT_PROTOCOL: &str = "https";
