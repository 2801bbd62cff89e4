//! CLI routing and command dispatch.

use crate::constants;
use crate::core::filter::TargetFilter;
use crate::core::settings;
use crate::core::store::CmdkeyStore;
use crate::models::config::{ConfigFile, ExtractMode, PruneSection};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod doctor;
pub mod list;
pub mod prune;
pub mod reject;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub settings: PruneSection,
    pub config_path: Option<PathBuf>,
    pub config_load_warning: Option<String>,
}

impl CliContext {
    pub fn filter(&self) -> Result<TargetFilter> {
        TargetFilter::new(
            &self.settings.pattern,
            self.settings.ignore_case,
            self.settings.mode,
        )
    }

    pub fn store(&self) -> CmdkeyStore {
        CmdkeyStore::new(self.settings.program.clone())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "git-cred-prune",
    version,
    about = "Delete cached git credentials from the Windows credential manager"
)]
pub struct Cli {
    /// Config file (default: ./git-cred-prune.toml if present)
    #[arg(long, global = true, value_name = "PATH", env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Regular expression matched against each credential target
    #[arg(long, global = true, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Match the pattern case-insensitively
    #[arg(long, global = true)]
    pub ignore_case: bool,

    /// Only strip leading whitespace from targets and act on empty ones too
    #[arg(long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config_path = settings::resolve_path(self.config.clone());

        // A broken config must not silently widen what gets deleted, so only
        // the read-only doctor command carries on with defaults.
        let mut config_load_warning: Option<String> = None;
        let file = match &config_path {
            Some(path) => match settings::load(path) {
                Ok(file) => {
                    debug!(path = %path.display(), "loaded config");
                    file
                }
                Err(e) if matches!(self.command, Commands::Doctor(_)) => {
                    warn!("{:#}", e);
                    config_load_warning = Some(format!("{:#}", e));
                    ConfigFile::default()
                }
                Err(e) => return Err(e).context("load config"),
            },
            None => ConfigFile::default(),
        };

        let ctx = CliContext {
            settings: self.apply_overrides(file.prune),
            config_path,
            config_load_warning,
        };

        match self.command {
            Commands::Prune(args) => prune::run(&ctx, args),
            Commands::List(args) => list::run(&ctx, args),
            Commands::Reject(args) => reject::run(&ctx, args),
            Commands::Doctor(args) => doctor::run(&ctx, args),
        }
    }

    fn apply_overrides(&self, mut settings: PruneSection) -> PruneSection {
        if let Some(pattern) = &self.pattern {
            settings.pattern = pattern.clone();
        }
        if self.ignore_case {
            settings.ignore_case = true;
        }
        if self.raw {
            settings.mode = ExtractMode::Raw;
        }
        settings
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete every credential whose target matches the pattern
    Prune(prune::PruneArgs),
    /// Show matching credential targets without deleting them
    List(list::ListArgs),
    /// Ask git's credential helpers to forget host credentials
    Reject(reject::RejectArgs),
    /// Diagnose tool availability and configuration (read-only)
    Doctor(doctor::DoctorArgs),
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::CliContext;
    use crate::models::config::PruneSection;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub fn context(program: &str, strict: bool) -> CliContext {
        CliContext {
            settings: PruneSection {
                program: program.to_string(),
                strict,
                ..PruneSection::default()
            },
            config_path: None,
            config_load_warning: None,
        }
    }

    /// Write an executable `sh` script standing in for cmdkey.
    #[cfg(unix)]
    pub fn fake_cmdkey(dir: &TempDir, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("cmdkey");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn program(path: &Path) -> &str {
        path.to_str().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prune_defaults() {
        let cli = Cli::try_parse_from(["git-cred-prune", "prune"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.raw);
        assert!(matches!(cli.command, Commands::Prune(_)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "git-cred-prune",
            "list",
            "--pattern",
            "github",
            "--ignore-case",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.pattern.as_deref(), Some("github"));
        assert!(cli.ignore_case);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = Cli::try_parse_from(["git-cred-prune", "prune", "--raw", "--pattern", "gh"])
            .unwrap();
        let settings = cli.apply_overrides(PruneSection::default());
        assert_eq!(settings.mode, ExtractMode::Raw);
        assert_eq!(settings.pattern, "gh");
        assert_eq!(settings.program, "cmdkey");
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let cli = Cli::try_parse_from(["git-cred-prune", "prune"]).unwrap();
        let file = PruneSection {
            pattern: "gitlab".into(),
            ignore_case: true,
            ..PruneSection::default()
        };
        let settings = cli.apply_overrides(file);
        assert_eq!(settings.pattern, "gitlab");
        assert!(settings.ignore_case);
        assert_eq!(settings.mode, ExtractMode::Trimmed);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["git-cred-prune"]).is_err());
    }
}
