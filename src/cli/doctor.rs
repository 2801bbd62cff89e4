//! Diagnostics for tool availability and configuration.

use crate::cli::CliContext;
use crate::core::filter::TargetFilter;
use crate::core::pruner;
use crate::core::store::StoreError;
use crate::util::{cmdkey, git};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Also run the listing command and count matching targets
    #[arg(long)]
    pub list: bool,
}

pub fn run(ctx: &CliContext, args: DoctorArgs) -> Result<()> {
    let settings = &ctx.settings;
    let mut ok = 0u32;
    let mut warn = 0u32;
    let mut fail = 0u32;

    println!("Doctor: pattern '{}' ({:?})", settings.pattern, settings.mode);

    match (&ctx.config_path, &ctx.config_load_warning) {
        (_, Some(w)) => {
            println!("  [FAIL] {}", w);
            fail += 1;
        }
        (Some(path), None) => {
            println!("  [PASS] config loaded: {}", path.display());
            ok += 1;
        }
        (None, None) => {
            println!("  [INFO] no config file, using defaults");
        }
    }

    let filter = match ctx.filter() {
        Ok(filter) => {
            println!("  [PASS] pattern compiles");
            ok += 1;
            Some(filter)
        }
        Err(e) => {
            println!("  [FAIL] {:#}", e);
            fail += 1;
            None
        }
    };

    if cmdkey::available(&settings.program) {
        println!("  [PASS] {} available", settings.program);
        ok += 1;
    } else {
        println!("  [FAIL] {} not found on PATH", settings.program);
        fail += 1;
    }

    if git::available() {
        println!("  [PASS] git available");
        ok += 1;
    } else {
        println!("  [WARN] git not found on PATH (reject will not work)");
        warn += 1;
    }

    if args.list {
        if let Some(filter) = &filter {
            match count_matching(ctx, filter) {
                Ok(count) => {
                    println!("  [PASS] listing returned {} matching targets", count);
                    ok += 1;
                }
                Err(e) => {
                    println!("  [FAIL] {}", e);
                    fail += 1;
                }
            }
        }
    }

    println!();
    println!("Doctor summary: {} pass, {} warn, {} fail", ok, warn, fail);
    if fail > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Same count `list` would show.
fn count_matching(ctx: &CliContext, filter: &TargetFilter) -> Result<usize, StoreError> {
    pruner::matching_targets(&ctx.store(), filter).map(|targets| targets.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::context;

    #[test]
    fn test_count_unreachable_store() {
        let ctx = context("git-cred-prune-no-such-tool", false);
        let filter = ctx.filter().unwrap();
        assert!(matches!(
            count_matching(&ctx, &filter),
            Err(StoreError::Unavailable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_count_skips_empty_targets() {
        use crate::cli::test_support::{fake_cmdkey, program};
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let tool = fake_cmdkey(
            &dir,
            "printf '    Target:    \\n    Target: git:https://github.com\\n    Target: Microsoft_OneAuth\\n'",
        );
        let mut ctx = context(program(&tool), false);
        ctx.settings.pattern = String::new();
        let filter = ctx.filter().unwrap();
        assert_eq!(count_matching(&ctx, &filter).unwrap(), 2);
    }
}
