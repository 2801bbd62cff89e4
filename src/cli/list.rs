use crate::cli::CliContext;
use crate::core::pruner;
use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    pattern: &'a str,
    targets: Vec<String>,
}

pub fn run(ctx: &CliContext, args: ListArgs) -> Result<()> {
    if args.format != "table" && args.format != "json" {
        bail!("invalid format: {} (use table|json)", args.format);
    }

    let filter = ctx.filter()?;
    let store = ctx.store();
    let targets = pruner::matching_targets(&store, &filter)
        .with_context(|| format!("list credentials with {}", store.program()))?;

    if args.format == "json" {
        let output = ListOutput {
            pattern: filter.pattern(),
            targets,
        };
        let json = serde_json::to_string_pretty(&output).context("serialize list")?;
        println!("{}", json);
        return Ok(());
    }

    if targets.is_empty() {
        println!("No credentials match '{}'", filter.pattern());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Target").add_attribute(Attribute::Bold),
    ]);
    for (i, target) in targets.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), target.clone()]);
    }

    println!("{}", table);
    println!("\n{} matching credentials.", targets.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::context;

    fn args(format: &str) -> ListArgs {
        ListArgs {
            format: format.into(),
        }
    }

    #[test]
    fn test_unreachable_store_is_error() {
        let err = run(&context("git-cred-prune-no-such-tool", false), args("table")).unwrap_err();
        assert!(format!("{:#}", err).contains("list credentials with git-cred-prune-no-such-tool"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = run(&context("cmdkey", false), args("csv")).unwrap_err();
        assert!(err.to_string().contains("invalid format: csv"));
    }

    #[cfg(unix)]
    mod with_fake_cmdkey {
        use super::*;
        use crate::cli::test_support::{fake_cmdkey, program};
        use tempfile::TempDir;

        #[test]
        fn test_stderr_only_listing_is_error() {
            let dir = TempDir::new().unwrap();
            let tool = fake_cmdkey(&dir, "echo 'Element not found.' >&2");
            let err = run(&context(program(&tool), false), args("table")).unwrap_err();
            assert!(format!("{:#}", err).contains("Element not found."));
        }

        #[test]
        fn test_lists_matches_in_both_formats() {
            let dir = TempDir::new().unwrap();
            let tool = fake_cmdkey(
                &dir,
                "printf '\\n    Target: git:https://github.com\\n    Target: Microsoft_OneAuth\\n'",
            );
            let ctx = context(program(&tool), false);
            assert!(run(&ctx, args("table")).is_ok());
            assert!(run(&ctx, args("json")).is_ok());
        }
    }
}
