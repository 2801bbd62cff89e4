use crate::cli::CliContext;
use crate::core::pruner::Pruner;
use crate::models::report::PruneReport;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct PruneArgs {
    /// Announce matching credentials without deleting them
    #[arg(long)]
    pub dry_run: bool,

    /// Exit non-zero if the store cannot be listed or any delete fails
    #[arg(long)]
    pub strict: bool,

    /// Output format: text|json (json prints only the run report on stdout;
    /// the per-credential lines go to stderr)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(ctx: &CliContext, args: PruneArgs) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        bail!("invalid format: {} (use text|json)", args.format);
    }

    let filter = ctx.filter()?;
    let store = ctx.store();
    let pruner = Pruner::new(&store, &filter).dry_run(args.dry_run);

    let report = if args.format == "json" {
        let mut stderr = std::io::stderr().lock();
        pruner.run(&mut stderr)?
    } else {
        let mut stdout = std::io::stdout().lock();
        let report = pruner.run(&mut stdout)?;
        stdout.flush().context("flush stdout")?;
        report
    };

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{}", json);
    }

    check_strict(&report, args.strict || ctx.settings.strict)
}

fn check_strict(report: &PruneReport, strict: bool) -> Result<()> {
    if !strict || !report.has_failures() {
        return Ok(());
    }
    if let Some(e) = &report.list_error {
        bail!("cannot list credentials: {}", e);
    }
    bail!(
        "{} of {} deletions failed",
        report.failed(),
        report.attempts.len()
    );
}
