use crate::cli::CliContext;
use crate::constants;
use crate::util::git;
use anyhow::{bail, Result};
use clap::Args;
use tracing::warn;

#[derive(Args, Debug)]
pub struct RejectArgs {
    /// Host(s) to reject (default: github.com, api.github.com)
    #[arg(value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Protocol passed to git credential reject
    #[arg(long, default_value = constants::DEFAULT_REJECT_PROTOCOL)]
    pub protocol: String,

    /// Only reject credentials for this username
    #[arg(long)]
    pub username: Option<String>,
}

pub fn run(_ctx: &CliContext, args: RejectArgs) -> Result<()> {
    let hosts: Vec<String> = if args.hosts.is_empty() {
        constants::DEFAULT_REJECT_HOSTS
            .iter()
            .map(|h| h.to_string())
            .collect()
    } else {
        args.hosts
    };

    let username = args.username.as_deref();
    let mut failed = 0usize;
    for host in &hosts {
        match git::reject(&args.protocol, host, username) {
            Ok(()) => println!(
                "Rejected {}://{} {}",
                args.protocol,
                host,
                username.unwrap_or("")
            ),
            Err(e) => {
                warn!(host = %host, "{:#}", e);
                println!("Error rejecting {}://{}: {:#}", args.protocol, host, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} rejects failed", failed, hosts.len());
    }
    Ok(())
}
