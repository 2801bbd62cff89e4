use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = git_cred_prune::cli::Cli::parse();
    git_cred_prune::util::logging::init(cli.verbose);
    cli.run()
}
