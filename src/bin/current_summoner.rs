use anyhow::Context;
use clap::Parser;
use lcu_summoner::{auth::default_lockfile_path, logging, LcuClient};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "current-summoner")]
#[command(about = "Print the summoner logged into the running League client")]
struct Cli {
    /// Path to the client lockfile (defaults to the standard install location)
    #[arg(short, long)]
    lockfile: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let lockfile = cli.lockfile.unwrap_or_else(default_lockfile_path);
    tracing::debug!(path = %lockfile.display(), "using lockfile");

    let client = LcuClient::connect(&lockfile)?;
    let summoner = client
        .current_summoner()
        .await
        .with_context(|| format!("fetching current summoner from {}", client.local_url()))?;

    println!("{}", serde_json::to_string_pretty(&summoner)?);
    Ok(())
}
