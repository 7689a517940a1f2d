use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use warbler::agent::VoiceAgent;
use warbler::platform::client::Platform;
use warbler::platform::configs::PlatformConfig;

use crate::session::Session;

mod session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logs stay out of the interactive transcript unless explicitly requested,
    // e.g. WARBLER_LOG=debug.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WARBLER_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .init();

    ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    })?;

    if let Err(err) = run().await {
        eprintln!(
            "{} There was an error encountered when running: {}",
            style("Aborting!").red().bold(),
            err
        );
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let platform = Platform::new(PlatformConfig::from_env()?)?;
    let (client, workspace) = platform.temporary_workspace().await?;

    println!("Starting agent...");
    println!(
        "{}",
        style(
            "If you make code changes, you will need to restart this client. \
            Press CTRL+C to exit at any time."
        )
        .dim()
    );
    println!();

    let mut session = Session::new(VoiceAgent::new(client));
    session.start().await?;

    platform.delete_workspace(&workspace.id).await?;
    Ok(())
}
