use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use monecole::cli::Cli;
use monecole::{commands, EntClient};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    debug!(url = %args.url, username = %args.username, "starting");

    let client = EntClient::new(&args.username, &args.password, &args.url)
        .context("Failed to set up ENT client")?;

    let today = Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    commands::run(&client, &args.command, today, &mut stdout)
        .await
        .with_context(|| format!("Command failed against {}", client.base_url()))?;

    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("monecole=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("monecole=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
