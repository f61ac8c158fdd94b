use anyhow::{Context as _, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soactiv_cli::cli::{Cli, Command, Context};
use soactiv_membership::datetime;
use soactiv_roster::Roster;

fn main() -> Result<()> {
    let cli = Cli::init();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let roster = Roster::open(&cli.roster)
        .with_context(|| format!("loading roster {}", cli.roster.display()))?;
    let today = cli.today.unwrap_or_else(datetime::today);
    tracing::debug!(%today, "reference date");

    let ctx = Context { roster, today };
    match cli.command {
        Command::Clients(cmd) => cmd.run(&ctx),
        Command::Staff(cmd) => cmd.run(&ctx),
        Command::Enquiries(cmd) => cmd.run(&ctx),
        Command::Dashboard(cmd) => cmd.run(&ctx),
    }?;

    Ok(())
}
