use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dcc_config::DccConfig;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

/// Shell convention for a command stopped by SIGINT.
const INTERRUPTED_EXIT: u8 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Interrupted,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => ExitCode::from(INTERRUPTED_EXIT),
        Err(error) => {
            eprintln!("dcc error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<Outcome> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        commands::schema::handle(args, &flags)?;
        return Ok(Outcome::Completed);
    }

    let config = load_config(&flags)?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to initialize dcc application context")?;

    race_interrupt(
        commands::dispatch::dispatch(cli.command, &ctx, &flags),
        tokio::signal::ctrl_c(),
    )
    .await
}

/// Run `command` until it finishes or `interrupt` fires.
///
/// An interrupt drops the command along with any in-flight reads.
async fn race_interrupt<C, I>(command: C, interrupt: I) -> anyhow::Result<Outcome>
where
    C: Future<Output = anyhow::Result<()>>,
    I: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = command => result.map(|()| Outcome::Completed),
        signal = interrupt => {
            signal.context("failed to listen for ctrl-c")?;
            tracing::debug!("interrupted");
            Ok(Outcome::Interrupted)
        }
    }
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<DccConfig> {
    let mut config = DccConfig::load_with_dotenv().context("failed to load dcc configuration")?;
    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
        // An explicit file wins over a configured remote.
        config.database.url.clear();
        config.database.auth_token.clear();
    }
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DCC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
