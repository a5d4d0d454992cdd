use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("haul error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    if let cli::Commands::Init(args) = &cli.command {
        init_tracing(&flags, "warn")?;
        return commands::init::handle(args, &flags).await;
    }

    let project_root = context::resolve_project_root(flags.project.as_deref())?;
    let config = context::load_config(&project_root)?;
    init_tracing(&flags, &config.logging.level)?;

    let ctx = context::AppContext::init(&project_root, config)
        .await
        .context("failed to initialize haul application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// `HAUL_LOG` wins; otherwise [`cli::GlobalFlags::log_level`].
fn init_tracing(flags: &cli::GlobalFlags, configured: &str) -> anyhow::Result<()> {
    let level = flags.log_level(configured);

    let filter = tracing_subscriber::EnvFilter::try_from_env("HAUL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
