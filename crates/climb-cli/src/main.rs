use std::io;

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod output;
mod repl;

fn main() {
    if let Err(error) = run() {
        eprintln!("climblog error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = bootstrap::load_config().context("failed to load climblog configuration")?;
    let settings = bootstrap::Settings::resolve(&flags, &config);

    // The store is read exactly once here and written exactly once below.
    let mut store =
        climb_store::load_or_create(&settings.store_path, settings.create_if_missing)
            .context("failed to load climb store")?;

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = repl::Session::new(&mut store, stdin.lock(), stdout.lock(), &settings);
        session.run()?;
    }

    climb_store::save(&store, &settings.store_path).context("failed to save climb store")?;
    Ok(())
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CLIMBLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
