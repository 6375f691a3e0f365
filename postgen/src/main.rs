mod commands;
mod config;
mod error;
mod ops;
mod prompt;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{commands::Cli, error::RunError};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Err(err) = cli.run() else {
        return Ok(());
    };
    match err.downcast::<RunError>() {
        Ok(RunError::Cancelled) => {
            eprintln!("{}", RunError::Cancelled);
            std::process::exit(2);
        }
        Ok(RunError::Collection(source)) => {
            eprintln!("{:?}", miette::Report::new(*source));
            std::process::exit(1);
        }
        Ok(other) => Err(other.into()),
        Err(err) => Err(err),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "postgen=debug" } else { "postgen=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
