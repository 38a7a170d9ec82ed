use clap::Parser;
use tracing_subscriber::EnvFilter;

mod align;
mod cli;
mod core;
mod parsing;
mod scoring;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pairalign=debug,info")
    } else {
        EnvFilter::new("pairalign=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Align(args) => {
            cli::align::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Matrices => {
            cli::matrices::run(cli.format)?;
        }
    }

    Ok(())
}
