//! annoseg command-line entry point

use annoseg_cli::commands::Commands;
use anyhow::Result;
use clap::Parser;

/// Convert annotated corpora into name finder training samples
#[derive(Debug, Parser)]
#[command(name = "annoseg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert(args) => {
            init_logging(args.verbose, args.quiet);
            args.execute()
        }
        Commands::Validate(args) => {
            init_logging(0, false);
            args.execute()
        }
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
