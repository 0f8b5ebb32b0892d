use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use timecard_cli::commands::{clock, maintain, report, status, util};
use timecard_cli::{Cli, Commands, Config, store};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout();

    match &cli.command {
        Some(Commands::In { at }) => {
            let at = at.as_deref().map(util::parse_local_time).transpose()?;
            let mut timecard = store::load(&config.timecard_path)?;
            if clock::clock_in(&mut stdout, &mut timecard, at)? {
                store::save(&config.timecard_path, &timecard)?;
            }
        }
        Some(Commands::Out { at }) => {
            let at = at.as_deref().map(util::parse_local_time).transpose()?;
            let mut timecard = store::load(&config.timecard_path)?;
            if clock::clock_out(&mut stdout, &mut timecard, at)? {
                store::save(&config.timecard_path, &timecard)?;
            }
        }
        Some(Commands::Undo) => {
            let mut timecard = store::load(&config.timecard_path)?;
            if clock::undo(&mut stdout, &mut timecard)? {
                store::save(&config.timecard_path, &timecard)?;
            }
        }
        Some(Commands::Status) => {
            let timecard = store::load(&config.timecard_path)?;
            status::run(&mut stdout, &timecard, &config)?;
        }
        Some(Commands::Report { date, json }) => {
            let timecard = store::load(&config.timecard_path)?;
            report::run(&mut stdout, &timecard, &config, *date, *json)?;
        }
        Some(Commands::Clean { date }) => {
            let mut timecard = store::load(&config.timecard_path)?;
            if maintain::clean(&mut stdout, &mut timecard, *date)? {
                store::save(&config.timecard_path, &timecard)?;
            }
        }
        Some(Commands::Clear) => {
            let mut timecard = store::load(&config.timecard_path)?;
            maintain::clear(&mut stdout, &mut timecard)?;
            store::save(&config.timecard_path, &timecard)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
