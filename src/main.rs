//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use fifa_scout::{
    cli::{Commands, Scout},
    commands::{
        find::{handle_find, FindParams},
        load_dataset, resolve_data_path,
        search::Session,
        top::{handle_top, TopParams},
    },
    Result,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(app: Scout) -> Result<()> {
    let path = resolve_data_path(app.data)?;
    eprintln!("Loading dataset from {}...", path.display());
    let dataset = load_dataset(&path)?;
    info!(players = dataset.len(), "dataset ready");

    let stdout = io::stdout();
    match app.command.unwrap_or(Commands::Search) {
        Commands::Search => {
            let stdin = io::stdin();
            Session::new(&dataset, stdin.lock(), stdout.lock(), app.ascii).run()?;
        }

        Commands::Find {
            filters,
            sort,
            limit,
            json,
        } => {
            let params = FindParams {
                names: filters.names,
                club: filters.club,
                league: filters.league,
                country: filters.country,
                positions: filters.positions,
                age: filters.age,
                potential: filters.potential,
                overall: filters.overall,
                sort,
                limit,
                as_json: json,
                ascii: app.ascii,
            };
            handle_find(&dataset, &params, &mut stdout.lock())?;
        }

        Commands::Top {
            report,
            limit,
            out,
            no_export,
            json,
        } => {
            let params = TopParams {
                limit,
                out,
                export: !no_export,
                as_json: json,
                ascii: app.ascii,
                ..TopParams::new(report)
            };
            handle_top(&dataset, &params, &mut stdout.lock())?;
        }
    }

    stdout.lock().flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let app = Scout::parse();
    init_logging(app.verbose);

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}
