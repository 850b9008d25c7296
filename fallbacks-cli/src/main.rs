//! fallbacks CLI
//!
//! Command-line interface for browsing the error boundary template
//! catalog, building share links, and serving template sources.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::{Level, LevelFilter};

use fallbacks_catalog::Catalog;
use fallbacks_lib::Settings;
use fallbacks_lib::settings::{load_settings, resolve_catalog_path};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings();

    match cli.command {
        Commands::List { filter } => {
            let catalog = load_catalog(cli.catalog, &settings)?;
            commands::list::run_list(&catalog, &filter)
        }
        Commands::Show { id } => {
            let catalog = load_catalog(cli.catalog, &settings)?;
            commands::show::run_show(&catalog, &id)
        }
        Commands::Stats => {
            let catalog = load_catalog(cli.catalog, &settings)?;
            commands::stats::run_stats(&catalog);
            Ok(())
        }
        Commands::Link { filter } => {
            let catalog = load_catalog(cli.catalog, &settings)?;
            commands::link::run_link(&catalog, &filter)
        }
        Commands::Fetch { id, root, output } => {
            let catalog = load_catalog(cli.catalog, &settings)?;
            commands::fetch::run_fetch(&catalog, &settings, &id, root, output)
        }
        Commands::Serve { listen, root } => {
            let catalog = load_catalog(cli.catalog, &settings)?;
            commands::serve::run_serve(catalog, &settings, listen, root)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::run_config_init(&settings, force),
        },
    }
}

/// Load the catalog from `--catalog`, then settings, then the bundled copy.
fn load_catalog(cli_override: Option<PathBuf>, settings: &Settings) -> Result<Catalog, CliError> {
    match resolve_catalog_path(cli_override, settings) {
        Some(path) => {
            log::debug!("Loading catalog from {}", path.display());
            Ok(fallbacks_catalog::load_catalog(&path)?)
        }
        None => Ok(fallbacks_catalog::builtin_catalog()?),
    }
}

/// Plain messages at info level; `--verbose` adds timestamps and levels.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }

    builder.init();
}
