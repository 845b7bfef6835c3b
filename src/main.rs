mod error;
mod filter;
mod logging;
mod lookup;
mod model;
mod report;
mod shell;
mod store;

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::BrowserError;
use crate::filter::{TableFilter, derive_facets, filter_rows};
use crate::lookup::find_rider;
use crate::report::json::{
    render_facets_json, render_list_json, render_profile_json, render_table_json,
};
use crate::report::profile::summarize_profile;
use crate::report::text::{
    render_facets_text, render_list, render_not_found, render_profile_text, render_table_text,
};
use crate::store::ClassificationStore;

#[derive(Debug, Parser)]
#[command(
    name = "vuelta-results",
    version,
    about = "Vuelta a Honduras 2025 results browser"
)]
struct Cli {
    /// Dataset JSON to use instead of the embedded results
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Command {
    /// List classifications in tab order
    List,
    /// Show one classification table
    Show {
        key: String,
        /// Case-insensitive rider (or team) name substring
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value = "")]
        team: String,
        #[arg(long, default_value = "")]
        country: String,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Show the filter values available in a classification
    Facets { key: String },
    /// Look up a rider by bib number
    Rider { bib: String },
    /// Interactive browser on stdin/stdout
    Browse,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BrowserError> {
    let store = match &cli.data {
        Some(path) => ClassificationStore::load(path)?,
        None => ClassificationStore::builtin()?,
    };
    let source = match &cli.data {
        Some(path) => path.display().to_string(),
        None => "embedded".to_string(),
    };
    tracing::info!(classifications = store.len(), %source, "results loaded");

    let out = execute(&store, &cli.command, cli.json)?;
    print!("{out}");
    Ok(())
}

fn execute(
    store: &ClassificationStore,
    command: &Command,
    json: bool,
) -> Result<String, BrowserError> {
    let out = match command {
        Command::List => {
            if json {
                render_list_json(store).map_err(BrowserError::Encode)? + "\n"
            } else {
                render_list(store)
            }
        }
        Command::Show {
            key,
            text,
            team,
            country,
            category,
        } => {
            let classification = store.require(key)?;
            let filter = TableFilter {
                text: text.clone(),
                team: team.clone(),
                country: country.clone(),
                category: category.clone(),
            };
            let rows = filter_rows(&classification.rows, classification.kind, &filter);
            tracing::info!(
                key = %key,
                shown = rows.len(),
                total = classification.rows.len(),
                "classification filtered"
            );
            if json {
                render_table_json(classification, &rows).map_err(BrowserError::Encode)? + "\n"
            } else {
                render_table_text(classification, &rows)
            }
        }
        Command::Facets { key } => {
            let classification = store.require(key)?;
            let facets = derive_facets(&classification.rows, classification.kind);
            if json {
                render_facets_json(&facets).map_err(BrowserError::Encode)? + "\n"
            } else {
                render_facets_text(&facets, classification.kind)
            }
        }
        Command::Rider { bib } => {
            let bib = bib.trim();
            let summary = if bib.is_empty() {
                None
            } else {
                find_rider(store, bib).map(|lookup| summarize_profile(&lookup))
            };
            if summary.is_none() {
                tracing::info!(query = bib, "rider not found");
            }
            match (json, &summary) {
                (true, _) => {
                    render_profile_json(bib, summary.as_ref()).map_err(BrowserError::Encode)?
                        + "\n"
                }
                (false, Some(summary)) => render_profile_text(summary),
                (false, None) => render_not_found(bib),
            }
        }
        Command::Browse => {
            let stdin = std::io::stdin();
            shell::run_interactive(store, stdin.lock(), std::io::stdout())
                .map_err(BrowserError::Terminal)?;
            String::new()
        }
    };
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
