//! Anatomical region inspector binary.
//!
//! Loads region data (or the built-in catalog) and prints JSON views of it.
//!
//! ```text
//! anatomy-inspect [stats | validate | path <id> | tree <id> | search <query> | contralateral <id>]
//! ```

use anatomy_registry::{catalog, load_store, HierarchyNavigator, LoadConfig, RegionStore, SearchOptions};
use anatomy_types::RegionSummary;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DATA_PATH_VAR: &str = "ANATOMY_DATA_PATH";
const DEFAULT_SEARCH_LIMIT: usize = 20;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'q> {
    query: &'q str,
    total: usize,
    results: Vec<RegionSummary>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = open_store()?;
    let nav = HierarchyNavigator::new(&store);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("stats");
    let operand = args.get(1).map(String::as_str);

    match (command, operand) {
        ("stats", _) => print_json(&nav.get_statistics())?,
        ("validate", _) => {
            let issues = nav.validate_hierarchy();
            print_json(&issues)?;
            if !issues.is_empty() {
                tracing::warn!("Region hierarchy has {} issues", issues.len());
                std::process::exit(1);
            }
        }
        ("path", Some(id)) => print_json(&nav.get_breadcrumbs(id))?,
        ("tree", Some(id)) => print_json(&nav.build_tree(id))?,
        ("contralateral", Some(id)) => print_json(&nav.get_contralateral(id).map(|r| r.summary()))?,
        ("search", Some(query)) => {
            let hits = nav.search(&SearchOptions::new().query(query));
            let report = SearchReport {
                query,
                total: hits.len(),
                results: hits
                    .into_iter()
                    .take(DEFAULT_SEARCH_LIMIT)
                    .map(|r| r.summary())
                    .collect(),
            };
            print_json(&report)?;
        }
        _ => {
            eprintln!(
                "usage: anatomy-inspect [stats | validate | path <id> | tree <id> | search <query> | contralateral <id>]"
            );
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Loads from `ANATOMY_DATA_PATH` if set, else builds the standard catalog.
fn open_store() -> Result<RegionStore, Box<dyn std::error::Error>> {
    match std::env::var(DATA_PATH_VAR) {
        Ok(path) => {
            tracing::info!("Loading region data from: {}", path);
            Ok(load_store(&path, &LoadConfig::default())?)
        }
        Err(_) => {
            tracing::info!("{} not set, using the standard body catalog", DATA_PATH_VAR);
            Ok(catalog::standard_body()?)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
