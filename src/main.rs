use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use tablescout::catalog::Catalog;
use tablescout::config::Config;
use tablescout::listing::ListingStore;
use tablescout::logging::init_tracing;
use tablescout::ui::app::App;
use tablescout::ui::runtime;

#[derive(Parser, Debug)]
#[command(
    name = "tablescout",
    version,
    about = "Browsable, filterable restaurant directory for the terminal"
)]
struct Cli {
    /// Config file to use instead of the platform default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog JSON file to load instead of the built-in seed.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Initial category filter.
    #[arg(long, value_name = "NAME")]
    category: Option<String>,

    /// Initial search term.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());
    let catalog = match &catalog_path {
        Some(path) => Catalog::load_from(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::seed(),
    };
    tracing::info!(restaurants = catalog.restaurants.len(), "catalog loaded");

    let store = ListingStore::new(catalog);
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config, store);
    if let Some(category) = &cli.category {
        app.set_category(category);
    }
    if let Some(search) = &cli.search {
        app.set_search(search);
    }

    runtime::run(app, tick_rate).context("running UI")?;
    Ok(())
}
