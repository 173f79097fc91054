//! Command-line surface.
//!
//! All the effectful orchestration lives here: load the catalogue once per
//! command, then hand the already-loaded catalogue to the pure query engine
//! and resolver. Loader failures surface as inline reports; favourites
//! storage failures never do.

use clap::{Parser, Subcommand};
use miette::miette;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tuto_catalog::models::{Record, RecordId};
use tuto_catalog::{Catalog, Locator, Resolution};
use tuto_config::Config;
use tuto_favorites::FavoritesStore;
use tuto_favorites::slot::FileSlot;
use tuto_query::{Page, Query};
use tuto_source::backend::LocalSource;
use tuto_source::{BackendHandle, LoadSession, LoadState, Loader};

#[derive(Debug, Parser)]
#[command(name = "tuto", version, about = "Browse a catalogue of tutorials and resources")]
pub struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the catalogue, optionally filtered by tag
    List {
        /// Only records carrying this tag (exact, case-sensitive)
        #[arg(long)]
        tag: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Search record titles (case-insensitive substring)
    Search {
        term: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a record or section: records/{id} or records/{id}/{sectionId}
    Show { locator: String },
    /// Manage the favourites set
    Fav {
        #[command(subcommand)]
        action: FavCommand,
    },
    /// List every tag in the catalogue
    Tags,
}

#[derive(Debug, Subcommand)]
pub enum FavCommand {
    /// Show favourited records still present in the catalogue
    List,
    /// Add a tutorial to the favourites, or remove it if already there
    Toggle { id: String },
    /// Remove an id from the favourites (a no-op when absent)
    Remove { id: String },
}

pub async fn run(args: Args) -> miette::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|err| miette!("{err}"))?;
    tracing::debug!(
        source = %config.source.path.display(),
        favorites = %config.favorites.path.display(),
        "configuration loaded"
    );
    let favorites = FavoritesStore::new(FileSlot::new(&config.favorites.path));

    match args.command {
        Command::List { tag, page } => {
            let catalog = load_catalog(&config).await?;
            let query = Query::Browse { tag };
            list_page(&catalog, &favorites, &query, page, config.browse.page_size);
        },
        Command::Search { term, page } => {
            let catalog = load_catalog(&config).await?;
            let empty_message = format!("No results for \"{term}\".");
            let query = Query::Search { term };
            if tuto_query::filter(&catalog, &query).is_empty() {
                println!("{empty_message}");
            } else {
                list_page(&catalog, &favorites, &query, page, config.browse.page_size);
            }
        },
        Command::Show { locator } => {
            let catalog = load_catalog(&config).await?;
            let locator: Locator = locator.parse().map_err(|err| miette!("{err}"))?;
            match locator.resolve(&catalog).map_err(|err| miette!("{err}"))? {
                Resolution::Record(record) => show_record(record, &favorites),
                Resolution::Section(_, section) => {
                    println!("{}", section.title);
                    println!();
                    println!("{}", section.content);
                },
            }
        },
        Command::Fav { action } => match action {
            FavCommand::List => {
                let catalog = load_catalog(&config).await?;
                let saved = favorites.get();
                let records = catalog.favorites(&saved);
                if records.is_empty() {
                    println!("No favourites saved.");
                }
                for record in records {
                    println!("{}", record_line(record, &saved));
                }
            },
            FavCommand::Toggle { id } => {
                let catalog = load_catalog(&config).await?;
                let id = RecordId::new(id);
                let record = catalog.find_record(&id).map_err(|err| miette!("{err}"))?;
                if !record.is_tutorial() {
                    return Err(miette!(
                        "\"{}\" is a {} and cannot be favourited; only tutorials can",
                        record.title,
                        record.kind
                    ));
                }
                let saved = favorites.toggle(&id);
                if saved.contains(&id) {
                    println!("Added \"{}\" to favourites.", record.title);
                } else {
                    println!("Removed \"{}\" from favourites.", record.title);
                }
            },
            FavCommand::Remove { id } => {
                // No catalogue lookup: favourites outlive any one catalogue,
                // so stale ids must be removable too.
                let id = RecordId::new(id);
                favorites.remove(&id);
                println!("Removed \"{id}\" from favourites.");
            },
        },
        Command::Tags => {
            let catalog = load_catalog(&config).await?;
            for tag in tuto_query::tag_universe(&catalog) {
                println!("{tag}");
            }
        },
    }
    Ok(())
}

/// Drive one load attempt through the session state machine.
async fn load_catalog(config: &Config) -> miette::Result<Catalog> {
    let backend: BackendHandle = Arc::new(LocalSource::new(&config.source.path));
    let loader = Loader::new(backend);

    let mut session = LoadSession::new();
    let ticket = session.begin();
    let outcome = loader.load().await;
    session.complete(ticket, outcome);
    match session.into_state() {
        LoadState::Ready(catalog) => Ok(catalog),
        LoadState::Failed(err) => Err(miette!("{err}")),
        LoadState::Idle | LoadState::Loading => Err(miette!("catalogue load did not complete")),
    }
}

/// Render one page of query results, clamping the requested page number
/// into range first (the engine itself never clamps).
fn list_page(
    catalog: &Catalog,
    favorites: &FavoritesStore,
    query: &Query,
    requested: usize,
    page_size: usize,
) {
    let total = tuto_query::total_pages(tuto_query::filter(catalog, query).len(), page_size);
    let page = Page::new(requested, page_size).clamped(total);
    let result = tuto_query::run(catalog, query, page);

    if result.visible.is_empty() {
        println!("No records found.");
        return;
    }
    let saved = favorites.get();
    for record in &result.visible {
        println!("{}", record_line(record, &saved));
    }
    println!();
    println!("page {} of {}", page.number, result.total_pages);
}

/// One line per record: tutorials get a locator, other kinds are
/// display-only and show their kind instead.
fn record_line(record: &Record, favorites: &BTreeSet<RecordId>) -> String {
    let star = if favorites.contains(&record.id) { "* " } else { "  " };
    if record.is_tutorial() {
        format!("{star}{}  ({})", record.title, Locator::Record(record.id.clone()))
    } else {
        format!("{star}{}  ({})", record.title, record.kind)
    }
}

fn show_record(record: &Record, favorites: &FavoritesStore) {
    println!("{}", record.title);
    if let Some(author) = &record.author {
        println!("by {author}");
    }
    if favorites.contains(&record.id) {
        println!("(favourited)");
    }
    if let Some(description) = &record.description {
        println!();
        println!("{description}");
    }
    if !record.tags.is_empty() {
        println!();
        println!("tags: {}", record.tags.join(", "));
    }
    if record.is_tutorial() && !record.sections.is_empty() {
        println!();
        println!("Sections:");
        for section in &record.sections {
            println!("  {}  ({})", section.title, Locator::Section(record.id.clone(), section.id.clone()));
        }
    }
}
