//! Command-line surface: argument parsing and the headless subcommands.
//!
//! Headless commands drive the same reducers as the terminal UI, so
//! `cinelist list --year 2010` prints exactly what the browser would show
//! after applying that filter.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::api::{ApiError, HttpMovieClient, MovieSource};
use crate::catalog::{
    AvailableFilters, CatalogStore, FilterPredicate, Movie, MovieId, RatingBucket,
    FETCH_FAILED_MESSAGE,
};
use crate::config::{ApiConfig, Config, ConfigError, StorageConfig, StorageLocation};
use crate::favorites::{Favorites, FavoritesRepository};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui::movies::{MoviesIntent, MoviesReducer, MoviesViewState, ViewSignal};
use crate::ui::mvi::Reducer;
use crate::ui::Services;

#[derive(Debug, Parser)]
#[command(name = "cinelist", version)]
#[command(about = "Browse a movie collection and keep track of favorites")]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the movies API collection URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the storage file (`:memory:` keeps favorites in-process)
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the terminal browser (default)
    Browse,
    /// Print the movies matching the given filters
    List(ListArgs),
    /// Fetch one movie and print it as JSON
    Show { id: MovieId },
    /// Flip the favorite flag of a movie
    Favorite { id: MovieId },
    /// Print the filter values present in the collection
    Filters,
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Keep movies released in this year (repeatable)
    #[arg(long = "year", value_name = "YEAR")]
    pub years: Vec<String>,

    /// Keep movies by this director (repeatable)
    #[arg(long = "director", value_name = "NAME")]
    pub directors: Vec<String>,

    /// Keep movies rated at least 7+, 8+ or 9+ (repeatable)
    #[arg(long = "rating", value_name = "BUCKET")]
    pub ratings: Vec<RatingBucket>,

    /// Show only favorites (filters do not apply to the favorites view)
    #[arg(long, conflicts_with_all = ["years", "directors", "ratings"])]
    pub favorites: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn predicate(&self) -> FilterPredicate {
        let predicate = self
            .years
            .iter()
            .fold(FilterPredicate::default(), |p, year| p.with_year(year.as_str()));
        let predicate = self
            .directors
            .iter()
            .fold(predicate, |p, director| p.with_director(director.as_str()));
        self.ratings
            .iter()
            .fold(predicate, |p, bucket| p.with_rating(*bucket))
    }
}

impl Cli {
    /// True when the terminal browser should run.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::Browse))
    }

    /// Load the config file and layer command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(storage) = &self.storage {
            config.storage.path = Some(storage.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

pub fn open_store(location: StorageLocation) -> Arc<dyn KeyValueStore> {
    match location {
        StorageLocation::Memory => Arc::new(MemoryStore::new()),
        StorageLocation::File(path) => Arc::new(FileStore::new(path)),
    }
}

pub fn favorites_repository(config: &StorageConfig) -> FavoritesRepository {
    FavoritesRepository::new(open_store(config.location()), config.favorites_key.clone())
}

pub fn movie_source(config: &ApiConfig) -> Result<Arc<dyn MovieSource>, ApiError> {
    Ok(Arc::new(HttpMovieClient::new(config)?))
}

/// Wire the real collaborators from configuration.
pub fn build_services(config: &Config) -> Result<Services, ApiError> {
    Ok(Services {
        source: movie_source(&config.api)?,
        favorites: favorites_repository(&config.storage),
    })
}

/// Run a non-interactive subcommand, writing its output to `out`.
pub async fn run_headless(command: Command, services: &Services, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Browse => Err(anyhow!("browse is interactive")),
        Command::List(args) => list(services, &args, out).await,
        Command::Show { id } => show(services, id, out).await,
        Command::Favorite { id } => favorite(services, id, out).await,
        Command::Filters => filters(services, out).await,
    }
}

/// Build the view the browser would show for these arguments.
pub fn build_view(
    collection: Arc<Vec<Movie>>,
    favorites: Favorites,
    args: &ListArgs,
) -> MoviesViewState {
    let mut view = MoviesReducer::reduce(
        MoviesViewState::default(),
        MoviesIntent::Initialize { collection },
    );
    view = MoviesReducer::reduce(view, MoviesIntent::FavoritesLoaded { favorites });

    let intent = if args.favorites {
        MoviesIntent::ToggleShowOnlyFavorites
    } else {
        MoviesIntent::ApplyFilters {
            predicate: args.predicate(),
        }
    };
    MoviesReducer::reduce(view, intent)
}

#[derive(Serialize)]
struct ListedMovie<'a> {
    #[serde(flatten)]
    movie: &'a Movie,
    favorite: bool,
}

async fn list(services: &Services, args: &ListArgs, out: &mut impl Write) -> Result<()> {
    let collection = load_collection(services).await?;
    let favorites = load_favorites(services).await?;
    let view = build_view(collection, favorites, args);

    if view.signal == Some(ViewSignal::NoFavorites) {
        writeln!(out, "No favorite movies yet.")?;
        return Ok(());
    }

    if args.json {
        let listed: Vec<ListedMovie<'_>> = view
            .visible()
            .map(|movie| ListedMovie {
                movie,
                favorite: view.is_favorite(movie.id),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &listed)?;
        writeln!(out)?;
        return Ok(());
    }

    for movie in view.visible() {
        writeln!(out, "{}", format_row(movie, view.is_favorite(movie.id)))?;
    }
    writeln!(out, "{} of {} movie(s)", view.len(), view.collection.len())?;
    Ok(())
}

pub fn format_row(movie: &Movie, favorite: bool) -> String {
    let mark = if favorite { "[*]" } else { "[ ]" };
    format!(
        "{mark} {:>4}  {}  {:>4.1}  {} ({})",
        movie.id, movie.year, movie.rating, movie.title, movie.director
    )
}

async fn show(services: &Services, id: MovieId, out: &mut impl Write) -> Result<()> {
    let movie = services
        .source
        .fetch_by_id(id)
        .await
        .with_context(|| format!("Failed to fetch movie {id}"))?;
    writeln!(out, "{}", serde_json::to_string_pretty(&movie)?)?;
    Ok(())
}

async fn favorite(services: &Services, id: MovieId, out: &mut impl Write) -> Result<()> {
    let repository = services.favorites.clone();
    let now_favorite = tokio::task::spawn_blocking(move || -> Result<bool> {
        let mut favorites = repository.load();
        let now_favorite = favorites.toggle(id);
        repository
            .persist(&favorites)
            .context("Could not save favorites")?;
        Ok(now_favorite)
    })
    .await??;

    if now_favorite {
        writeln!(out, "Movie {id} is now a favorite")?;
    } else {
        writeln!(out, "Movie {id} is no longer a favorite")?;
    }
    Ok(())
}

async fn filters(services: &Services, out: &mut impl Write) -> Result<()> {
    let collection = load_collection(services).await?;
    let filters = AvailableFilters::from_movies(&collection);
    let ratings: Vec<&str> = RatingBucket::ALL.iter().map(RatingBucket::label).collect();

    writeln!(out, "Years: {}", filters.years.join(", "))?;
    writeln!(out, "Directors: {}", filters.directors.join(", "))?;
    writeln!(out, "Ratings: {}", ratings.join(", "))?;
    Ok(())
}

async fn load_collection(services: &Services) -> Result<Arc<Vec<Movie>>> {
    let mut store = CatalogStore::new(Arc::clone(&services.source));
    let state = store.load().await;
    match state.shared_movies() {
        Some(movies) => Ok(movies),
        None => Err(anyhow!(
            "{}",
            state.error_message().unwrap_or(FETCH_FAILED_MESSAGE)
        )),
    }
}

async fn load_favorites(services: &Services) -> Result<Favorites> {
    let repository = services.favorites.clone();
    Ok(tokio::task::spawn_blocking(move || repository.load()).await?)
}
