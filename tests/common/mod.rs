//! Shared fixtures, fakes and key helpers.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use cinelist::api::{ApiError, MovieSource};
use cinelist::catalog::{Movie, MovieId};
use cinelist::favorites::{Favorites, FavoritesRepository};
use cinelist::storage::{KeyValueStore, MemoryStore, StorageError};
use cinelist::ui::app::{App, UiCommand};
use cinelist::ui::catalog::CatalogIntent;
use cinelist::ui::movies::{MoviesIntent, MoviesReducer, MoviesViewState};
use cinelist::ui::mvi::Reducer;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

// -- Fixtures -----------------------------------------------------------------

pub fn movie(id: MovieId, year: i32, director: &str, rating: f64) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        director: director.to_string(),
        poster: format!("https://posters.test/{id}.jpg"),
        year,
        rating,
    }
}

/// Six movies, ids 1..=6, spread over years, directors and ratings.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie(1, 2010, "Christopher Nolan", 8.8),
        movie(2, 2014, "Christopher Nolan", 8.6),
        movie(3, 1999, "Lana Wachowski", 8.7),
        movie(4, 2010, "Martin Scorsese", 8.2),
        movie(5, 2019, "Bong Joon-ho", 8.5),
        movie(6, 2003, "Uwe Boll", 3.4),
    ]
}

pub fn sample_collection() -> Arc<Vec<Movie>> {
    Arc::new(sample_movies())
}

/// View over `collection` with the given favorites, no filter applied.
pub fn view_with(collection: Arc<Vec<Movie>>, favorite_ids: &[MovieId]) -> MoviesViewState {
    let state = MoviesReducer::reduce(
        MoviesViewState::default(),
        MoviesIntent::Initialize { collection },
    );
    MoviesReducer::reduce(
        state,
        MoviesIntent::FavoritesLoaded {
            favorites: favorite_ids.iter().copied().collect(),
        },
    )
}

// -- Fakes --------------------------------------------------------------------

/// In-process movie source. Counts collection fetches.
pub struct FakeMovieSource {
    movies: Vec<Movie>,
    fail: bool,
    fetch_all_calls: AtomicUsize,
}

impl FakeMovieSource {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            fail: false,
            fetch_all_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            movies: Vec::new(),
            fail: true,
            fetch_all_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetch_all_calls(&self) -> usize {
        self.fetch_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieSource for FakeMovieSource {
    async fn fetch_all(&self) -> Result<Vec<Movie>, ApiError> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ApiError::Status {
                url: "fake://movies".to_string(),
                status: 500,
            });
        }
        Ok(self.movies.clone())
    }

    async fn fetch_by_id(&self, id: MovieId) -> Result<Movie, ApiError> {
        self.movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                url: format!("fake://movies/{id}"),
                status: 404,
            })
    }
}

/// Store whose every operation fails.
pub struct FailingStore;

impl FailingStore {
    fn unplugged() -> StorageError {
        StorageError::Io {
            path: PathBuf::from("/unplugged/storage.json"),
            source: std::io::Error::other("disk unplugged"),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::unplugged())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::unplugged())
    }
}

pub fn memory_repository() -> (MemoryStore, FavoritesRepository) {
    let store = MemoryStore::new();
    let repository = FavoritesRepository::new(Arc::new(store.clone()), "favorites");
    (store, repository)
}

// -- App helpers --------------------------------------------------------------

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn make_app() -> App {
    App::new()
}

/// App with the sample catalog loaded, favorites not yet read from storage.
pub fn catalog_only_app() -> App {
    let mut app = make_app();
    app.dispatch_catalog(CatalogIntent::Loaded {
        movies: sample_movies(),
    });
    app
}

/// App with the sample catalog and an empty stored favorites map loaded,
/// no command channel.
pub fn loaded_app() -> App {
    let mut app = catalog_only_app();
    app.on_favorites_loaded(Favorites::new());
    app
}

/// Loaded app wired to a command channel the test can inspect.
pub fn loaded_app_with_commands() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = loaded_app();
    app.set_command_sender(tx);
    (app, rx)
}

/// Drain every command queued so far.
pub fn drain_commands(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}
