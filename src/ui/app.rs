use crate::catalog::{Movie, MovieId};
use crate::favorites::Favorites;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::filter::{FilterDialogState, FilterIntent, FilterReducer};
use crate::ui::movies::{MoviesIntent, MoviesReducer, MoviesViewState, ViewSignal};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

/// How many ticks a status message stays on screen.
const STATUS_TTL_TICKS: u16 = 12;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Filter,
    Details,
}

/// Side effects requested by the UI thread, executed by a background task.
#[derive(Debug)]
pub enum UiCommand {
    /// Write the full favorites snapshot (write-through, full overwrite).
    PersistFavorites(Favorites),
    FetchDetails { id: MovieId },
    ReloadCatalog,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    catalog: CatalogState,
    movies: MoviesViewState,
    filter_dialog: FilterDialogState,
    /// Row of the highlighted movie in the current view.
    selection: usize,
    /// Movie shown in the details popup.
    details: Option<Movie>,
    status: Option<StatusMessage>,
    status_ttl: u16,
    command_sender: Option<UiCommandSender>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            catalog: CatalogState::default(),
            movies: MoviesViewState::default(),
            filter_dialog: FilterDialogState::default(),
            selection: 0,
            details: None,
            status: None,
            status_ttl: 0,
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn movies(&self) -> &MoviesViewState {
        &self.movies
    }

    pub fn filter_dialog(&self) -> &FilterDialogState {
        &self.filter_dialog
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selection)
    }

    pub fn details(&self) -> Option<&Movie> {
        self.details.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        if self.filter_dialog.is_visible() {
            Some(PopupKind::Filter)
        } else if self.details.is_some() {
            Some(PopupKind::Details)
        } else {
            None
        }
    }

    pub fn on_tick(&mut self) {
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status = None;
            }
        }
    }

    // -- Dispatch ---------------------------------------------------------

    pub fn dispatch_catalog(&mut self, intent: CatalogIntent) {
        let was_loaded = self.catalog.is_loaded();
        dispatch_mvi!(self, catalog, CatalogReducer, intent);

        if was_loaded {
            return;
        }
        if let Some(collection) = self.catalog.shared_movies() {
            self.dispatch_movies(MoviesIntent::Initialize { collection });
        } else if let Some(message) = self.catalog.error_message() {
            let message = message.to_string();
            self.set_status(StatusMessage::Error(message));
        }
    }

    pub fn dispatch_movies(&mut self, intent: MoviesIntent) {
        tracing::trace!(?intent, "movies intent");
        dispatch_mvi!(self, movies, MoviesReducer, intent);
        self.clamp_selection();
    }

    pub fn dispatch_filter(&mut self, intent: FilterIntent) {
        dispatch_mvi!(self, filter_dialog, FilterReducer, intent);
    }

    // -- Events from background tasks -------------------------------------

    /// Toggles made while loading are replayed by the reducer; the merged
    /// map is then written so the stored blob matches memory again.
    pub fn on_favorites_loaded(&mut self, favorites: Favorites) {
        let replayed = !self.movies.pending_edits.is_empty();
        self.dispatch_movies(MoviesIntent::FavoritesLoaded { favorites });
        if replayed {
            self.persist_snapshot();
        }
    }

    /// Persisting failed. The in-memory favorites stay as they are.
    pub fn on_persist_failed(&mut self, error: &str) {
        self.set_status(StatusMessage::Error(format!("Could not save favorites: {error}")));
    }

    pub fn on_details(&mut self, movie: Movie) {
        if self.details.as_ref().is_some_and(|shown| shown.id == movie.id) {
            self.details = Some(movie);
        }
    }

    pub fn on_details_failed(&mut self, error: &str) {
        self.set_status(StatusMessage::Error(format!("Could not refresh details: {error}")));
    }

    // -- User actions -----------------------------------------------------

    pub fn move_up(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selection + 1 < self.movies.len() {
            self.selection += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selection = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selection = self.movies.len().saturating_sub(1);
    }

    pub fn toggle_favorite_selected(&mut self) {
        if let Some(id) = self.selected_movie().map(|m| m.id) {
            self.toggle_favorite(id);
        }
    }

    /// Flip in memory first, then hand the full snapshot to the persist task.
    /// Until the stored favorites are in, the flip is only kept in memory.
    pub fn toggle_favorite(&mut self, id: MovieId) {
        self.dispatch_movies(MoviesIntent::ToggleFavorite { id });
        if self.movies.favorites_loaded {
            self.persist_snapshot();
        }
    }

    pub fn toggle_show_only_favorites(&mut self) {
        self.dispatch_movies(MoviesIntent::ToggleShowOnlyFavorites);

        let Some(signal) = self.movies.signal else {
            return;
        };
        let status = match signal {
            ViewSignal::FavoritesShown => StatusMessage::Info(format!(
                "Showing {} favorite(s)",
                self.movies.len()
            )),
            ViewSignal::AllShown => StatusMessage::Info("Showing all movies".to_string()),
            ViewSignal::NoFavorites => StatusMessage::Error("No favorite movies yet".to_string()),
        };
        if signal != ViewSignal::NoFavorites {
            self.selection = 0;
        }
        self.set_status(status);
        self.dispatch_movies(MoviesIntent::DismissSignal);
    }

    pub fn open_filter_dialog(&mut self) {
        let Some(filters) = self.catalog.filters().cloned() else {
            return;
        };
        self.dispatch_filter(FilterIntent::Open {
            filters,
            current: self.movies.predicate.clone(),
        });
    }

    /// Apply the dialog's draft to the list and close the dialog.
    pub fn apply_filter_dialog(&mut self) {
        let Some(predicate) = self.filter_dialog.draft().cloned() else {
            return;
        };
        self.dispatch_movies(MoviesIntent::ApplyFilters { predicate });
        self.dispatch_filter(FilterIntent::Close);
        self.selection = 0;
        let matched = self.movies.len();
        self.set_status(StatusMessage::Info(format!("{matched} movie(s) match")));
    }

    pub fn open_details(&mut self) {
        let Some(movie) = self.selected_movie().cloned() else {
            return;
        };
        let id = movie.id;
        self.details = Some(movie);
        self.send_command(UiCommand::FetchDetails { id });
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    /// Manual reload; only meaningful after a failed fetch.
    pub fn request_reload(&mut self) {
        if !self.catalog.is_failed() {
            return;
        }
        self.dispatch_catalog(CatalogIntent::Reload);
        self.send_command(UiCommand::ReloadCatalog);
    }

    // -- Internals --------------------------------------------------------

    fn persist_snapshot(&mut self) {
        let snapshot = self.movies.favorites.clone();
        self.send_command(UiCommand::PersistFavorites(snapshot));
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.command_sender else {
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::warn!(error = %err, "UI command dropped");
            self.set_status(StatusMessage::Error("Background worker unavailable".to_string()));
        }
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.status_ttl = STATUS_TTL_TICKS;
    }

    fn clamp_selection(&mut self) {
        let len = self.movies.len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
