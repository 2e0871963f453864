use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::MovieSource;
use crate::catalog::load_catalog;
use crate::favorites::FavoritesRepository;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{apply_event, AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Queue depth for UI commands. Toggling faster than the disk can keep up
/// drops commands and surfaces a status message.
const COMMAND_QUEUE_DEPTH: usize = 64;

/// Collaborators the terminal UI talks to.
#[derive(Clone)]
pub struct Services {
    pub source: Arc<dyn MovieSource>,
    pub favorites: FavoritesRepository,
}

/// Run the terminal UI until the user quits.
///
/// Drawing and input run on the calling thread; fetching and persisting run
/// on `handle`'s runtime and report back through the event channel.
pub fn run(services: Services, handle: &Handle, tick_rate: Duration) -> std::io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    app.set_command_sender(command_tx);

    spawn_startup_tasks(handle, &services, events.sender());
    spawn_command_worker(handle, services, command_rx, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Catalog fetch and favorites load run independently; either may finish first.
pub fn spawn_startup_tasks(handle: &Handle, services: &Services, events: std_mpsc::Sender<AppEvent>) {
    let source = Arc::clone(&services.source);
    let catalog_events = events.clone();
    handle.spawn(async move {
        let intent = load_catalog(source.as_ref()).await;
        let _ = catalog_events.send(AppEvent::Catalog(intent));
    });

    let repository = services.favorites.clone();
    handle.spawn_blocking(move || {
        let favorites = repository.load();
        let _ = events.send(AppEvent::FavoritesLoaded(favorites));
    });
}

/// Executes UI commands in order. Sequential handling keeps favorites writes
/// ordered, so the last snapshot sent is the one left on disk.
pub fn spawn_command_worker(
    handle: &Handle,
    services: Services,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::PersistFavorites(snapshot) => {
                    let repository = services.favorites.clone();
                    let result =
                        tokio::task::spawn_blocking(move || repository.persist(&snapshot)).await;
                    let error = match result {
                        Ok(Ok(())) => continue,
                        Ok(Err(err)) => err.to_string(),
                        Err(join_err) => join_err.to_string(),
                    };
                    tracing::warn!(%error, "Failed to persist favorites");
                    let _ = events.send(AppEvent::PersistFailed(error));
                }
                UiCommand::FetchDetails { id } => {
                    let event = match services.source.fetch_by_id(id).await {
                        Ok(movie) => AppEvent::MovieDetails(movie),
                        Err(err) => {
                            tracing::warn!(id, error = %err, "Failed to fetch movie details");
                            AppEvent::DetailsFailed(err.to_string())
                        }
                    };
                    let _ = events.send(event);
                }
                UiCommand::ReloadCatalog => {
                    let intent = load_catalog(services.source.as_ref()).await;
                    let _ = events.send(AppEvent::Catalog(intent));
                }
            }
        }
        tracing::debug!("UI command channel closed");
    });
}
