mod playback;
mod search;

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use anyhow::Result;

use crate::config::Config;
use crate::engine::PlaybackEngine;
use crate::guard::StalenessGuard;
use crate::playlist::PlaylistStore;
use crate::service::{HttpBackend, MusicBackend, Track};
use crate::storage::{FileSlot, PlaylistSlot};
use crate::view::{Notifier, PlaylistView, ResultsView};

/// The controller. One per session.
///
/// Aggregates the playlist store, the staleness guard, the backend, and the
/// external collaborators (engine, views, notifier). Methods take `&self`;
/// interior state sits behind sync primitives that are never held across an
/// await, so overlapping asynchronous flows interleave only at the
/// documented staleness checkpoints.
pub struct Player {
    backend: Box<dyn MusicBackend>,
    store: PlaylistStore,
    guard: StalenessGuard,
    engine: Box<dyn PlaybackEngine>,
    results_view: Box<dyn ResultsView>,
    playlist_view: Box<dyn PlaylistView>,
    notifier: Box<dyn Notifier>,
    active_song: Mutex<Option<Track>>,
}

impl Player {
    /// Build the controller and render the persisted playlist, the empty
    /// state included.
    pub fn new(
        backend: Box<dyn MusicBackend>,
        slot: Box<dyn PlaylistSlot>,
        engine: Box<dyn PlaybackEngine>,
        results_view: Box<dyn ResultsView>,
        playlist_view: Box<dyn PlaylistView>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let player = Self {
            backend,
            store: PlaylistStore::new(slot),
            guard: StalenessGuard::new(),
            engine,
            results_view,
            playlist_view,
            notifier,
            active_song: Mutex::new(None),
        };

        player.render_playlist();
        player
    }

    /// [`new`](Self::new) with the HTTP backend and file slot wired from
    /// configuration.
    pub fn with_config(
        config: &Config,
        engine: Box<dyn PlaybackEngine>,
        results_view: Box<dyn ResultsView>,
        playlist_view: Box<dyn PlaylistView>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self> {
        let backend = Box::new(HttpBackend::new(config.api.base_url.clone()));

        let slot: Box<dyn PlaylistSlot> = match config.storage.playlist_path {
            Some(ref path) => Box::new(FileSlot::at_path(PathBuf::from(path))),
            None => Box::new(FileSlot::new()?),
        };

        Ok(Self::new(
            backend,
            slot,
            engine,
            results_view,
            playlist_view,
            notifier,
        ))
    }

    /// The track currently loaded into the engine, if any.
    pub fn active_song(&self) -> Option<Track> {
        self.active_song
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Full redraw of the playlist view from the persisted list.
    pub fn render_playlist(&self) {
        let tracks = self.store.list();
        self.playlist_view.render_all(&tracks);
    }

    /// Read access to the persisted playlist.
    pub fn playlist(&self) -> Vec<Track> {
        self.store.list()
    }
}
