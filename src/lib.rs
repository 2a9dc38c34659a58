//! vinyl — a headless playback-and-playlist controller core.
//!
//! Coordinates three concerns: guarded asynchronous search/resolve calls
//! against a music backend, where stale responses are dropped the moment a
//! newer request of the same kind starts; a persisted, ordered,
//! deduplicated playlist kept in sync with a rendered view; and the
//! active-song bookkeeping that feeds an external playback engine.
//!
//! Rendering, playback, and persistence are collaborator traits — embedders
//! bring their own. The [`Player`] aggregates everything and carries the
//! handler bodies a view layer binds its events to.

pub mod config;
pub mod engine;
pub mod error;
pub mod guard;
pub mod player;
pub mod playlist;
pub mod service;
pub mod storage;
pub mod view;

pub use config::Config;
pub use engine::{MediaType, PlaybackEngine, SourceDescriptor};
pub use error::{Error, Result};
pub use guard::{OpKind, OpToken, StalenessGuard};
pub use player::Player;
pub use playlist::{InsertOutcome, PlaylistStore};
pub use service::{HttpBackend, MusicBackend, Track};
pub use storage::{FileSlot, MemorySlot, PlaylistSlot};
pub use view::{Notifier, PlaylistView, ResultsView};
