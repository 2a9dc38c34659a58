//! Render-sink seams.
//!
//! The core never renders anything itself; it drives these traits with
//! enough information for a view layer to redraw minimally. Binding clicks
//! and keys to the player's handler methods is likewise the view layer's
//! concern — the core only supplies the handler bodies.

use crate::service::Track;

/// Sink for search results.
pub trait ResultsView: Send + Sync {
    /// A new search just started; show a transient in-progress placeholder.
    fn show_loading(&self);

    /// Replace the contents with these candidates. Each carries its full
    /// track data so a selection can be echoed back to
    /// [`Player::choose_result`](crate::player::Player::choose_result).
    fn show_results(&self, results: &[Track]);

    /// Replace the contents with an error state.
    fn show_error(&self, message: &str);
}

/// Sink for the persisted playlist.
pub trait PlaylistView: Send + Sync {
    /// Redraw the whole playlist: numbered, titled, deletable, clickable
    /// entries. An empty slice means there is nothing to show; views
    /// typically render their "no songs" state.
    fn render_all(&self, tracks: &[Track]);

    /// A single entry was inserted at `position`; entries after it shift
    /// down by one.
    fn insert_entry(&self, position: usize, track: &Track);

    /// Mark the entry with this id as the active one, clearing any previous
    /// marking. At most one entry is ever marked.
    fn mark_active(&self, id: &str);
}

/// Sink for short-lived, auto-dismissing notifications.
pub trait Notifier: Send + Sync {
    fn toast(&self, message: &str);
}
