//! Playback engine seam.

/// Kind of media a source descriptor carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Audio,
    Video,
}

/// Everything the engine needs to load a piece of media.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDescriptor {
    pub title: String,
    pub media_type: MediaType,
    /// Candidate URLs in preference order.
    pub sources: Vec<String>,
}

/// The external playback engine.
///
/// Readiness ("can play") stays inside the engine: the player hands over a
/// source and a poster and takes no further part in the engine's lifecycle.
pub trait PlaybackEngine: Send + Sync {
    /// Load a new source, replacing whatever is currently loaded.
    fn load(&self, source: &SourceDescriptor);

    /// Artwork to display for the loaded source.
    fn set_poster(&self, url: &str);

    /// Current playback speed.
    fn speed(&self) -> f64;

    /// Apply a playback speed. Only values from
    /// [`speed_steps`](Self::speed_steps) are ever passed.
    fn set_speed(&self, speed: f64);

    /// The selectable speeds, in ascending order.
    fn speed_steps(&self) -> Vec<f64>;
}
