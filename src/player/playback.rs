use tracing::{debug, warn};

use super::Player;
use crate::engine::{MediaType, SourceDescriptor};
use crate::error::{Error, Result};
use crate::guard::OpKind;
use crate::playlist::InsertOutcome;
use crate::service::Track;

/// Append a throwaway random query parameter so the engine never replays a
/// cached response for a freshly resolved URL. Draws from the same random
/// primitive as token minting but shares no state with it.
fn cache_busted(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}rand={}", rand::random::<u64>())
}

impl Player {
    /// Resolve a track id into a playable URL, guarded against overlapping
    /// resolves: a success arriving after a newer resolve has started fails
    /// with [`Error::Superseded`]. Backend and transport failures propagate
    /// regardless of token currency.
    pub async fn resolve(&self, id: &str) -> Result<String> {
        self.resolve_with_guard(id, true).await
    }

    /// Resolve without staleness checking, for initialization paths where
    /// only one call is ever outstanding.
    pub async fn resolve_unguarded(&self, id: &str) -> Result<String> {
        self.resolve_with_guard(id, false).await
    }

    async fn resolve_with_guard(&self, id: &str, guarded: bool) -> Result<String> {
        let token = guarded.then(|| self.guard.begin(OpKind::Resolve));

        let url = self.backend.resolve(id).await?;

        if let Some(token) = token {
            if !self.guard.is_current(OpKind::Resolve, token) {
                debug!("Dropping superseded resolve result for {id}");
                return Err(Error::Superseded);
            }
        }

        Ok(url)
    }

    /// Load `track` into the engine and make it the active song.
    ///
    /// The track must already carry its resolved URL. The engine gets a
    /// cache-busted copy of the URL and the track's display image as
    /// poster; the playlist view marks the entry active.
    pub fn set_active(&self, track: Track) -> Result<()> {
        let url = track
            .url
            .as_deref()
            .ok_or_else(|| Error::InvalidArgument("track has no resolved url".to_string()))?;

        self.engine.load(&SourceDescriptor {
            title: track.title.clone(),
            media_type: MediaType::Audio,
            sources: vec![cache_busted(url)],
        });
        self.engine.set_poster(&track.display_image());

        self.playlist_view.mark_active(&track.id);

        debug!("Now playing: {}", track.title);

        *self
            .active_song
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(track);

        Ok(())
    }

    /// Resolve, play, and record in the playlist — the select-a-search-result
    /// path. A fresh insert also drives the playlist view incrementally; a
    /// duplicate id leaves the playlist alone.
    pub async fn play_and_remember(&self, track: Track) -> Result<()> {
        let url = self.resolve(&track.id).await?;
        let track = track.with_url(url);

        self.set_active(track.clone())?;

        match self.store.insert_end(track.clone()) {
            Ok(InsertOutcome::Inserted(position)) => {
                self.playlist_view.insert_entry(position, &track);
            }
            Ok(InsertOutcome::Duplicate) => {}
            // playback has already started at this point
            Err(e) => warn!("Could not persist playlist entry: {e}"),
        }

        Ok(())
    }

    /// Handler body for clicking an existing playlist entry: resolve and
    /// play it without re-inserting.
    pub async fn play_entry(&self, track: Track) -> Result<()> {
        self.notifier.toast(&format!("Loading {}!", track.title));

        match self.resolve(&track.id).await {
            Ok(url) => self.set_active(track.with_url(url)),
            Err(Error::Superseded) => Ok(()),
            Err(err) => {
                warn!("Could not resolve {}: {err}", track.id);
                self.notifier.toast(&format!("Couldn't play that track: {err}"));
                Err(err)
            }
        }
    }

    /// Initialization path: resolve unguarded and make the track active
    /// without touching the playlist.
    pub async fn set_initial_track(&self, track: Track) -> Result<()> {
        let url = self.resolve_unguarded(&track.id).await?;
        self.set_active(track.with_url(url))
    }

    /// Handler body for an entry's delete control. The view removes its own
    /// node; the store just forgets the id.
    pub fn delete_entry(&self, id: &str) -> anyhow::Result<()> {
        self.store.remove(id)
    }

    /// Step the playback speed through the engine's ascending speed list.
    ///
    /// A zero delta is rejected. Stepping past either end holds at the
    /// boundary; a current speed the engine does not list steps as if from
    /// just below the first entry.
    pub fn adjust_speed(&self, delta: i32) -> Result<()> {
        if delta == 0 {
            return Err(Error::InvalidArgument(
                "speed delta is required and can't be 0".to_string(),
            ));
        }

        let steps = self.engine.speed_steps();
        if steps.is_empty() {
            return Ok(());
        }

        let current = self.engine.speed();
        let index = steps
            .iter()
            .position(|&s| s == current)
            .map(|i| i as i64)
            .unwrap_or(-1);

        let stepped = (index + i64::from(delta)).clamp(0, steps.len() as i64 - 1);

        if let Some(&speed) = steps.get(stepped as usize) {
            self.engine.set_speed(speed);
        }

        Ok(())
    }
}
