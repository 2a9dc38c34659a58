use tracing::{debug, warn};

use super::Player;
use crate::error::{Error, Result};
use crate::guard::OpKind;
use crate::service::Track;

impl Player {
    /// Run a search and drive the results view.
    ///
    /// Only the most recently started search may touch the view: a response
    /// (success or error) arriving for an earlier call is dropped without a
    /// trace, and this method returns `Ok` for it. The in-progress
    /// placeholder is rendered unconditionally — it reflects the operation
    /// that just started, not any response.
    ///
    /// A query that trims to empty is a no-op: no backend call, no view
    /// change.
    pub async fn search_songs(&self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let token = self.guard.begin(OpKind::Search);
        self.results_view.show_loading();

        match self.backend.search(query).await {
            Ok(results) => {
                if !self.guard.is_current(OpKind::Search, token) {
                    debug!("Dropping superseded search results for {query:?}");
                    return Ok(());
                }

                debug!("Search for {query:?} returned {} tracks", results.len());
                self.results_view.show_results(&results);
                Ok(())
            }
            Err(err) => {
                if !self.guard.is_current(OpKind::Search, token) {
                    debug!("Dropping superseded search failure for {query:?}");
                    return Ok(());
                }

                warn!("Search for {query:?} failed: {err}");
                self.results_view.show_error("Couldn't contact server");
                Err(err)
            }
        }
    }

    /// Handler body for selecting a rendered search candidate: toast, then
    /// resolve-and-play, then remember the track in the playlist.
    ///
    /// A superseded resolve means a newer selection took over; it is
    /// absorbed silently. Real resolve failures are surfaced through the
    /// notifier.
    pub async fn choose_result(&self, track: Track) -> Result<()> {
        self.notifier.toast(&format!("Loading {}!", track.title));

        match self.play_and_remember(track).await {
            Ok(()) => Ok(()),
            Err(Error::Superseded) => Ok(()),
            Err(err) => {
                warn!("Could not play selected track: {err}");
                self.notifier.toast(&format!("Couldn't play that track: {err}"));
                Err(err)
            }
        }
    }
}
