//! Persistence seam for the playlist.
//!
//! - [`FileSlot`]: one file under the platform config dir (default)
//! - [`MemorySlot`]: in-memory, for tests and embedders that keep their own
//!   persistence
//!
//! The playlist store holds a `Box<dyn PlaylistSlot>` and every read and
//! mutation goes through it.

pub mod file;
pub mod memory;

use anyhow::Result;

/// A single named storage slot holding the serialized playlist.
///
/// Deliberately synchronous: a playlist mutation is one
/// read-compute-persist sequence, and a slot that cannot suspend means the
/// sequence can never be interleaved with another mutation.
pub trait PlaylistSlot: Send + Sync {
    /// Read the raw slot contents. `None` when nothing has been stored yet.
    fn get(&self) -> Result<Option<String>>;

    /// Overwrite the slot contents.
    fn set(&self, raw: &str) -> Result<()>;
}

/// Shared handles work as slots too, so an embedder (or a test) can keep a
/// handle to the slot it hands the store.
impl<S: PlaylistSlot + ?Sized> PlaylistSlot for std::sync::Arc<S> {
    fn get(&self) -> Result<Option<String>> {
        (**self).get()
    }

    fn set(&self, raw: &str) -> Result<()> {
        (**self).set(raw)
    }
}

pub use file::FileSlot;
pub use memory::MemorySlot;
