use std::sync::Mutex;

use anyhow::Result;

use super::PlaylistSlot;

/// In-memory slot. Nothing survives the process; useful for tests and for
/// embedders that manage persistence elsewhere.
#[derive(Default)]
pub struct MemorySlot {
    data: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaylistSlot for MemorySlot {
    fn get(&self) -> Result<Option<String>> {
        let data = self
            .data
            .lock()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        Ok(data.clone())
    }

    fn set(&self, raw: &str) -> Result<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| anyhow::anyhow!("lock poisoned: {e}"))?;
        *data = Some(raw.to_string());
        Ok(())
    }
}
