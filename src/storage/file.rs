use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::PlaylistSlot;

const SLOT_FILE_NAME: &str = "playlist.toml";

/// File-backed slot.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot at the default location, `<config dir>/vinyl/playlist.toml`.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("vinyl");

        fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        Ok(Self {
            path: config_dir.join(SLOT_FILE_NAME),
        })
    }

    /// Slot at an explicit path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PlaylistSlot for FileSlot {
    fn get(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&self.path).context("Failed to read playlist file")?;
        Ok(Some(contents))
    }

    fn set(&self, raw: &str) -> Result<()> {
        fs::write(&self.path, raw).context("Failed to write playlist file")?;
        Ok(())
    }
}
