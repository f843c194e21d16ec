//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Creates .moodjour and entries/
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    info!(root = %path.display(), "initialized journal");
    Ok(())
}
