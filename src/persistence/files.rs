use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the agenda directory - checks for local .agenda first, then falls back to global ~/.agenda
pub fn get_agenda_dir() -> Result<PathBuf> {
    // Check for local .agenda directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_agenda = find_local_agenda(&current_dir);

    if let Some(local_dir) = local_agenda {
        return Ok(local_dir);
    }

    // Fall back to global ~/.agenda
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".agenda"))
}

/// Find local .agenda directory by walking up the directory tree
fn find_local_agenda(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let agenda_dir = current.join(".agenda");
        if agenda_dir.exists() && agenda_dir.is_dir() {
            return Some(agenda_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the agenda directory exists
pub fn ensure_agenda_dir() -> Result<PathBuf> {
    let dir = get_agenda_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .agenda directory in the current directory
pub fn init_local_agenda() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let agenda_dir = current_dir.join(".agenda");

    if agenda_dir.exists() {
        anyhow::bail!("Agenda directory already exists: {}", agenda_dir.display());
    }

    fs::create_dir_all(&agenda_dir)
        .with_context(|| format!("Failed to create directory: {}", agenda_dir.display()))?;

    Ok(agenda_dir)
}

/// Get path to the persisted task slot (tasks.json)
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_agenda_dir()?.join("tasks.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
