use crate::domain::Task;
use crate::persistence::atomic_write;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// Failure classes for the persisted slot. Never propagated past load_tasks,
/// only formatted into the warning line.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("{path} holds malformed JSON: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Load the task collection from the persisted slot.
/// A missing slot yields an empty collection. A corrupt slot is logged and
/// discarded; the next successful save overwrites it.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Vec<Task> {
    match read_slot(path.as_ref()) {
        Ok(tasks) => tasks,
        Err(err) => {
            eprintln!("Warning: starting with an empty agenda: {}", err);
            Vec::new()
        }
    }
}

fn read_slot(path: &Path) -> Result<Vec<Task>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

/// Write the full collection to the persisted slot as a JSON array
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn slot_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        dir.path().join("tasks.json")
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let dir = tempdir().unwrap();
        assert!(load_tasks(slot_path(&dir)).is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_fields() {
        let dir = tempdir().unwrap();
        let path = slot_path(&dir);

        let mut task = Task::new(
            "Fietsband plakken".to_string(),
            "2024-03-04".to_string(),
            Some("#C8DCC8".to_string()),
        );
        task.completed = true;

        save_tasks(&path, std::slice::from_ref(&task)).unwrap();
        let loaded = load_tasks(&path);

        assert_eq!(loaded, vec![task]);
    }

    #[test]
    fn test_save_preserves_order() {
        let dir = tempdir().unwrap();
        let path = slot_path(&dir);

        let tasks: Vec<Task> = (0..5)
            .map(|i| Task::new(format!("taak {}", i), "2024-03-04".to_string(), None))
            .collect();

        save_tasks(&path, &tasks).unwrap();
        assert_eq!(load_tasks(&path), tasks);
    }

    #[test]
    fn test_malformed_slot_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = slot_path(&dir);

        std::fs::write(&path, "{ dit is geen json ]").unwrap();
        assert!(load_tasks(&path).is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = slot_path(&dir);

        // Valid JSON, wrong shape: an object instead of an array
        std::fs::write(&path, r#"{"tasks": []}"#).unwrap();
        assert!(load_tasks(&path).is_empty());
    }

    #[test]
    fn test_next_save_overwrites_corrupt_slot() {
        let dir = tempdir().unwrap();
        let path = slot_path(&dir);

        std::fs::write(&path, "corrupt").unwrap();
        assert!(load_tasks(&path).is_empty());

        let task = Task::new("opnieuw".to_string(), "2024-03-05".to_string(), None);
        save_tasks(&path, std::slice::from_ref(&task)).unwrap();
        assert_eq!(load_tasks(&path), vec![task]);
    }
}
