use crate::error::{FetchError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Rename a directory into place. The destination's parent must already
/// exist; a missing parent surfaces as a relocation error.
pub fn move_dir(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).map_err(|_| FetchError::relocation(from, to))
}

/// Cleanup is best-effort; a file that cannot be removed is not an error.
pub fn remove_file_best_effort(path: &Path) {
    let _ = std::fs::remove_file(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_move_dir_fails_without_destination_parent() {
        let tmp = TempDir::new().unwrap();
        let from = tmp.path().join("staged");
        std::fs::create_dir(&from).unwrap();

        let to = tmp.path().join("missing-parent/staged");
        let err = move_dir(&from, &to).unwrap_err();
        assert!(matches!(err, FetchError::Relocation { .. }));
        assert!(from.is_dir());
    }

    #[test]
    fn test_remove_file_best_effort_ignores_missing_file() {
        let tmp = TempDir::new().unwrap();
        remove_file_best_effort(&tmp.path().join("never-existed"));
    }
}
