use std::path::{Path, PathBuf};

/// Directory the extracted dataset must end up under.
pub const DEFAULT_DESTINATION: &str = "detections";
/// Local name for the downloaded archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "test2015_finetuned_vcl.tar.gz";
/// Folder name the archive is known to extract to.
pub const DEFAULT_FOLDER_NAME: &str = "test2015_finetuned_vcl";
/// Google Drive file identifier for the dataset archive.
pub const DEFAULT_RESOURCE_ID: &str = "1mdN9pk7BfIBDVSCZPPKVU8BaZx6beh0q";

/// Everything needed to materialise one remote archive on disk.
///
/// Built once from the constants (or their flag overrides) at process start
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FetchTarget {
    pub destination_dir: PathBuf,
    pub archive_file_name: String,
    pub extracted_folder_name: String,
    pub remote_resource_id: String,
}

impl Default for FetchTarget {
    fn default() -> Self {
        FetchTarget {
            destination_dir: PathBuf::from(DEFAULT_DESTINATION),
            archive_file_name: DEFAULT_ARCHIVE_NAME.to_string(),
            extracted_folder_name: DEFAULT_FOLDER_NAME.to_string(),
            remote_resource_id: DEFAULT_RESOURCE_ID.to_string(),
        }
    }
}

impl FetchTarget {
    pub fn new(
        destination_dir: impl Into<PathBuf>,
        archive_file_name: impl Into<String>,
        extracted_folder_name: impl Into<String>,
        remote_resource_id: impl Into<String>,
    ) -> Self {
        FetchTarget {
            destination_dir: destination_dir.into(),
            archive_file_name: archive_file_name.into(),
            extracted_folder_name: extracted_folder_name.into(),
            remote_resource_id: remote_resource_id.into(),
        }
    }

    /// Final location of the dataset; its existence is both the idempotency
    /// check and the success postcondition.
    pub fn extracted_dir(&self) -> PathBuf {
        self.destination_dir.join(&self.extracted_folder_name)
    }

    /// Transient archive location in the working directory.
    pub fn archive_path(&self) -> PathBuf {
        PathBuf::from(&self.archive_file_name)
    }

    /// Directory the archive unpacks into before relocation. The archive's
    /// parent in a normal run is the working directory itself.
    pub fn staging_dir(&self) -> PathBuf {
        match self.archive_path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Where extraction leaves the dataset before the move.
    pub fn staged_dir(&self) -> PathBuf {
        self.staging_dir().join(&self.extracted_folder_name)
    }

    pub fn with_archive_path(mut self, path: &Path) -> Self {
        self.archive_file_name = path.to_string_lossy().into_owned();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_matches_constants() {
        let target = FetchTarget::default();
        assert_eq!(target.destination_dir, PathBuf::from("detections"));
        assert_eq!(target.archive_file_name, "test2015_finetuned_vcl.tar.gz");
        assert_eq!(target.extracted_folder_name, "test2015_finetuned_vcl");
        assert_eq!(target.remote_resource_id, DEFAULT_RESOURCE_ID);
    }

    #[test]
    fn test_extracted_dir_joins_destination_and_folder() {
        let target = FetchTarget::default();
        assert_eq!(
            target.extracted_dir(),
            PathBuf::from("detections/test2015_finetuned_vcl")
        );
    }

    #[test]
    fn test_staging_dir_is_cwd_for_bare_archive_name() {
        let target = FetchTarget::default();
        assert_eq!(target.staging_dir(), PathBuf::from("."));
        assert_eq!(
            target.staged_dir(),
            PathBuf::from("./test2015_finetuned_vcl")
        );
    }

    #[test]
    fn test_staging_dir_follows_archive_parent() {
        let target = FetchTarget::new(
            "/data/detections",
            "/tmp/work/archive.tar.gz",
            "archive",
            "abc",
        );
        assert_eq!(target.staging_dir(), PathBuf::from("/tmp/work"));
        assert_eq!(target.staged_dir(), PathBuf::from("/tmp/work/archive"));
    }
}
