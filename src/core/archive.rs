use crate::error::{FetchError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;
use tar::Archive;

/// Unpack a gzip-compressed tar archive into `destination`.
///
/// The directory tree inside the archive determines what appears under
/// `destination`; nothing here checks or rewrites the entry names.
pub fn extract_tar_gz(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|_| FetchError::Extraction {
        path: archive_path.to_path_buf(),
    })?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);
    archive.unpack(destination).map_err(|_| FetchError::Extraction {
        path: archive_path.to_path_buf(),
    })?;
    Ok(())
}
