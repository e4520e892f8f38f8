use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed: {url}")]
    Download { url: String },

    #[error("Extraction failed: {path}")]
    Extraction { path: PathBuf },

    #[error("Failed to move {from:?} into {to:?}")]
    Relocation { from: PathBuf, to: PathBuf },
}

impl FetchError {
    pub fn relocation(from: &std::path::Path, to: &std::path::Path) -> Self {
        FetchError::Relocation {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        }
    }
}
