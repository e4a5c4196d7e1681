use std::fs;
use std::path::{Path, PathBuf};

use crate::model::document::Document;

/// Error type for loading documents from disk
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a file into a `Document`, keeping the path as given.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| DocumentError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Document::new(path.to_string_lossy(), text))
}

/// Load the optional document named on the command line.
///
/// `None` means "no active document" and is passed through as such.
pub fn load_active(path: Option<&Path>) -> Result<Option<Document>, DocumentError> {
    path.map(load_document).transpose()
}
