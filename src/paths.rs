use {
    std::path::PathBuf,
    crate::error::UncommonError,
};

/// The user's document directory, as reported by the platform.
pub fn document_dir() -> Result<PathBuf, UncommonError> {
    match dirs::document_dir() {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "found document directory");
            Ok(dir)
        }
        None => {
            tracing::debug!("platform reports no document directory");
            Err(UncommonError::DocumentDirectoryNotFound)
        }
    }
}
