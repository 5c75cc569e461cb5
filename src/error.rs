use std::io;

/// Failures that should not happen under normal circumstances, usually caused by the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UncommonError {
    #[error("The document directory could not be found.")]
    DocumentDirectoryNotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)] Io(#[from] io::Error),
    #[error(transparent)] Uncommon(#[from] UncommonError),
    #[error("unknown phase: {0:?}")]
    UnknownPhase(String),
}
