use std::error::Error;
use thiserror::Error;

/// Result alias shared by every [`crate::dao::tournament_store`] backend.
pub type StorageResult<T> = Result<T, StorageError>;

/// Backend-agnostic failure of the tournament document store. Concrete
/// backends wrap their own error types into this before the service layer
/// sees them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap a backend failure, keeping it as the error source.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
