pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("segmentation dictionary is not available: {message}")]
    DictionaryUnavailable { message: String },

    #[error("not authenticated")]
    AuthRequired,

    #[error("project storage failure: {message}")]
    StorageFailure { message: String },

    #[error("project not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
