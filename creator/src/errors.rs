use socialsync_sdk::Platform;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreatorError {
    #[error("Idea must not be empty")]
    EmptyIdea,
    #[error("A generation run is already in progress")]
    RunInProgress,
    #[error("No generated content available for {0}")]
    MissingContent(Platform),
    #[error("Invalid image data URI: {0}")]
    InvalidImageData(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
