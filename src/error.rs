use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceDetectError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("file not found: {}. {message}", path.display())]
    FileNotFound { path: PathBuf, message: String },

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("face api returned status {status}: {body}")]
    RemoteError { status: u16, body: String },

    #[error("malformed face api response: {0}")]
    MalformedResponse(String),

    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("failed to encode image: {0}")]
    EncodeError(String),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
}

impl From<serde_json::Error> for FaceDetectError {
    fn from(e: serde_json::Error) -> Self {
        FaceDetectError::MalformedResponse(e.to_string())
    }
}
