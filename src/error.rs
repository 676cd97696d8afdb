use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LcuError {
    #[error("Could not read lockfile {}: is the League client running?", path.display())]
    LockfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unexpected lockfile format: {0}")]
    LockfileMalformed(String),
    #[error("Invalid lockfile port: {0:?}")]
    InvalidPort(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
}
