use thiserror::Error;

/// Errors from the strict metadata stream codecs.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload parsed but carries a schema version this build does not
    /// understand.
    #[error("unsupported invoice metadata version {got} (this service writes version {want})")]
    UnsupportedMetadataVersion { got: u64, want: u64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
