use thiserror::Error;

/// Storage-layer failure. Both read and write paths surface this explicitly
/// so callers decide recovery.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[from] sled::Error),
}

/// Repository-layer failure.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content store error: {0}")]
    Store(#[from] StoreError),

    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),
}
