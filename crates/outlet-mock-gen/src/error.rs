use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A per-outlet generation task panicked or was cancelled.
    #[error("outlet generation task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
