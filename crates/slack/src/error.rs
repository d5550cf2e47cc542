/// Crate-wide result type for Slack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed Slack client errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request never completed (DNS, TLS, connection, body decode).
    #[error("slack transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Slack answered but declined the message (bad token, unknown channel,
    /// rate limit). The `error` field is Slack's machine-readable code.
    #[error("slack declined message: {error}")]
    Api { error: String },
}
