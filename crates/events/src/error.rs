use std::error::Error as StdError;

/// Crate-wide result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Uniform failure signal for a dispatch call.
///
/// A renderer choking on a malformed payload and the outbound post failing
/// are deliberately collapsed into one opaque signal: callers map any
/// `DispatchError` to a generic failure response without inspecting the
/// cause. The context string only feeds logs.
#[derive(Debug, thiserror::Error)]
#[error("dispatch failed: {context}: {source}")]
pub struct DispatchError {
    context: String,
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl DispatchError {
    /// Payload did not match the shape the renderer expects.
    #[must_use]
    pub fn malformed_payload(event: impl std::fmt::Display, source: serde_json::Error) -> Self {
        Self {
            context: format!("malformed {event} payload"),
            source: Box::new(source),
        }
    }

    /// The outbound chat post was declined or never arrived.
    #[must_use]
    pub fn post_failed(event: impl std::fmt::Display, source: anyhow::Error) -> Self {
        Self {
            context: format!("posting {event} notification"),
            source: source.into(),
        }
    }
}
