//! Structured notification model.
//!
//! Renderers build these; the Slack crate turns them into Block Kit JSON.
//! Blocks carry display data only — no behavior, no platform types.

/// A fully rendered notification: target channel, fallback text, and blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Bare channel name, no `#` prefix. Resolved by the chat service.
    pub channel: String,
    /// Plain-text summary. Always non-empty; it must convey the message on
    /// its own, since it is the fallback when blocks are unsupported.
    pub text: String,
    /// Ordered display blocks.
    pub blocks: Vec<MessageBlock>,
}

/// One display block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBlock {
    /// Large heading line.
    Header { text: String },
    /// Two-column label/value grid.
    Fields(Vec<Field>),
    /// Free-form markdown paragraph.
    Text { text: String },
    /// Row of link buttons.
    Actions(Vec<LinkButton>),
}

/// Label/value pair for a [`MessageBlock::Fields`] grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Button that opens a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: String,
    pub url: String,
}

impl LinkButton {
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}
