//! Event dispatch and message rendering for the GitHub → Slack bridge.
//!
//! The dispatcher maps an inbound webhook event (type string + JSON body) to
//! at most one rendered notification and hands it to the injected
//! [`MessagePoster`]. Renderers are pure functions; all glyph tables and
//! channel names are process-wide constants.

pub mod dispatch;
pub mod error;
pub mod event;
pub mod message;
pub mod outbound;
pub mod payload;
pub mod render;

pub use {
    dispatch::Dispatcher,
    error::DispatchError,
    event::{DeploymentState, EventKind, PullRequestAction},
    message::{Field, LinkButton, MessageBlock, RenderedMessage},
    outbound::MessagePoster,
};
