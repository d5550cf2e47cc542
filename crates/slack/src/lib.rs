//! Slack outbound adapter.
//!
//! Implements the [`MessagePoster`](gitrelay_events::MessagePoster) seam on
//! top of the Slack Web API (`chat.postMessage`), converting the semantic
//! message blocks into Block Kit JSON on the way out.

pub mod blocks;
pub mod client;
pub mod error;

pub use {
    client::SlackClient,
    error::{Error, Result},
};
