use {anyhow::Result, async_trait::async_trait};

use crate::message::RenderedMessage;

/// Outbound chat-posting capability.
///
/// The binary wires in the Slack client; tests substitute a recording fake.
/// One call posts one message to the channel named inside it. Best-effort
/// single attempt — implementations must not retry.
#[async_trait]
pub trait MessagePoster: Send + Sync {
    async fn post_message(&self, message: &RenderedMessage) -> Result<()>;
}
