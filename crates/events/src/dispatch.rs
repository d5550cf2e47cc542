//! Event dispatcher: selects a renderer by event type and forwards the
//! rendered notification to the outbound poster.

use std::sync::Arc;

use {
    serde::de::DeserializeOwned,
    tracing::{debug, info},
};

use crate::{
    error::{DispatchError, Result},
    event::EventKind,
    message::RenderedMessage,
    outbound::MessagePoster,
    payload::{
        DeploymentStatusPayload, IssuesPayload, PullRequestPayload, PushPayload, ReleasePayload,
        WorkflowRunPayload,
    },
    render,
};

/// Maps inbound webhook events to at most one outbound post each.
///
/// The poster is injected so the core stays testable without a live chat
/// service. All state is immutable; concurrent dispatches are independent.
pub struct Dispatcher {
    poster: Arc<dyn MessagePoster>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(poster: Arc<dyn MessagePoster>) -> Self {
        Self { poster }
    }

    /// Handle one inbound event.
    ///
    /// Unrecognized event types are a logged no-op, not an error. A renderer
    /// failing on a malformed payload and the outbound post failing both
    /// surface as the uniform [`DispatchError`]; neither is retried.
    pub async fn dispatch(&self, event_type: &str, payload: serde_json::Value) -> Result<()> {
        let kind = EventKind::parse(event_type);
        let message = match &kind {
            EventKind::Push => {
                let p: PushPayload = decode(&kind, payload)?;
                Some(render::render_push(&p))
            },
            EventKind::PullRequest => {
                let p: PullRequestPayload = decode(&kind, payload)?;
                Some(render::render_pull_request(&p))
            },
            EventKind::Issues => {
                let p: IssuesPayload = decode(&kind, payload)?;
                Some(render::render_issues(&p))
            },
            EventKind::DeploymentStatus => {
                let p: DeploymentStatusPayload = decode(&kind, payload)?;
                Some(render::render_deployment_status(&p))
            },
            EventKind::Release => {
                let p: ReleasePayload = decode(&kind, payload)?;
                Some(render::render_release(&p))
            },
            EventKind::WorkflowRun => {
                let p: WorkflowRunPayload = decode(&kind, payload)?;
                render::render_workflow_run(&p)
            },
            EventKind::Other(name) => {
                debug!(event = %name, "ignoring unrecognized webhook event");
                return Ok(());
            },
        };

        // Renderer gate declined (non-completed workflow run): silent drop.
        let Some(message) = message else {
            return Ok(());
        };

        self.post(&kind, &message).await?;
        info!(
            event = kind.as_str(),
            channel = %message.channel,
            "notification posted"
        );
        Ok(())
    }

    async fn post(&self, kind: &EventKind, message: &RenderedMessage) -> Result<()> {
        self.poster
            .post_message(message)
            .await
            .map_err(|e| DispatchError::post_failed(kind, e))
    }
}

fn decode<T: DeserializeOwned>(kind: &EventKind, payload: serde_json::Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| DispatchError::malformed_payload(kind, e))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use {async_trait::async_trait, rstest::rstest, serde_json::json};

    use super::*;

    /// Records every posted message instead of talking to Slack.
    #[derive(Default)]
    struct RecordingPoster {
        sent: Mutex<Vec<RenderedMessage>>,
    }

    #[async_trait]
    impl MessagePoster for RecordingPoster {
        async fn post_message(&self, message: &RenderedMessage) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    /// Fails every post, standing in for a network or auth failure.
    struct FailingPoster;

    #[async_trait]
    impl MessagePoster for FailingPoster {
        async fn post_message(&self, _message: &RenderedMessage) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("connection reset by peer"))
        }
    }

    fn dispatcher() -> (Dispatcher, Arc<RecordingPoster>) {
        let poster = Arc::new(RecordingPoster::default());
        (Dispatcher::new(Arc::clone(&poster) as _), poster)
    }

    fn minimal_payload(event_type: &str) -> serde_json::Value {
        match event_type {
            "push" => json!({
                "repository": { "full_name": "acme/api", "name": "api" },
                "commits": [{ "id": "abc123", "message": "fix" }],
                "pusher": { "name": "rguillemette" }
            }),
            "pull_request" => json!({
                "action": "opened",
                "pull_request": {
                    "number": 42,
                    "title": "Add retries",
                    "user": { "login": "mlaporte" },
                    "head": { "ref": "feature/retries" },
                    "base": { "ref": "main" },
                    "html_url": "https://example.com/pr/42"
                },
                "repository": { "name": "api" }
            }),
            "issues" => json!({
                "action": "opened",
                "issue": {
                    "number": 9,
                    "title": "Crash on boot",
                    "user": { "login": "dtremblay" },
                    "html_url": "https://example.com/issues/9"
                }
            }),
            "deployment_status" => json!({
                "deployment": { "environment": "production", "ref": "main" },
                "deployment_status": { "state": "success" },
                "repository": { "name": "api" }
            }),
            "release" => json!({
                "release": { "tag_name": "v1.0", "name": "First" }
            }),
            "workflow_run" => json!({
                "action": "completed",
                "workflow_run": {
                    "name": "ci",
                    "conclusion": "success",
                    "head_branch": "main"
                },
                "repository": { "name": "api" }
            }),
            other => panic!("no minimal payload for {other}"),
        }
    }

    #[rstest]
    #[case("push", "deployments")]
    #[case("pull_request", "pr-reviews")]
    #[case("issues", "issues")]
    #[case("deployment_status", "deployments")]
    #[case("release", "releases")]
    #[case("workflow_run", "ci-cd")]
    #[tokio::test]
    async fn each_event_type_posts_once_to_its_channel(
        #[case] event_type: &str,
        #[case] channel: &str,
    ) {
        let (dispatcher, poster) = dispatcher();
        dispatcher
            .dispatch(event_type, minimal_payload(event_type))
            .await
            .unwrap();

        let sent = poster.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel, channel);
        assert!(!sent[0].text.is_empty());
    }

    #[rstest]
    #[case("star")]
    #[case("ping")]
    #[case("")]
    #[tokio::test]
    async fn unknown_event_type_is_a_silent_no_op(#[case] event_type: &str) {
        let (dispatcher, poster) = dispatcher();
        dispatcher
            .dispatch(event_type, json!({ "anything": "goes" }))
            .await
            .unwrap();
        assert!(poster.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn incomplete_workflow_run_posts_nothing() {
        let (dispatcher, poster) = dispatcher();
        dispatcher
            .dispatch(
                "workflow_run",
                json!({
                    "action": "in_progress",
                    "workflow_run": {
                        "name": "ci",
                        "conclusion": null,
                        "head_branch": "main"
                    },
                    "repository": { "name": "api" }
                }),
            )
            .await
            .unwrap();
        assert!(poster.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_workflow_run_posts_failure_glyph() {
        let (dispatcher, poster) = dispatcher();
        dispatcher
            .dispatch(
                "workflow_run",
                json!({
                    "action": "completed",
                    "workflow_run": {
                        "name": "ci",
                        "conclusion": "failure",
                        "head_branch": "main"
                    },
                    "repository": { "name": "api" }
                }),
            )
            .await
            .unwrap();

        let sent = poster.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.starts_with("❌"));
    }

    #[tokio::test]
    async fn malformed_payload_becomes_dispatch_error() {
        let (dispatcher, poster) = dispatcher();
        // Pull request without user.login.
        let result = dispatcher
            .dispatch(
                "pull_request",
                json!({
                    "action": "opened",
                    "pull_request": {
                        "number": 42,
                        "title": "Add retries",
                        "head": { "ref": "feature" },
                        "base": { "ref": "main" },
                        "html_url": "https://example.com/pr/42"
                    },
                    "repository": { "name": "api" }
                }),
            )
            .await;
        assert!(result.is_err());
        assert!(poster.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn poster_failure_becomes_dispatch_error() {
        let dispatcher = Dispatcher::new(Arc::new(FailingPoster));
        let result = dispatcher.dispatch("push", minimal_payload("push")).await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("push"));
    }
}
