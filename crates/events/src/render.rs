//! Renderers: pure mappings from a webhook payload to a notification.
//!
//! Each supported event type has exactly one renderer. Channels are fixed
//! per event type; glyph tables live in [`crate::event`]. Workflow runs are
//! the one renderer with an internal gate — non-`completed` actions are
//! dropped to keep `queued`/`in_progress` noise out of the channel. That
//! gate stays local here; the other renderers are unconditional.

use crate::{
    event::{DeploymentState, PullRequestAction, workflow_glyph},
    message::{Field, LinkButton, MessageBlock, RenderedMessage},
    payload::{
        DeploymentStatusPayload, IssuesPayload, PullRequestPayload, PushPayload, ReleasePayload,
        WorkflowRunPayload,
    },
};

/// Push and deployment notifications share a channel.
pub const DEPLOYMENTS_CHANNEL: &str = "deployments";
pub const PR_REVIEWS_CHANNEL: &str = "pr-reviews";
pub const ISSUES_CHANNEL: &str = "issues";
pub const RELEASES_CHANNEL: &str = "releases";
pub const CI_CD_CHANNEL: &str = "ci-cd";

#[must_use]
pub fn render_push(payload: &PushPayload) -> RenderedMessage {
    let repo = &payload.repository;
    RenderedMessage {
        channel: DEPLOYMENTS_CHANNEL.into(),
        text: format!("🚀 New push to {}", repo.full_name),
        blocks: vec![
            MessageBlock::Header {
                text: format!("🚀 New Push to {}", repo.name),
            },
            MessageBlock::Fields(vec![
                Field::new("Repository", &repo.full_name),
                Field::new("Pusher", &payload.pusher.name),
            ]),
            MessageBlock::Text {
                text: format!(
                    "*Commits:*\n{} commit(s) pushed",
                    payload.commits.len()
                ),
            },
        ],
    }
}

#[must_use]
pub fn render_pull_request(payload: &PullRequestPayload) -> RenderedMessage {
    let pr = &payload.pull_request;
    let glyph = PullRequestAction::parse(&payload.action).glyph();
    let headline = format!("{glyph} PR #{}: {}", pr.number, pr.title);
    RenderedMessage {
        channel: PR_REVIEWS_CHANNEL.into(),
        text: headline.clone(),
        blocks: vec![
            MessageBlock::Header { text: headline },
            MessageBlock::Fields(vec![
                Field::new("Author", &pr.user.login),
                Field::new("Status", &payload.action),
                Field::new("Branch", format!("{} → {}", pr.head.branch, pr.base.branch)),
                Field::new("Repository", &payload.repository.name),
            ]),
            MessageBlock::Actions(vec![LinkButton::new("View PR", &pr.html_url)]),
        ],
    }
}

#[must_use]
pub fn render_issues(payload: &IssuesPayload) -> RenderedMessage {
    let issue = &payload.issue;
    let headline = format!("📋 Issue #{}: {}", issue.number, issue.title);
    RenderedMessage {
        channel: ISSUES_CHANNEL.into(),
        text: headline.clone(),
        blocks: vec![
            MessageBlock::Header { text: headline },
            MessageBlock::Fields(vec![
                Field::new("Action", &payload.action),
                Field::new("Author", &issue.user.login),
            ]),
            MessageBlock::Actions(vec![LinkButton::new("View Issue", &issue.html_url)]),
        ],
    }
}

#[must_use]
pub fn render_deployment_status(payload: &DeploymentStatusPayload) -> RenderedMessage {
    let deployment = &payload.deployment;
    let state = &payload.deployment_status.state;
    let glyph = DeploymentState::parse(state).glyph();
    RenderedMessage {
        channel: DEPLOYMENTS_CHANNEL.into(),
        text: format!("{glyph} Deployment to {}", deployment.environment),
        blocks: vec![
            MessageBlock::Header {
                text: format!("{glyph} Deployment to {}", deployment.environment),
            },
            MessageBlock::Fields(vec![
                Field::new("Repository", &payload.repository.name),
                Field::new("Status", state),
                Field::new("Branch", &deployment.branch),
                Field::new(
                    "Description",
                    deployment.description.as_deref().unwrap_or("N/A"),
                ),
            ]),
        ],
    }
}

#[must_use]
pub fn render_release(payload: &ReleasePayload) -> RenderedMessage {
    let release = &payload.release;
    let body = release
        .body
        .as_deref()
        .or(release.name.as_deref())
        .unwrap_or("No description");
    RenderedMessage {
        channel: RELEASES_CHANNEL.into(),
        text: format!("🎉 New release: {}", release.tag_name),
        blocks: vec![
            MessageBlock::Header {
                text: format!("🎉 New Release: {}", release.tag_name),
            },
            MessageBlock::Text { text: body.into() },
        ],
    }
}

/// Renders only completed runs; everything else is suppressed.
#[must_use]
pub fn render_workflow_run(payload: &WorkflowRunPayload) -> Option<RenderedMessage> {
    if payload.action != "completed" {
        return None;
    }
    let run = &payload.workflow_run;
    let conclusion = run.conclusion.as_deref().unwrap_or("unknown");
    let glyph = workflow_glyph(run.conclusion.as_deref());
    let headline = format!("{glyph} Workflow {} {conclusion}", run.name);
    Some(RenderedMessage {
        channel: CI_CD_CHANNEL.into(),
        text: headline.clone(),
        blocks: vec![
            MessageBlock::Header { text: headline },
            MessageBlock::Fields(vec![
                Field::new("Repository", &payload.repository.name),
                Field::new("Branch", &run.head_branch),
            ]),
        ],
    })
}
