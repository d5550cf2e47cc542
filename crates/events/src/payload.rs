//! Webhook payload shapes, one per rendered event type.
//!
//! Only the fields the renderers read are declared; everything else in the
//! webhook body is ignored. Required fields stay required — a payload
//! missing one fails deserialization, which the dispatcher reports as a
//! [`DispatchError`](crate::DispatchError).

use serde::Deserialize;

// ── push ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    pub repository: PushRepository,
    #[serde(default)]
    pub commits: Vec<Commit>,
    pub pusher: Pusher,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushRepository {
    pub full_name: String,
    pub name: String,
}

/// Individual commit entry. Only the count matters to the renderer, so all
/// fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pusher {
    pub name: String,
}

// ── pull_request ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub action: String,
    pub pull_request: PullRequest,
    pub repository: RepoName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub user: Account,
    pub head: GitRef,
    pub base: GitRef,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub branch: String,
}

// ── issues ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct IssuesPayload {
    pub action: String,
    pub issue: Issue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub user: Account,
    pub html_url: String,
}

// ── deployment_status ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentStatusPayload {
    pub deployment: Deployment,
    pub deployment_status: DeploymentStatus,
    pub repository: RepoName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deployment {
    pub environment: String,
    #[serde(rename = "ref")]
    pub branch: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentStatus {
    pub state: String,
}

// ── release ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ReleasePayload {
    pub release: Release,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub body: Option<String>,
    pub name: Option<String>,
}

// ── workflow_run ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRunPayload {
    pub action: String,
    pub workflow_run: WorkflowRun,
    pub repository: RepoName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    pub name: String,
    /// Null until the run completes.
    pub conclusion: Option<String>,
    pub head_branch: String,
}

// ── shared ──────────────────────────────────────────────────────────────────

/// Repository descriptor for payloads that only show the short name.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoName {
    pub name: String,
}
