//! Classification of webhook event types and their action/status fields.
//!
//! Every string here is sender-supplied, so each classification is an open
//! set: the known variants plus an `Other` case that preserves the original
//! text. Unrecognized values are valid input, never errors.

/// Webhook event kind, parsed from the `X-GitHub-Event` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push,
    PullRequest,
    Issues,
    DeploymentStatus,
    Release,
    WorkflowRun,
    /// Any event type we do not render. Kept verbatim for logging.
    Other(String),
}

impl EventKind {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            "issues" => Self::Issues,
            "deployment_status" => Self::DeploymentStatus,
            "release" => Self::Release,
            "workflow_run" => Self::WorkflowRun,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Issues => "issues",
            Self::DeploymentStatus => "deployment_status",
            Self::Release => "release",
            Self::WorkflowRun => "workflow_run",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pull request action with its status glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Closed,
    Merged,
    Reopened,
    Other(String),
}

impl PullRequestAction {
    #[must_use]
    pub fn parse(action: &str) -> Self {
        match action {
            "opened" => Self::Opened,
            "closed" => Self::Closed,
            "merged" => Self::Merged,
            "reopened" => Self::Reopened,
            other => Self::Other(other.to_string()),
        }
    }

    /// Status glyph for the message header. Unmapped actions get the
    /// neutral default.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Opened => "🆕",
            Self::Closed => "❌",
            Self::Merged => "✅",
            Self::Reopened => "🔄",
            Self::Other(_) => "📝",
        }
    }
}

/// Deployment status state with its glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentState {
    Pending,
    Success,
    Failure,
    Error,
    Other(String),
}

impl DeploymentState {
    #[must_use]
    pub fn parse(state: &str) -> Self {
        match state {
            "pending" => Self::Pending,
            "success" => Self::Success,
            "failure" => Self::Failure,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Pending => "⏳",
            Self::Success => "✅",
            Self::Failure => "❌",
            Self::Error => "⚠️",
            Self::Other(_) => "📦",
        }
    }
}

/// Binary glyph for a completed workflow run. Anything short of an explicit
/// success (cancelled, timed out, null conclusion) reads as a failure.
#[must_use]
pub fn workflow_glyph(conclusion: Option<&str>) -> &'static str {
    if conclusion == Some("success") { "✅" } else { "❌" }
}
