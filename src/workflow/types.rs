/// Outcome of one synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Triggered by something other than a pull request; nothing was touched.
    SkippedNotPullRequest,
    /// The run had no artifacts. Carries the fallback comment, if one was posted.
    NoArtifacts { comment_id: Option<u64> },
    /// A new summary comment was created.
    Posted { comment_id: u64, artifact_count: usize },
    /// An existing summary comment was edited in place.
    Updated { comment_id: u64, artifact_count: usize },
}

impl SyncOutcome {
    pub fn comment_id(&self) -> Option<u64> {
        match self {
            SyncOutcome::SkippedNotPullRequest => None,
            SyncOutcome::NoArtifacts { comment_id } => *comment_id,
            SyncOutcome::Posted { comment_id, .. } | SyncOutcome::Updated { comment_id, .. } => {
                Some(*comment_id)
            }
        }
    }

    pub fn artifact_count(&self) -> usize {
        match self {
            SyncOutcome::SkippedNotPullRequest | SyncOutcome::NoArtifacts { .. } => 0,
            SyncOutcome::Posted { artifact_count, .. }
            | SyncOutcome::Updated { artifact_count, .. } => *artifact_count,
        }
    }
}

/// Settings for one pass, taken from the action inputs.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub heading: String,
    pub no_artifacts_message: String,
    pub update_in_place: bool,
}

impl From<&crate::config::ActionConfig> for SyncOptions {
    fn from(config: &crate::config::ActionConfig) -> Self {
        Self {
            heading: config.comment_heading.clone(),
            no_artifacts_message: config.comment_if_no_artifacts.clone(),
            update_in_place: config.update_in_place,
        }
    }
}
