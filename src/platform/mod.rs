pub mod github;
pub mod types;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use types::*;

#[async_trait]
pub trait Platform: Send + Sync {
    /// List every artifact of a workflow run, in API order.
    async fn list_run_artifacts(&self, owner: &str, repo: &str, run_id: u64)
        -> Result<Vec<Artifact>>;

    /// List every comment on an issue or PR.
    async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Comment>>;

    /// Delete an issue or PR comment.
    async fn delete_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<()>;

    /// Post a comment on an issue or PR.
    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<Comment>;

    /// Replace the body of an existing comment.
    async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<Comment>;
}
