use async_trait::async_trait;
use octocrab::models::{CommentId, RunId};
use octocrab::Octocrab;

use crate::error::{AppError, Result};
use crate::platform::types::*;
use crate::platform::Platform;

use super::mapper;

const PER_PAGE: u8 = 100;

/// `Platform` backed by the GitHub REST API, authenticated with a token.
pub struct GitHubPlatform {
    client: Octocrab,
}

impl GitHubPlatform {
    /// `api_url` overrides the API endpoint, e.g. for GitHub Enterprise Server.
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(api_url) = api_url {
            builder = builder
                .base_uri(api_url)
                .map_err(|e| AppError::Config(format!("Invalid GitHub API URL {api_url}: {e}")))?;
        }

        let client = builder
            .build()
            .map_err(|e| AppError::GitHubApi(format!("Failed to build octocrab client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Platform for GitHubPlatform {
    async fn list_run_artifacts(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<Vec<Artifact>> {
        let first_page = self
            .client
            .actions()
            .list_workflow_run_artifacts(owner, repo, RunId(run_id))
            .per_page(PER_PAGE)
            .send()
            .await?
            .value
            .unwrap_or_default();

        let artifacts = self.client.all_pages(first_page).await?;

        Ok(artifacts
            .into_iter()
            .map(|artifact| Artifact {
                id: artifact.id.into_inner(),
                name: artifact.name,
            })
            .collect())
    }

    async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Comment>> {
        let first_page = self
            .client
            .issues(owner, repo)
            .list_comments(issue_number)
            .per_page(PER_PAGE)
            .send()
            .await?;

        let comments = self.client.all_pages(first_page).await?;

        Ok(mapper::map_comments(comments))
    }

    async fn delete_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<()> {
        self.client
            .issues(owner, repo)
            .delete_comment(CommentId(comment_id))
            .await?;

        Ok(())
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<Comment> {
        let created = self
            .client
            .issues(owner, repo)
            .create_comment(issue_number, body)
            .await?;

        Ok(mapper::map_comment(created))
    }

    async fn update_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<Comment> {
        let updated = self
            .client
            .issues(owner, repo)
            .update_comment(CommentId(comment_id), body)
            .await?;

        Ok(mapper::map_comment(updated))
    }
}
