//! In-memory `Platform` used by the workflow tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::platform::types::*;
use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListArtifacts { run_id: u64 },
    ListComments { issue_number: u64 },
    Delete { comment_id: u64 },
    Create { issue_number: u64, body: String },
    Update { comment_id: u64, body: String },
}

#[derive(Default)]
struct State {
    artifacts: Vec<Artifact>,
    comments: Vec<Comment>,
    next_id: u64,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct MemoryPlatform {
    state: Mutex<State>,
    fail_artifacts: bool,
}

impl MemoryPlatform {
    pub fn new(artifacts: Vec<Artifact>, comments: Vec<Comment>) -> Self {
        let next_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State {
                artifacts,
                comments,
                next_id,
                calls: Vec::new(),
            }),
            fail_artifacts: false,
        }
    }

    pub fn failing_artifacts() -> Self {
        Self {
            fail_artifacts: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.state.lock().unwrap().comments.clone()
    }

    pub fn deleted_ids(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete { comment_id } => Some(comment_id),
                _ => None,
            })
            .collect()
    }

    pub fn created_bodies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Create { body, .. } => Some(body),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Platform for MemoryPlatform {
    async fn list_run_artifacts(
        &self,
        _owner: &str,
        _repo: &str,
        run_id: u64,
    ) -> Result<Vec<Artifact>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListArtifacts { run_id });
        if self.fail_artifacts {
            return Err(AppError::GitHubApi("Bad credentials".to_string()));
        }
        Ok(state.artifacts.clone())
    }

    async fn list_issue_comments(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Comment>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListComments { issue_number });
        Ok(state.comments.clone())
    }

    async fn delete_comment(&self, _owner: &str, _repo: &str, comment_id: u64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete { comment_id });
        state.comments.retain(|c| c.id != comment_id);
        Ok(())
    }

    async fn create_comment(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<Comment> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create {
            issue_number,
            body: body.to_string(),
        });
        let comment = Comment {
            id: state.next_id,
            body: Some(body.to_string()),
        };
        state.next_id += 1;
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn update_comment(
        &self,
        _owner: &str,
        _repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<Comment> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update {
            comment_id,
            body: body.to_string(),
        });
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| AppError::GitHubApi("Not Found".to_string()))?;
        comment.body = Some(body.to_string());
        Ok(comment.clone())
    }
}
