use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// The parts of the triggering event payload this action reads.
///
/// Only `pull_request` and `pull_request_target` events carry a
/// `pull_request` object.
#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    pub pull_request: Option<PullRequestPayload>,
    pub repository: Option<RepositoryPayload>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryPayload {
    pub name: String,
    pub owner: OwnerPayload,
}

#[derive(Debug, Deserialize)]
pub struct OwnerPayload {
    pub login: String,
}

impl EventPayload {
    pub fn parse(payload: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// Read the payload written by the runner at `GITHUB_EVENT_PATH`.
    ///
    /// A missing path or file yields an empty payload.
    pub fn read(event_path: Option<&Path>) -> Result<Self> {
        let Some(path) = event_path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!(path = %path.display(), "Event payload file does not exist");
            return Ok(Self::default());
        }

        let bytes = std::fs::read(path)?;
        Self::parse(&bytes)
    }
}
