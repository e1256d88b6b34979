use std::path::PathBuf;

use crate::error::{AppError, Result};
use crate::event::payload::EventPayload;

pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Default variables the Actions runner sets for every step.
#[derive(Debug, Clone, Default)]
pub struct ActionEnvironment {
    /// `GITHUB_REPOSITORY`, as `owner/repo`.
    pub repository: Option<String>,
    /// `GITHUB_RUN_ID`.
    pub run_id: Option<String>,
    /// `GITHUB_EVENT_PATH`.
    pub event_path: Option<PathBuf>,
    /// `GITHUB_SERVER_URL`.
    pub server_url: Option<String>,
    /// `GITHUB_API_URL`.
    pub api_url: Option<String>,
    /// `GITHUB_OUTPUT`.
    pub output_path: Option<PathBuf>,
}

impl ActionEnvironment {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            repository: non_empty("GITHUB_REPOSITORY"),
            run_id: non_empty("GITHUB_RUN_ID"),
            event_path: non_empty("GITHUB_EVENT_PATH").map(PathBuf::from),
            server_url: non_empty("GITHUB_SERVER_URL"),
            api_url: non_empty("GITHUB_API_URL"),
            output_path: non_empty("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }
}

/// Everything the synchronizer needs to address one pull request of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub owner: String,
    pub repo: String,
    pub pull_request_number: u64,
    pub run_id: u64,
    pub server_url: String,
}

/// Result of resolving the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    PullRequest(RunContext),
    /// The run was not triggered by a pull request event.
    NotPullRequest,
}

impl RunContext {
    pub fn resolve(env: &ActionEnvironment, payload: &EventPayload) -> Result<Resolution> {
        let Some(pull_request) = payload.pull_request.as_ref() else {
            return Ok(Resolution::NotPullRequest);
        };

        let (owner, repo) = match (env.repository.as_deref(), payload.repository.as_ref()) {
            (Some(full_name), _) => parse_repository(full_name)?,
            (None, Some(repository)) => {
                (repository.owner.login.clone(), repository.name.clone())
            }
            (None, None) => {
                return Err(AppError::Context(
                    "GITHUB_REPOSITORY must be set like 'owner/repo'".to_string(),
                ))
            }
        };

        let run_id = env
            .run_id
            .as_deref()
            .ok_or_else(|| AppError::Context("GITHUB_RUN_ID is not set".to_string()))?
            .trim()
            .parse::<u64>()
            .map_err(|e| AppError::Context(format!("Invalid GITHUB_RUN_ID: {e}")))?;

        let server_url = env
            .server_url
            .as_deref()
            .unwrap_or(DEFAULT_SERVER_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Resolution::PullRequest(RunContext {
            owner,
            repo,
            pull_request_number: pull_request.number,
            run_id,
            server_url,
        }))
    }
}

fn parse_repository(full_name: &str) -> Result<(String, String)> {
    match full_name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(AppError::Context(format!(
            "Invalid repository name: {full_name}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(repository: Option<&str>, run_id: Option<&str>) -> ActionEnvironment {
        ActionEnvironment {
            repository: repository.map(str::to_string),
            run_id: run_id.map(str::to_string),
            ..Default::default()
        }
    }

    fn pr_payload(number: u64) -> EventPayload {
        EventPayload::parse(format!(r#"{{ "pull_request": {{ "number": {number} }} }}"#).as_bytes())
            .unwrap()
    }

    #[test]
    fn test_resolves_pull_request_context() {
        let resolution =
            RunContext::resolve(&env(Some("o/r"), Some("555")), &pr_payload(11)).unwrap();

        assert_eq!(
            resolution,
            Resolution::PullRequest(RunContext {
                owner: "o".to_string(),
                repo: "r".to_string(),
                pull_request_number: 11,
                run_id: 555,
                server_url: DEFAULT_SERVER_URL.to_string(),
            })
        );
    }

    #[test]
    fn test_non_pull_request_event() {
        let payload = EventPayload::default();
        let resolution = RunContext::resolve(&env(Some("o/r"), Some("1")), &payload).unwrap();
        assert_eq!(resolution, Resolution::NotPullRequest);
    }

    #[test]
    fn test_non_pull_request_checked_before_environment() {
        // A push event with no runner variables is still a clean skip.
        let resolution = RunContext::resolve(&env(None, None), &EventPayload::default()).unwrap();
        assert_eq!(resolution, Resolution::NotPullRequest);
    }

    #[test]
    fn test_repository_falls_back_to_payload() {
        let payload = EventPayload::parse(
            br#"{
                "pull_request": { "number": 3 },
                "repository": { "name": "hello", "owner": { "login": "octo" } }
            }"#,
        )
        .unwrap();

        let Resolution::PullRequest(ctx) =
            RunContext::resolve(&env(None, Some("9")), &payload).unwrap()
        else {
            panic!("expected a pull request context");
        };
        assert_eq!(ctx.owner, "octo");
        assert_eq!(ctx.repo, "hello");
    }

    #[test]
    fn test_invalid_repository_is_rejected() {
        for bad in ["no-slash", "/repo", "owner/", "a/b/c"] {
            let result = RunContext::resolve(&env(Some(bad), Some("1")), &pr_payload(1));
            assert!(matches!(result, Err(AppError::Context(_))), "{bad}");
        }
    }

    #[test]
    fn test_missing_or_invalid_run_id_is_rejected() {
        assert!(RunContext::resolve(&env(Some("o/r"), None), &pr_payload(1)).is_err());
        assert!(RunContext::resolve(&env(Some("o/r"), Some("abc")), &pr_payload(1)).is_err());
    }

    #[test]
    fn test_server_url_trailing_slash_trimmed() {
        let mut environment = env(Some("o/r"), Some("5"));
        environment.server_url = Some("https://ghe.example.com/".to_string());

        let Resolution::PullRequest(ctx) =
            RunContext::resolve(&environment, &pr_payload(2)).unwrap()
        else {
            panic!("expected a pull request context");
        };
        assert_eq!(ctx.server_url, "https://ghe.example.com");
    }

    #[test]
    fn test_from_lookup_ignores_empty_values() {
        let environment = ActionEnvironment::from_lookup(|key| match key {
            "GITHUB_REPOSITORY" => Some("o/r".to_string()),
            "GITHUB_OUTPUT" => Some(String::new()),
            _ => None,
        });
        assert_eq!(environment.repository.as_deref(), Some("o/r"));
        assert!(environment.output_path.is_none());
        assert!(environment.run_id.is_none());
    }
}
