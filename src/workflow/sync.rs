use crate::comment::identifier::decode_identifier;
use crate::comment::{artifact_links, compose_body, identifier};
use crate::error::{AppError, Result};
use crate::event::{Resolution, RunContext};
use crate::platform::types::Comment;
use crate::platform::Platform;
use crate::workflow::types::{SyncOptions, SyncOutcome};

/// Entry point: skip non pull request triggers, otherwise synchronize.
pub async fn run(
    platform: &dyn Platform,
    resolution: &Resolution,
    options: &SyncOptions,
) -> Result<SyncOutcome> {
    match resolution {
        Resolution::PullRequest(ctx) => synchronize(platform, ctx, options).await,
        Resolution::NotPullRequest => {
            tracing::info!("This action only runs on pull requests, skipping");
            Ok(SyncOutcome::SkippedNotPullRequest)
        }
    }
}

/// Turn a skipped run into a failure when the caller asked for it.
pub fn enforce_pull_request(
    outcome: SyncOutcome,
    fail_on_non_pull_request: bool,
) -> Result<SyncOutcome> {
    match outcome {
        SyncOutcome::SkippedNotPullRequest if fail_on_non_pull_request => {
            Err(AppError::NotPullRequest)
        }
        outcome => Ok(outcome),
    }
}

/// Replace the summary comment on the pull request with one listing the
/// run's current artifacts.
pub async fn synchronize(
    platform: &dyn Platform,
    ctx: &RunContext,
    options: &SyncOptions,
) -> Result<SyncOutcome> {
    let artifacts = platform
        .list_run_artifacts(&ctx.owner, &ctx.repo, ctx.run_id)
        .await?;
    tracing::info!(
        run_id = ctx.run_id,
        count = artifacts.len(),
        "Found artifacts for run"
    );

    let marker = identifier(&ctx.owner, &ctx.repo, ctx.pull_request_number);
    tracing::debug!(
        marker = %marker,
        pull_request = decode_identifier(&marker).as_deref().unwrap_or_default(),
        "Summary comment marker"
    );

    if artifacts.is_empty() {
        delete_existing_comments(platform, ctx, &marker).await?;
        tracing::warn!(run_id = ctx.run_id, "No artifacts found for workflow run");
        return handle_no_artifacts(platform, ctx, &options.no_artifacts_message).await;
    }

    let links = artifact_links(ctx, &artifacts);
    tracing::info!("Artifacts:\n{links}");
    let body = compose_body(&marker, &options.heading, &links);

    if options.update_in_place {
        return update_or_post(platform, ctx, &marker, &body, artifacts.len()).await;
    }

    delete_existing_comments(platform, ctx, &marker).await?;
    let comment_id = post_comment(platform, ctx, &body).await?;

    Ok(SyncOutcome::Posted {
        comment_id,
        artifact_count: artifacts.len(),
    })
}

async fn matching_comments(
    platform: &dyn Platform,
    ctx: &RunContext,
    marker: &str,
) -> Result<Vec<Comment>> {
    let comments = platform
        .list_issue_comments(&ctx.owner, &ctx.repo, ctx.pull_request_number)
        .await?;

    Ok(comments
        .into_iter()
        .filter(|comment| comment.starts_with(marker))
        .collect())
}

async fn delete_comments(
    platform: &dyn Platform,
    ctx: &RunContext,
    comments: &[Comment],
) -> Result<Vec<u64>> {
    let mut deleted = Vec::with_capacity(comments.len());
    for comment in comments {
        platform
            .delete_comment(&ctx.owner, &ctx.repo, comment.id)
            .await?;
        tracing::info!(
            comment_id = comment.id,
            pr = ctx.pull_request_number,
            "Deleted existing comment"
        );
        deleted.push(comment.id);
    }
    Ok(deleted)
}

/// Delete every comment on the pull request whose body starts with `marker`.
///
/// Returns the ids of the deleted comments.
pub async fn delete_existing_comments(
    platform: &dyn Platform,
    ctx: &RunContext,
    marker: &str,
) -> Result<Vec<u64>> {
    let existing = matching_comments(platform, ctx, marker).await?;
    delete_comments(platform, ctx, &existing).await
}

/// Post the fallback message verbatim, or nothing when it is empty.
pub async fn handle_no_artifacts(
    platform: &dyn Platform,
    ctx: &RunContext,
    message: &str,
) -> Result<SyncOutcome> {
    if message.is_empty() {
        return Ok(SyncOutcome::NoArtifacts { comment_id: None });
    }

    let comment_id = post_comment(platform, ctx, message).await?;
    Ok(SyncOutcome::NoArtifacts {
        comment_id: Some(comment_id),
    })
}

/// Create a comment on the pull request and return its id.
pub async fn post_comment(platform: &dyn Platform, ctx: &RunContext, body: &str) -> Result<u64> {
    let comment = platform
        .create_comment(&ctx.owner, &ctx.repo, ctx.pull_request_number, body)
        .await?;
    tracing::info!(
        comment_id = comment.id,
        pr = ctx.pull_request_number,
        "Comment posted to pull request"
    );
    Ok(comment.id)
}

/// Edit the first matching comment and delete any others; post a new one if
/// none match.
async fn update_or_post(
    platform: &dyn Platform,
    ctx: &RunContext,
    marker: &str,
    body: &str,
    artifact_count: usize,
) -> Result<SyncOutcome> {
    let mut existing = matching_comments(platform, ctx, marker).await?;

    if existing.is_empty() {
        let comment_id = post_comment(platform, ctx, body).await?;
        return Ok(SyncOutcome::Posted {
            comment_id,
            artifact_count,
        });
    }

    let keep = existing.remove(0);
    delete_comments(platform, ctx, &existing).await?;

    let updated = platform
        .update_comment(&ctx.owner, &ctx.repo, keep.id, body)
        .await?;
    tracing::info!(
        comment_id = updated.id,
        pr = ctx.pull_request_number,
        "Updated existing comment"
    );

    Ok(SyncOutcome::Updated {
        comment_id: updated.id,
        artifact_count,
    })
}
