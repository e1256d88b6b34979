use crate::event::RunContext;
use crate::platform::types::Artifact;

/// Artifact page within the run, built from ids rather than the API's
/// download URL, which needs a token and expires.
pub fn artifact_url(ctx: &RunContext, artifact: &Artifact) -> String {
    format!(
        "{}/{}/{}/actions/runs/{}/artifacts/{}",
        ctx.server_url, ctx.owner, ctx.repo, ctx.run_id, artifact.id
    )
}

pub fn artifact_link(ctx: &RunContext, artifact: &Artifact) -> String {
    format!("- [{}]({})", artifact.name, artifact_url(ctx, artifact))
}

/// One Markdown list item per artifact, in input order, no trailing newline.
pub fn artifact_links(ctx: &RunContext, artifacts: &[Artifact]) -> String {
    artifacts
        .iter()
        .map(|artifact| artifact_link(ctx, artifact))
        .collect::<Vec<_>>()
        .join("\n")
}
