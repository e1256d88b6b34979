use base64::engine::general_purpose::STANDARD;
use base64::Engine;

// Kept stable so comments left by earlier releases are still recognized.
const MARKER_PREFIX: &str = "<!-- RubberDuckCrew/artifact2pr - ";
const MARKER_SUFFIX: &str = " -->";

/// Hidden marker placed on the first line of every summary comment.
///
/// Derived from the repository and pull request only, never the run id, so
/// every run against the same pull request yields the same marker.
pub fn identifier(owner: &str, repo: &str, pull_request_number: u64) -> String {
    let key = format!("{owner}/{repo}#{pull_request_number}");
    format!("{MARKER_PREFIX}{}{MARKER_SUFFIX}", STANDARD.encode(key))
}

/// Recover `owner/repo#number` from a marker built by [`identifier`].
pub fn decode_identifier(marker: &str) -> Option<String> {
    let encoded = marker
        .strip_prefix(MARKER_PREFIX)?
        .strip_suffix(MARKER_SUFFIX)?;
    let bytes = STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}
