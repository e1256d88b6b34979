/// Summary comment body. The marker stays on the first line so later runs
/// can find the comment by prefix; the blank-line separators are kept even
/// when there are no links.
pub fn compose_body(identifier: &str, heading: &str, artifact_links: &str) -> String {
    format!("{identifier}\n\n{heading}\n\n{artifact_links}")
}
