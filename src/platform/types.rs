/// A build artifact attached to a workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: u64,
    pub name: String,
}

/// A comment on an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub body: Option<String>,
}

impl Comment {
    /// Raw prefix match on the body; comments without a body never match.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.body
            .as_deref()
            .is_some_and(|body| body.starts_with(prefix))
    }
}
