use crate::platform::types;

/// Map an octocrab issue comment to our platform Comment type.
pub fn map_comment(comment: octocrab::models::issues::Comment) -> types::Comment {
    types::Comment {
        id: comment.id.into_inner(),
        body: comment.body,
    }
}

pub fn map_comments(comments: Vec<octocrab::models::issues::Comment>) -> Vec<types::Comment> {
    comments.into_iter().map(map_comment).collect()
}
