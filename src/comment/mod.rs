pub mod body;
pub mod identifier;
pub mod links;

pub use body::compose_body;
pub use identifier::identifier;
pub use links::artifact_links;
