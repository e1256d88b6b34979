pub mod sync;
pub mod types;

pub use sync::{enforce_pull_request, run};
pub use types::{SyncOptions, SyncOutcome};
