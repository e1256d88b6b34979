pub mod context;
pub mod payload;

pub use context::{ActionEnvironment, Resolution, RunContext};
pub use payload::EventPayload;
