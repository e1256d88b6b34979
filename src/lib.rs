pub mod actions;
pub mod comment;
pub mod config;
pub mod error;
pub mod event;
pub mod platform;
pub mod workflow;
