// ABOUTME: Library root for render-deploy - exposes the orchestration core for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod error;
pub mod github;
mod http;
pub mod ops;
pub mod output;
pub mod render;
pub mod status;
pub mod transport;
pub mod types;
