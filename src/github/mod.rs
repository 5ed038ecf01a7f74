// ABOUTME: GitHub deployments integration.
// ABOUTME: Exposes GitHubClient, the production TrackerOps implementation.

mod client;
mod types;

pub use client::{DEFAULT_API_URL, GitHubClient};
