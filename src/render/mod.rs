// ABOUTME: Render hosting service integration.
// ABOUTME: Exposes RenderClient, the production DeployOps implementation.

mod client;
mod types;

pub use client::{DEFAULT_API_URL, RenderClient};
