// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to keep remote ids from different systems apart.

mod id;
mod repository;
mod service_id;

pub use id::{DeployId, DeploymentId, Id};
pub use repository::{Repository, RepositoryError};
pub use service_id::{ServiceId, ServiceIdError};
