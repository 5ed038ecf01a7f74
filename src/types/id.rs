// ABOUTME: Phantom-typed opaque identifiers for remote resources.
// ABOUTME: Keeps Render deploy ids and GitHub deployment ids from being swapped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker types for phantom type parameters.
pub enum DeployMarker {}
pub enum DeploymentMarker {}

/// An opaque identifier handed out by a remote system.
///
/// The orchestrator only ever passes these back to the system that issued
/// them, so the value is never parsed. The phantom parameter makes a
/// `DeployId` unusable where a `DeploymentId` is expected:
///
/// ```compile_fail
/// use render_deploy::types::{DeployId, DeploymentId};
///
/// fn takes_deployment(_id: DeploymentId) {}
///
/// takes_deployment(DeployId::new("dep-123".to_string()));
/// ```
#[must_use = "IDs reference remote resources and should not be ignored"]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: String) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Manual impls: T is only a marker and implements nothing.

impl<T> std::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Id").field("value", &self.value).finish()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

/// Render deploy id (e.g. `dep-cukouhrtq21c73e9scng`).
pub type DeployId = Id<DeployMarker>;
/// GitHub deployment id. GitHub issues numbers; they are kept as text.
pub type DeploymentId = Id<DeploymentMarker>;
