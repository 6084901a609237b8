//! Volume directory: the only upstream the engine talks to.
//!
//! The engine never caches what the directory returns. Every operation
//! queries it fresh and drops the snapshot when the command ends.

mod docker;
mod types;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use doss_shared::errors::DossResult;

pub use docker::DockerDirectory;
pub use types::{ContainerRef, ContainerSummary, Volume};

/// Read/remove access to the container runtime's volumes and containers.
///
/// Shared read-only across concurrent tasks; implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait VolumeDirectory: Send + Sync {
    /// Current volumes, in the order the runtime returns them.
    async fn list_volumes(&self) -> DossResult<Vec<Volume>>;

    /// Remove a volume by name. Failures carry the backend's message text.
    async fn remove_volume(&self, name: &str, force: bool) -> DossResult<()>;

    /// Resolve a container identifier to its image and display name.
    async fn inspect_container(&self, id: &str) -> DossResult<ContainerRef>;

    /// Running containers, in the order the runtime returns them.
    async fn list_containers(&self) -> DossResult<Vec<ContainerSummary>>;
}
