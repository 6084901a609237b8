//! Volume directory backed by the Docker Engine API.

use async_trait::async_trait;
use bollard::Docker;
use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::volume::{ListVolumesOptions, RemoveVolumeOptions};
use doss_shared::errors::{DossError, DossResult};

use super::{ContainerRef, ContainerSummary, Volume, VolumeDirectory};
use crate::config::DossOptions;

/// Seconds bollard waits on a single request before giving up.
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct DockerDirectory {
    client: Docker,
}

impl DockerDirectory {
    /// Connect using the configured host, or the platform defaults
    /// (`DOCKER_HOST`, then the local socket) when none is set.
    pub fn connect(options: &DossOptions) -> DossResult<Self> {
        let client = match options.docker_host.as_deref() {
            Some(host) => connect_host(host),
            None => Docker::connect_with_local_defaults(),
        }
        .map_err(|e| DossError::Connection(e.to_string()))?;

        tracing::debug!(host = ?options.docker_host, "connected to docker");
        Ok(Self { client })
    }

    pub fn from_client(client: Docker) -> Self {
        Self { client }
    }
}

fn connect_host(host: &str) -> Result<Docker, bollard::errors::Error> {
    if let Some(path) = host.strip_prefix("unix://") {
        Docker::connect_with_socket(path, REQUEST_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
    } else if host.starts_with('/') {
        Docker::connect_with_socket(host, REQUEST_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
    } else {
        Docker::connect_with_http(host, REQUEST_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
    }
}

/// Keep the daemon's own wording: the conflict interpreter reads it.
fn directory_err(err: bollard::errors::Error) -> DossError {
    match err {
        bollard::errors::Error::DockerResponseServerError { message, .. } => {
            DossError::Directory(message)
        }
        other => DossError::Directory(other.to_string()),
    }
}

#[async_trait]
impl VolumeDirectory for DockerDirectory {
    async fn list_volumes(&self) -> DossResult<Vec<Volume>> {
        let response = self
            .client
            .list_volumes(None::<ListVolumesOptions<String>>)
            .await
            .map_err(directory_err)?;

        let volumes = response
            .volumes
            .unwrap_or_default()
            .into_iter()
            .map(|v| Volume::new(v.driver, v.name, v.mountpoint))
            .collect::<Vec<_>>();

        tracing::debug!(count = volumes.len(), "listed volumes");
        Ok(volumes)
    }

    async fn remove_volume(&self, name: &str, force: bool) -> DossResult<()> {
        tracing::debug!(volume = %name, force, "removing volume");
        self.client
            .remove_volume(name, Some(RemoveVolumeOptions { force }))
            .await
            .map_err(directory_err)
    }

    async fn inspect_container(&self, id: &str) -> DossResult<ContainerRef> {
        let info = self
            .client
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(directory_err)?;

        let image = info
            .config
            .and_then(|config| config.image)
            .or(info.image)
            .unwrap_or_default();
        let name = info
            .name
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_default();

        Ok(ContainerRef {
            image,
            name,
            id: info.id.unwrap_or_else(|| id.to_string()),
        })
    }

    async fn list_containers(&self) -> DossResult<Vec<ContainerSummary>> {
        let containers = self
            .client
            .list_containers(None::<ListContainersOptions<String>>)
            .await
            .map_err(directory_err)?;

        Ok(containers
            .into_iter()
            .map(|c| ContainerSummary {
                id: c.id.unwrap_or_default(),
                image: c.image.unwrap_or_default(),
                names: c.names.unwrap_or_default(),
            })
            .collect())
    }
}
