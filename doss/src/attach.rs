//! Attach the terminal to a running container.
//!
//! Choose a container, then hand the terminal to `docker attach`.

use async_trait::async_trait;
use doss_shared::errors::{DossError, DossResult};
use std::process::Stdio;
use tokio::process::Command;

use crate::directory::VolumeDirectory;
use crate::select::{SelectError, Selector, select_blocking};
use crate::sink::OutputSink;

const SELECT_LABEL: &str = "Select container";

/// Connects the current terminal to a container.
#[async_trait]
pub trait Attacher: Send + Sync {
    async fn attach(&self, container_id: &str) -> DossResult<()>;
}

/// Runs `docker attach <id>` with this process's stdio.
#[derive(Debug, Clone)]
pub struct DockerCliAttacher {
    program: String,
}

impl DockerCliAttacher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DockerCliAttacher {
    fn default() -> Self {
        Self::new("docker")
    }
}

#[async_trait]
impl Attacher for DockerCliAttacher {
    async fn attach(&self, container_id: &str) -> DossResult<()> {
        let status = Command::new(&self.program)
            .arg("attach")
            .arg(container_id)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| DossError::Attach(format!("cannot run {}: {}", self.program, e)))?;

        if !status.success() {
            return Err(DossError::Attach(format!(
                "{} attach {} exited with {}",
                self.program, container_id, status
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachOutcome {
    NoContainers,
    Cancelled,
    Attached { display_key: String },
}

pub async fn attach_container<D, S, A>(
    directory: &D,
    selector: &S,
    attacher: &A,
    sink: &OutputSink,
) -> DossResult<AttachOutcome>
where
    D: VolumeDirectory + ?Sized,
    S: Selector + ?Sized,
    A: Attacher + ?Sized,
{
    let containers = directory.list_containers().await?;
    if containers.is_empty() {
        sink.write_line("No containers")?;
        return Ok(AttachOutcome::NoContainers);
    }

    let items: Vec<String> = containers.iter().map(|c| c.display_key()).collect();
    let index = match select_blocking(selector, SELECT_LABEL, &items) {
        Ok(index) => index,
        Err(SelectError::Interrupted) => return Ok(AttachOutcome::Cancelled),
        Err(SelectError::Failed(reason)) => return Err(DossError::Selection(reason)),
    };
    let container = containers.get(index).ok_or_else(|| {
        DossError::Internal(format!("selection index {} out of range", index))
    })?;
    let display_key = items[index].clone();

    sink.write_line(&format!("Attach to {}", display_key))?;
    tracing::debug!(container_id = %container.id, "attaching");
    attacher.attach(&container.id).await?;

    Ok(AttachOutcome::Attached { display_key })
}
