//! Interactive volume removal.
//!
//! ```text
//! List ──(none)──────────────────────────────▶ NothingToDo
//!   │
//! Select ──(cancel)──────────────────────────▶ Cancelled
//!   │    └─(prompt broke)────────────────────▶ Err(Selection)
//! Remove ──(ok)──────────────────────────────▶ Removed
//!   │    └─(other failure)───────────────────▶ Err(Directory), verbatim
//!   │ in use
//! Resolve ──(every id resolved)──────────────▶ Err(VolumeInUse)
//!         └─(any lookup failed)──────────────▶ Err(Directory), verbatim
//! ```
//!
//! Removal is never forced.

use doss_shared::errors::{DossError, DossResult};

use crate::conflict::{BracketedIdList, ConflictInterpreter};
use crate::directory::{ContainerRef, VolumeDirectory};
use crate::select::{SelectError, Selector, select_blocking};
use crate::sink::OutputSink;

const SELECT_LABEL: &str = "Select volume";

/// How a removal run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// There were no volumes to choose from.
    NothingToDo,
    /// The operator backed out of the prompt. Nothing was removed.
    Cancelled,
    Removed { display_key: String },
}

pub struct RemovalCoordinator<'a, D: ?Sized, S: ?Sized> {
    directory: &'a D,
    selector: &'a S,
    interpreter: Box<dyn ConflictInterpreter>,
}

impl<'a, D, S> RemovalCoordinator<'a, D, S>
where
    D: VolumeDirectory + ?Sized,
    S: Selector + ?Sized,
{
    pub fn new(directory: &'a D, selector: &'a S) -> Self {
        Self {
            directory,
            selector,
            interpreter: Box::new(BracketedIdList),
        }
    }

    /// Swap the conflict interpreter, for runtimes with different wording.
    pub fn with_interpreter(mut self, interpreter: impl ConflictInterpreter + 'static) -> Self {
        self.interpreter = Box::new(interpreter);
        self
    }

    pub async fn run(&self, sink: &OutputSink) -> DossResult<RemovalOutcome> {
        let volumes = self.directory.list_volumes().await?;
        if volumes.is_empty() {
            tracing::debug!("no volumes to remove");
            return Ok(RemovalOutcome::NothingToDo);
        }

        let items: Vec<String> = volumes.iter().map(|v| v.display_key()).collect();
        let index = match select_blocking(self.selector, SELECT_LABEL, &items) {
            Ok(index) => index,
            Err(SelectError::Interrupted) => {
                tracing::debug!("volume selection cancelled");
                return Ok(RemovalOutcome::Cancelled);
            }
            Err(SelectError::Failed(reason)) => return Err(DossError::Selection(reason)),
        };

        let volume = volumes.get(index).ok_or_else(|| {
            DossError::Internal(format!("selection index {} out of range", index))
        })?;
        let display_key = volume.display_key();

        if let Err(err) = self.directory.remove_volume(&volume.name, false).await {
            return Err(self.explain_failure(err).await);
        }

        tracing::info!(volume = %volume.name, "volume removed");
        sink.write_line(&format!("Remove {}", display_key))?;
        Ok(RemovalOutcome::Removed { display_key })
    }

    /// Enrich an "in use" failure with the blocking containers when every
    /// one of them resolves; otherwise return the failure untouched.
    async fn explain_failure(&self, err: DossError) -> DossError {
        let message = match err {
            DossError::Directory(message) if self.interpreter.is_conflict(&message) => message,
            other => return other,
        };

        let ids = self.interpreter.container_ids(&message);
        match resolve_blocking_containers(self.directory, &ids).await {
            Ok(containers) => DossError::VolumeInUse {
                message,
                containers: containers
                    .iter()
                    .map(ContainerRef::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            },
            Err(lookup) => {
                tracing::debug!(error = %lookup, "could not resolve blocking containers");
                DossError::Directory(message)
            }
        }
    }
}

/// Look up every id. All-or-nothing: the first failed lookup discards the
/// rest. An empty id counts as a failed lookup.
pub async fn resolve_blocking_containers<D>(
    directory: &D,
    ids: &[String],
) -> DossResult<Vec<ContainerRef>>
where
    D: VolumeDirectory + ?Sized,
{
    let mut containers = Vec::with_capacity(ids.len());
    for id in ids {
        if id.is_empty() {
            return Err(DossError::Directory("empty container id".into()));
        }
        containers.push(directory.inspect_container(id).await?);
    }
    Ok(containers)
}
