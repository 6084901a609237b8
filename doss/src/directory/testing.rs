//! In-memory fakes for the external seams.

use std::collections::HashMap;

use async_trait::async_trait;
use doss_shared::errors::{DossError, DossResult};
use parking_lot::Mutex;

use super::{ContainerRef, ContainerSummary, Volume, VolumeDirectory};
use crate::select::{SelectError, Selector};

#[derive(Default)]
pub(crate) struct FakeDirectory {
    pub volumes: Vec<Volume>,
    pub containers: Vec<ContainerSummary>,
    pub inspectable: HashMap<String, ContainerRef>,
    /// Message returned by `remove_volume`; `None` means success.
    pub remove_failure: Option<String>,
    pub list_failure: Option<String>,
    pub removed: Mutex<Vec<(String, bool)>>,
    pub inspected: Mutex<Vec<String>>,
}

impl FakeDirectory {
    pub fn with_volumes(volumes: Vec<Volume>) -> Self {
        Self {
            volumes,
            ..Default::default()
        }
    }

    pub fn removed(&self) -> Vec<(String, bool)> {
        self.removed.lock().clone()
    }
}

#[async_trait]
impl VolumeDirectory for FakeDirectory {
    async fn list_volumes(&self) -> DossResult<Vec<Volume>> {
        match &self.list_failure {
            Some(message) => Err(DossError::Directory(message.clone())),
            None => Ok(self.volumes.clone()),
        }
    }

    async fn remove_volume(&self, name: &str, force: bool) -> DossResult<()> {
        self.removed.lock().push((name.to_string(), force));
        match &self.remove_failure {
            Some(message) => Err(DossError::Directory(message.clone())),
            None => Ok(()),
        }
    }

    async fn inspect_container(&self, id: &str) -> DossResult<ContainerRef> {
        self.inspected.lock().push(id.to_string());
        self.inspectable
            .get(id)
            .cloned()
            .ok_or_else(|| DossError::Directory(format!("No such container: {}", id)))
    }

    async fn list_containers(&self) -> DossResult<Vec<ContainerSummary>> {
        Ok(self.containers.clone())
    }
}

/// Selector that replays a fixed answer and records what it was shown.
pub(crate) struct ScriptedSelector {
    answer: Mutex<Option<Result<usize, SelectError>>>,
    pub shown: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedSelector {
    pub fn choose(index: usize) -> Self {
        Self::replay(Ok(index))
    }

    pub fn cancel() -> Self {
        Self::replay(Err(SelectError::Interrupted))
    }

    pub fn fail(reason: &str) -> Self {
        Self::replay(Err(SelectError::Failed(reason.to_string())))
    }

    fn replay(answer: Result<usize, SelectError>) -> Self {
        Self {
            answer: Mutex::new(Some(answer)),
            shown: Mutex::new(Vec::new()),
        }
    }
}

impl Selector for ScriptedSelector {
    fn select(&self, label: &str, items: &[String]) -> Result<usize, SelectError> {
        self.shown.lock().push((label.to_string(), items.to_vec()));
        self.answer
            .lock()
            .take()
            .unwrap_or_else(|| Err(SelectError::Failed("selector already used".into())))
    }
}
