//! Concurrent file search across volume mountpoints.
//!
//! ```text
//! search_volumes
//!   ├─ spawn_blocking(walk /var/lib/docker/volumes/a/_data)
//!   ├─ spawn_blocking(walk /var/lib/docker/volumes/b/_data)
//!   └─ ...                    one task per mountpoint, no cap
//!   join_all ── waits for every task, failed or not
//! ```
//!
//! Matches go to the shared [`OutputSink`] as they are found, so lines from
//! different volumes interleave freely. Within one volume they keep walk order.

mod pattern;
mod report;
mod walker;

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use doss_shared::errors::DossResult;
use futures::future::join_all;

use crate::directory::VolumeDirectory;
use crate::sink::OutputSink;

pub use pattern::FilePattern;
pub use report::{MountScan, SearchReport};

/// A file whose base name matched, and the volume it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub volume_mountpoint: PathBuf,
    pub file_path: PathBuf,
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_path.display())
    }
}

/// Search every mountpoint in parallel and wait for all of them.
///
/// A mountpoint that cannot be read ends only its own walk; the failure is
/// logged and recorded in the report.
pub async fn search_volumes(
    mountpoints: Vec<PathBuf>,
    pattern: &FilePattern,
    sink: &OutputSink,
) -> SearchReport {
    let total_start = Instant::now();

    let (mounts, tasks): (Vec<_>, Vec<_>) = mountpoints
        .into_iter()
        .map(|mountpoint| {
            let pattern = pattern.clone();
            let sink = sink.clone();
            let task_mount = mountpoint.clone();
            let task = tokio::task::spawn_blocking(move || {
                walker::walk_mount(&task_mount, &pattern, &sink)
            });
            (mountpoint, task)
        })
        .unzip();

    tracing::debug!(tasks = tasks.len(), pattern = %pattern.as_str(), "volume search started");

    let scans: Vec<MountScan> = mounts
        .into_iter()
        .zip(join_all(tasks).await)
        .map(|(mountpoint, joined)| match joined {
            Ok(scan) => scan,
            Err(e) => MountScan::failed(mountpoint, format!("search task aborted: {}", e)),
        })
        .inspect(|scan| {
            if let Some(error) = &scan.error {
                tracing::warn!(
                    mountpoint = %scan.mountpoint.display(),
                    error = %error,
                    "volume search failed"
                );
            }
        })
        .collect();

    SearchReport {
        total_duration_ms: total_start.elapsed().as_millis(),
        scans,
    }
}

/// List the directory's volumes and search all of their mountpoints.
pub async fn search<D>(
    directory: &D,
    pattern: &FilePattern,
    sink: &OutputSink,
) -> DossResult<SearchReport>
where
    D: VolumeDirectory + ?Sized,
{
    let volumes = directory.list_volumes().await?;
    let mountpoints = volumes.into_iter().map(|v| v.mountpoint).collect();
    Ok(search_volumes(mountpoints, pattern, sink).await)
}
