//! Single-mountpoint traversal.

use std::path::Path;
use std::time::Instant;

use walkdir::WalkDir;

use super::{FilePattern, MountScan, SearchMatch};
use crate::sink::OutputSink;

/// Walk `mountpoint` depth-first and emit every non-directory entry whose
/// base name matches `pattern`.
///
/// Entries within a directory are visited in file-name order and symlinks
/// are not followed. The first error ends the walk; matches already
/// emitted stay emitted.
pub(crate) fn walk_mount(
    mountpoint: &Path,
    pattern: &FilePattern,
    sink: &OutputSink,
) -> MountScan {
    let start = Instant::now();
    let mut matches = 0;
    let mut error = None;

    for entry in WalkDir::new(mountpoint).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error = Some(e.to_string());
                break;
            }
        };

        if entry.file_type().is_dir() || !pattern.matches_name(entry.file_name()) {
            continue;
        }

        let found = SearchMatch {
            volume_mountpoint: mountpoint.to_path_buf(),
            file_path: entry.into_path(),
        };
        if let Err(e) = sink.write_line(&found.to_string()) {
            error = Some(format!("cannot write match: {}", e));
            break;
        }
        matches += 1;
    }

    tracing::debug!(
        mountpoint = %mountpoint.display(),
        matches,
        failed = error.is_some(),
        "volume walk finished"
    );

    MountScan {
        mountpoint: mountpoint.to_path_buf(),
        matches,
        duration_ms: start.elapsed().as_millis(),
        error,
    }
}
