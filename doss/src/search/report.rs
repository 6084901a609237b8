use std::path::{Path, PathBuf};

/// Outcome of searching one mountpoint.
#[derive(Debug, Clone)]
pub struct MountScan {
    pub mountpoint: PathBuf,
    pub matches: usize,
    pub duration_ms: u128,
    /// Set when the walk stopped early.
    pub error: Option<String>,
}

impl MountScan {
    pub(crate) fn failed(mountpoint: PathBuf, error: String) -> Self {
        Self {
            mountpoint,
            matches: 0,
            duration_ms: 0,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-mountpoint outcomes in the order the mountpoints were given.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub total_duration_ms: u128,
    pub scans: Vec<MountScan>,
}

impl SearchReport {
    pub fn total_matches(&self) -> usize {
        self.scans.iter().map(|scan| scan.matches).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &MountScan> {
        self.scans.iter().filter(|scan| !scan.is_ok())
    }

    pub fn scan(&self, mountpoint: &Path) -> Option<&MountScan> {
        self.scans.iter().find(|scan| scan.mountpoint == mountpoint)
    }
}
