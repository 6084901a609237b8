//! Request-scoped snapshots returned by the volume directory.

use std::fmt;
use std::path::PathBuf;

/// A named, driver-backed volume and where the host sees its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub driver: String,
    /// Sole identity used for removal.
    pub name: String,
    pub mountpoint: PathBuf,
}

impl Volume {
    pub fn new(
        driver: impl Into<String>,
        name: impl Into<String>,
        mountpoint: impl Into<PathBuf>,
    ) -> Self {
        Self {
            driver: driver.into(),
            name: name.into(),
            mountpoint: mountpoint.into(),
        }
    }

    /// Human-readable key shown in prompts and confirmations.
    ///
    /// Derived on demand; never used to identify the volume.
    pub fn display_key(&self) -> String {
        format!("{} - {}", self.driver, self.name)
    }
}

/// A container resolved from an identifier, used to explain removal conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub image: String,
    pub name: String,
    pub id: String,
}

impl fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {} ({}) ]", self.image, self.name, self.id)
    }
}

/// A running container as listed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub id: String,
    pub image: String,
    pub names: Vec<String>,
}

impl ContainerSummary {
    pub fn display_key(&self) -> String {
        format!("{} - {}", self.image, self.names.join(","))
    }
}
