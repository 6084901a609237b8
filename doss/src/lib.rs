//! Maintenance helper for container runtime volumes.
//!
//! Three entry operations share the volume directory as their only upstream:
//! - [`list::list_volumes`] renders the current volumes as a table
//! - [`search::search`] finds files by name across every volume in parallel
//! - [`remove::RemovalCoordinator`] deletes one operator-chosen volume and
//!   explains which containers block it when the runtime refuses
//!
//! [`attach::attach_container`] rides along for jumping into a container.

pub mod attach;
pub mod config;
pub mod conflict;
pub mod directory;
pub mod list;
mod logging;
pub mod remove;
pub mod search;
pub mod select;
pub mod sink;

pub use config::DossOptions;
pub use directory::{ContainerRef, DockerDirectory, Volume, VolumeDirectory};
pub use doss_shared::errors::{DossError, DossResult};
pub use logging::init_logging;
pub use remove::{RemovalCoordinator, RemovalOutcome};
pub use search::{FilePattern, SearchMatch, SearchReport};
pub use sink::OutputSink;
