//! Runtime options for doss.

/// Default number of rows the interactive prompt shows at once.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound on concurrent volume walks in the `doss` binary.
///
/// Each walk occupies one tokio blocking thread; tokio's own default is 512.
pub const MAX_BLOCKING_THREADS: usize = 4096;

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct DossOptions {
    /// Docker endpoint (`unix:///path`, `/path`, `tcp://host:port`).
    /// `None` uses `DOCKER_HOST` or the local socket.
    pub docker_host: Option<String>,
    /// Rows visible in the selection prompt.
    pub page_size: usize,
}

impl Default for DossOptions {
    fn default() -> Self {
        Self {
            docker_host: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DossOptions {
    pub fn with_host(mut self, host: Option<String>) -> Self {
        self.docker_host = host.filter(|h| !h.is_empty());
        self
    }
}
