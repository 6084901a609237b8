//! Reading "volume in use" failures.
//!
//! The runtime reports a removal conflict as plain text with the blocking
//! container ids embedded, e.g. `remove data: volume is in use - [abc123, def456]`.
//! All knowledge of that wording lives here.

use std::sync::LazyLock;

use regex::Regex;

/// Interprets a removal failure message.
pub trait ConflictInterpreter: Send + Sync {
    /// Whether the failure means the volume is attached to containers.
    fn is_conflict(&self, message: &str) -> bool;

    /// Container identifiers named in the message, in order.
    ///
    /// Never fails: an unreadable message yields ids that will not resolve.
    fn container_ids(&self, message: &str) -> Vec<String>;
}

const IN_USE_MARKER: &str = "volume is in use";

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("bracket pattern is valid"));

/// Docker's format: one bracketed, comma-separated id list.
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketedIdList;

impl ConflictInterpreter for BracketedIdList {
    fn is_conflict(&self, message: &str) -> bool {
        message.contains(IN_USE_MARKER)
    }

    fn container_ids(&self, message: &str) -> Vec<String> {
        let span = BRACKETED
            .find(message)
            .map(|m| m.as_str().trim_matches(|c| c == '[' || c == ']'))
            .unwrap_or("");

        // Tokens are kept as the runtime wrote them.
        span.split(',').map(str::to_string).collect()
    }
}
