//! Interactive single-choice selection.

use std::io;

use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use thiserror::Error;
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::config::DEFAULT_PAGE_SIZE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// Operator backed out. Callers treat this as a clean no-op.
    #[error("selection interrupted")]
    Interrupted,

    #[error("{0}")]
    Failed(String),
}

/// Presents `items` under `label` and returns the chosen index.
pub trait Selector: Send + Sync {
    fn select(&self, label: &str, items: &[String]) -> Result<usize, SelectError>;
}

/// Run `selector` without stalling other tasks on a multi-threaded runtime.
///
/// The prompt blocks on operator input, so it moves off the worker with
/// `block_in_place` when the runtime allows it and runs inline otherwise.
pub fn select_blocking<S>(
    selector: &S,
    label: &str,
    items: &[String],
) -> Result<usize, SelectError>
where
    S: Selector + ?Sized,
{
    match Handle::try_current().map(|handle| handle.runtime_flavor()) {
        Ok(RuntimeFlavor::MultiThread) => {
            tokio::task::block_in_place(|| selector.select(label, items))
        }
        _ => selector.select(label, items),
    }
}

/// Terminal prompt. Escape or `q` cancels, as does an interrupted read.
#[derive(Debug, Clone)]
pub struct PromptSelector {
    page_size: usize,
}

impl PromptSelector {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }
}

impl Default for PromptSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Selector for PromptSelector {
    fn select(&self, label: &str, items: &[String]) -> Result<usize, SelectError> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .items(items)
            .default(0)
            .max_length(self.page_size)
            .interact_opt()
            .map_err(prompt_err)?;

        choice.ok_or(SelectError::Interrupted)
    }
}

fn prompt_err(err: dialoguer::Error) -> SelectError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            SelectError::Interrupted
        }
        dialoguer::Error::IO(e) => SelectError::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl Selector for Fixed {
        fn select(&self, _label: &str, _items: &[String]) -> Result<usize, SelectError> {
            Ok(self.0)
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_select_blocking_on_multi_thread_runtime() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(select_blocking(&Fixed(1), "Pick", &items), Ok(1));
    }

    #[tokio::test]
    async fn test_select_blocking_on_current_thread_runtime() {
        let items = vec!["a".to_string()];
        assert_eq!(select_blocking(&Fixed(0), "Pick", &items), Ok(0));
    }

    #[test]
    fn test_select_blocking_outside_runtime() {
        assert_eq!(select_blocking(&Fixed(0), "Pick", &[]), Ok(0));
    }

    #[test]
    fn test_interrupted_read_is_cancellation() {
        let err = prompt_err(dialoguer::Error::IO(io::Error::from(
            io::ErrorKind::Interrupted,
        )));
        assert_eq!(err, SelectError::Interrupted);
    }

    #[test]
    fn test_other_io_errors_are_failures() {
        let err = prompt_err(dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::NotConnected,
            "not a terminal",
        )));
        assert_eq!(err, SelectError::Failed("not a terminal".into()));
    }
}
