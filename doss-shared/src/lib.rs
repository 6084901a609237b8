//! Types shared between the doss engine and its command-line shell.

pub mod errors;

pub use errors::{DossError, DossResult};
