//! Errors raised by the demo programs.

use thiserror::Error;

/// Failures a demo can report to its entry point.
///
/// The sequence operations themselves never fail; a fallible predicate
/// brings its own error type through [`crate::sequence::try_all_match`].
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing the demo's output failed (closed pipe, full disk, ...).
    #[error("failed to write demo output")]
    Output(#[from] std::io::Error),
}

/// Result alias for demo functions.
pub type Result<T> = std::result::Result<T, DemoError>;
