//! # Functional Programming Common Utilities
//!
//! Shared pieces for the lambda and stream demos: stream-style operations
//! over slices, a binary operation as a first-class value, and the ambient
//! error and logging setup used by every demo binary.
//!
//! ## Modules
//!
//! - [`sequence`]: `for_each` and short-circuiting `all_match` over slices
//! - [`function`]: the [`BinaryOperation`] trait and [`apply`]
//! - [`error`]: [`DemoError`] for output failures
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Design Principles
//!
//! 1. **Closures as values**: predicates, actions and operations are generic `Fn`/`FnMut` bounds
//! 2. **Borrow, don't own**: sequences are passed as slices and never mutated
//! 3. **Visible evaluation order**: loops with early return instead of hidden combinators

pub mod error;
pub mod function;
pub mod logging;
pub mod sequence;

// Re-export main items for convenience
pub use error::DemoError;
pub use function::{BinaryOperation, apply};
pub use sequence::{all_match, for_each, try_all_match};
