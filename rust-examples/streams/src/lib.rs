//! Stream demos.
//!
//! - [`all_match`]: checks whether every number in a list is even

pub mod all_match;

pub use all_match::{is_even, print_all_even};
