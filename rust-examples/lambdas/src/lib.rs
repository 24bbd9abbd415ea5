//! Lambda demos: closures passed to a for-each loop and a binary operation
//! stored in a variable.
//!
//! - [`simple_printer`]: prints every name in a list
//! - [`sum_operation`]: adds two integers through a function value

pub mod simple_printer;
pub mod sum_operation;

pub use simple_printer::print_names;
pub use sum_operation::{Addition, add, print_sum};
