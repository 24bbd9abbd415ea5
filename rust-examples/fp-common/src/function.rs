//! # Function Values
//!
//! A binary operation on integers as a first-class value.
//!
//! Java models this with a `@FunctionalInterface`: an interface with a single
//! abstract method that a lambda can implement. The Rust counterpart is a
//! one-method trait with a blanket implementation over the `Fn` traits, so a
//! closure, a plain `fn` item and a named type can all be stored, passed and
//! invoked the same way.
//!
//! ```
//! use fp_common::function::{apply, BinaryOperation};
//!
//! struct Max;
//!
//! impl BinaryOperation for Max {
//!     fn apply(&self, a: i64, b: i64) -> i64 {
//!         a.max(b)
//!     }
//! }
//!
//! let sum = |a: i64, b: i64| a + b;
//! assert_eq!(apply(&sum, 5, 10), 15);
//! assert_eq!(apply(&Max, 5, 10), 10);
//! ```

/// An operation taking two integers and producing one.
pub trait BinaryOperation {
    fn apply(&self, a: i64, b: i64) -> i64;
}

impl<F> BinaryOperation for F
where
    F: Fn(i64, i64) -> i64,
{
    #[inline]
    fn apply(&self, a: i64, b: i64) -> i64 {
        self(a, b)
    }
}

/// Invokes `op` on `a` and `b`.
///
/// Overflow behaves as the operation itself defines it; for `+` that is a
/// panic in debug builds and wraparound in release builds.
///
/// # Example
/// ```
/// use fp_common::function::apply;
/// assert_eq!(apply(&|a: i64, b: i64| a * b, 6, 7), 42);
/// ```
#[inline]
pub fn apply<Op>(op: &Op, a: i64, b: i64) -> i64
where
    Op: BinaryOperation + ?Sized,
{
    op.apply(a, b)
}
