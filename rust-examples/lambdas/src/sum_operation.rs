//! Adding two integers through a function value.
//!
//! The same addition is available as a plain function ([`add`]) and as a
//! named type ([`Addition`]); both go through [`BinaryOperation`], so the
//! caller cannot tell them apart.

use std::io::Write;

use fp_common::error::Result;
use fp_common::function::{BinaryOperation, apply};
use tracing::debug;

/// `(a, b) -> a + b`.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Addition as a named operation type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

impl BinaryOperation for Addition {
    fn apply(&self, a: i64, b: i64) -> i64 {
        add(a, b)
    }
}

/// Writes `Sum of <a> and <b>: <op(a, b)>`.
///
/// # Example
/// ```
/// use lambdas::{add, print_sum};
///
/// let mut out = Vec::new();
/// print_sum(&mut out, &add, 5, 10).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Sum of 5 and 10: 15\n");
/// ```
pub fn print_sum<W, Op>(out: &mut W, op: &Op, a: i64, b: i64) -> Result<()>
where
    W: Write,
    Op: BinaryOperation + ?Sized,
{
    let sum = apply(op, a, b);
    debug!(a, b, sum, "applied operation");
    writeln!(out, "Sum of {a} and {b}: {sum}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(5, 10), 15);
        assert_eq!(add(-3, 3), 0);
    }

    #[test]
    fn test_closure_fn_and_struct_agree() {
        let closure = |a: i64, b: i64| a + b;
        assert_eq!(apply(&closure, 5, 10), 15);
        assert_eq!(apply(&add, 5, 10), 15);
        assert_eq!(apply(&Addition, 5, 10), 15);
    }

    #[test]
    fn test_print_sum() {
        let mut out = Vec::new();
        print_sum(&mut out, &Addition, 5, 10).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Sum of 5 and 10: 15\n");
    }

    #[test]
    fn test_print_sum_with_wrapping_addition() {
        let mut out = Vec::new();
        print_sum(&mut out, &|a: i64, b: i64| a.wrapping_add(b), 3, 4).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Sum of 3 and 4: 7\n");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_add_overflow_panics_in_debug() {
        add(i64::MAX, 1);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_add_overflow_wraps_in_release() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
    }
}
