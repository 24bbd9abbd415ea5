//! Validating a whole collection with a single predicate.
//!
//! `all_match` answers "does every element pass?" and stops at the first
//! element that does not, which makes it a cheap validation check.

use std::io::Write;

use fp_common::error::Result;
use fp_common::sequence::all_match;
use tracing::debug;

/// Numbers checked by the `all_match` binary.
pub const DEFAULT_NUMBERS: [i64; 5] = [2, 4, 6, 8, 10];

/// `n % 2 == 0`.
pub fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

/// Writes `Are all numbers even? <answer>`.
///
/// # Example
/// ```
/// use streams::print_all_even;
///
/// let mut out = Vec::new();
/// print_all_even(&mut out, &[2, 3, 4]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Are all numbers even? false\n");
/// ```
pub fn print_all_even<W: Write>(out: &mut W, numbers: &[i64]) -> Result<()> {
    let all_even = all_match(numbers, is_even);
    debug!(len = numbers.len(), all_even, "checked numbers");
    writeln!(out, "Are all numbers even? {all_even}")?;
    Ok(())
}
