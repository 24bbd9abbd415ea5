//! # Sequence Operations
//!
//! Stream-style operations over ordered sequences: apply an action to every
//! element, or check that every element satisfies a predicate.
//!
//! ## Philosophy
//!
//! Java streams expose these as `forEach` and `allMatch`. In Rust the
//! equivalents already exist on iterators (`Iterator::for_each`,
//! `Iterator::all`), but here they are written as plain loops so the
//! evaluation order and the short-circuit are visible in the code:
//!
//! - Sequences are borrowed as slices `&[T]` and never mutated
//! - Predicates and actions are closures taking `&T`
//! - `FnMut` is accepted so callers can count or collect inside the closure
//!
//! ## Example
//!
//! ```
//! use fp_common::sequence::{all_match, for_each};
//!
//! let numbers = [2, 4, 6, 8, 10];
//! assert!(all_match(&numbers, |n| n % 2 == 0));
//!
//! let mut seen = Vec::new();
//! for_each(&numbers, |n| seen.push(*n));
//! assert_eq!(seen, numbers);
//! ```

use tracing::trace;

/// Returns `true` if every element of `sequence` satisfies `predicate`.
///
/// Elements are tested in order and evaluation stops at the first element
/// the predicate rejects. An empty sequence is vacuously `true`.
///
/// # Java equivalent
/// ```java
/// numbers.stream().allMatch(n -> n % 2 == 0)
/// ```
///
/// # Example
/// ```
/// use fp_common::sequence::all_match;
/// assert!(all_match(&[2, 4, 6], |n| n % 2 == 0));
/// assert!(!all_match(&[2, 3, 4], |n| n % 2 == 0));
/// assert!(all_match::<i64, _>(&[], |_| false));
/// ```
pub fn all_match<T, P>(sequence: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if !predicate(element) {
            trace!(index, "predicate rejected element, stopping");
            return false;
        }
    }
    true
}

/// Like [`all_match`], but for predicates that can fail.
///
/// The first error stops evaluation and is returned unchanged; nothing after
/// it is tested.
///
/// # Example
/// ```
/// use fp_common::sequence::try_all_match;
/// use std::num::ParseIntError;
///
/// let even = |s: &&str| -> Result<bool, ParseIntError> { Ok(s.parse::<i64>()? % 2 == 0) };
///
/// assert_eq!(try_all_match(&["2", "4"], even), Ok(true));
/// assert_eq!(try_all_match(&["2", "3", "x"], even), Ok(false));
/// assert!(try_all_match(&["2", "x", "4"], even).is_err());
/// ```
pub fn try_all_match<T, E, P>(sequence: &[T], mut predicate: P) -> Result<bool, E>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    for (index, element) in sequence.iter().enumerate() {
        if !predicate(element)? {
            trace!(index, "predicate rejected element, stopping");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Applies `action` to every element of `sequence`, in order.
///
/// # Java equivalent
/// ```java
/// names.forEach(name -> System.out.println("Name: " + name));
/// ```
///
/// # Example
/// ```
/// use fp_common::sequence::for_each;
///
/// let mut total = 0;
/// for_each(&[1, 2, 3], |x| total += x);
/// assert_eq!(total, 6);
/// ```
pub fn for_each<T, A>(sequence: &[T], mut action: A)
where
    A: FnMut(&T),
{
    for element in sequence {
        action(element);
    }
}
