//! # introcore
//!
//! `introcore` is an introspective sort and binary search core for a general-purpose
//! collections library.
//!
//! It implements the classic **introsort** algorithm: median-of-three quicksort down to a
//! size cutoff, an insertion sort (or hand-unrolled size-2/3 network) below that cutoff, and
//! a heapsort fallback once the recursion depth budget runs out, bounding the worst case to
//! `O(n log n)` regardless of input distribution.
//!
//! ## Key Features
//!
//! - **Hole-threaded partitioning**: the median-of-three pivot is lifted out of the sequence
//!   into a local, and the resulting gap is relocated directly as the two scan cursors
//!   converge, saving two of the three moves a textbook swap-based partition costs per step.
//! - **Depth-limited fallback**: [`introsort`] tracks a recursion-depth budget and switches to
//!   heapsort once it is exhausted, so no adversarial input can drive quicksort's quadratic
//!   worst case.
//! - **Keys-only and keys+values variants**: every stage of the algorithm has a sibling that
//!   carries a second, parallel array of values through the same permutation, for sorting a
//!   key array and reordering an associated payload array in lockstep.
//! - **Pluggable ordering**: the [`Comparator`] trait unifies explicit closures, a type's
//!   natural [`Ord`], a direct-machine-compare path for primitive numerics, and a null-aware
//!   wrapper for `Option<K>` keys, all compiled to the same generic sort body.
//!
//! ## Usage
//!
//! ```rust
//! use introcore::sort;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! ```
//!
//! Sorting a key array and a parallel value array together:
//!
//! ```rust
//! use introcore::sort_pairs;
//!
//! let mut keys = vec![3, 1, 2];
//! let mut values = vec!["c", "a", "b"];
//! sort_pairs(&mut keys, &mut values).unwrap();
//! assert_eq!(keys, vec![1, 2, 3]);
//! assert_eq!(values, vec!["a", "b", "c"]);
//! ```
//!
//! Sorting floating-point keys routes NaNs to the front of the slice first, since `f32`/`f64`
//! have no total order otherwise:
//!
//! ```rust
//! use introcore::sort_f64;
//!
//! let mut data = vec![3.0, f64::NAN, 1.0, 2.0];
//! sort_f64(&mut data);
//! assert!(data[0].is_nan());
//! assert_eq!(&data[1..], &[1.0, 2.0, 3.0]);
//! ```
//!
//! ## Non-goals
//!
//! This crate does not provide a stable sort, external (disk-backed) sorting, parallel or
//! multi-threaded sorting, or incremental/streaming sorting of data arriving over time. It
//! sorts one in-memory slice (or slice pair) at a time.

use std::cmp::Ordering;

mod error;
mod heap;
mod introsort;
mod nan;
mod ordering;
mod partition;
mod search;
mod small;

pub use error::SortError;
pub use introsort::INTROSORT_SIZE_THRESHOLD;
pub use ordering::{Comparator, IntrinsicComparator, IntrinsicOrd, NaturalOrd, OptionOrd};
pub use search::{binary_search, binary_search_by, binary_search_with};

use error::guard_comparator;
use nan::FloatKey;

/// Sorts `keys` in place using `K`'s natural [`Ord`].
///
/// `Ord`'s contract guarantees a strict weak order that cannot panic for well-behaved
/// implementations, so this entry point is infallible.
pub fn sort<K: Ord>(keys: &mut [K]) {
    introsort::introsort(keys, &mut NaturalOrd);
}

/// Sorts `keys` in place using an explicit comparator.
///
/// Returns [`SortError::InvalidComparator`] if `cmp` panics during the sort (directly, or by
/// driving an internal invariant to panic), rather than unwinding out through this call.
pub fn sort_by<K>(
    keys: &mut [K],
    mut cmp: impl FnMut(&K, &K) -> Ordering,
) -> Result<(), SortError> {
    guard_comparator(move || introsort::introsort(keys, &mut cmp))
}

/// Sorts `keys` in place using the direct-machine-compare path for primitive numeric types.
///
/// Equivalent to [`sort`] for any `K: IntrinsicOrd`, but skips constructing an [`Ordering`]
/// value on the hot path.
pub fn sort_intrinsic<K: IntrinsicOrd>(keys: &mut [K]) {
    introsort::introsort(keys, &mut IntrinsicComparator);
}

/// Sorts `keys` and reorders `values` in lockstep, using `K`'s natural [`Ord`].
///
/// Returns [`SortError::LengthMismatch`] if the two slices have different lengths.
pub fn sort_pairs<K: Ord, V>(keys: &mut [K], values: &mut [V]) -> Result<(), SortError> {
    check_lengths(keys, values)?;
    introsort::introsort_pairs(keys, values, &mut NaturalOrd);
    Ok(())
}

/// Sorts `keys` and reorders `values` in lockstep, using an explicit comparator.
///
/// Returns [`SortError::LengthMismatch`] if the two slices have different lengths, or
/// [`SortError::InvalidComparator`] if `cmp` panics during the sort.
pub fn sort_pairs_by<K, V>(
    keys: &mut [K],
    values: &mut [V],
    mut cmp: impl FnMut(&K, &K) -> Ordering,
) -> Result<(), SortError> {
    check_lengths(keys, values)?;
    guard_comparator(move || introsort::introsort_pairs(keys, values, &mut cmp))
}

/// Sorts `keys` in place, with `NaN`s collected at the front of the slice.
///
/// `f32` has no total order, so `NaN`s are segregated by a single linear pre-pass before the
/// remaining, now totally-ordered, elements are sorted by value.
pub fn sort_f32(keys: &mut [f32]) {
    sort_floats(keys);
}

/// `f64` counterpart of [`sort_f32`].
pub fn sort_f64(keys: &mut [f64]) {
    sort_floats(keys);
}

/// Keys+values variant of [`sort_f32`].
///
/// Returns [`SortError::LengthMismatch`] if the two slices have different lengths.
pub fn sort_f32_pairs<V>(keys: &mut [f32], values: &mut [V]) -> Result<(), SortError> {
    check_lengths(keys, values)?;
    sort_floats_pairs(keys, values);
    Ok(())
}

/// Keys+values variant of [`sort_f64`].
///
/// Returns [`SortError::LengthMismatch`] if the two slices have different lengths.
pub fn sort_f64_pairs<V>(keys: &mut [f64], values: &mut [V]) -> Result<(), SortError> {
    check_lengths(keys, values)?;
    sort_floats_pairs(keys, values);
    Ok(())
}

fn sort_floats<K: FloatKey + IntrinsicOrd>(keys: &mut [K]) {
    let m = nan::partition_nans(keys);
    let rest = &mut keys[m..];
    introsort::introsort(rest, &mut IntrinsicComparator);
}

fn sort_floats_pairs<K: FloatKey + IntrinsicOrd, V>(keys: &mut [K], values: &mut [V]) {
    let m = nan::partition_nans_pairs(keys, values);
    let rest_keys = &mut keys[m..];
    let rest_values = &mut values[m..];
    introsort::introsort_pairs(rest_keys, rest_values, &mut IntrinsicComparator);
}

fn check_lengths<K, V>(keys: &[K], values: &[V]) -> Result<(), SortError> {
    if keys.len() != values.len() {
        return Err(SortError::LengthMismatch {
            keys_len: keys.len(),
            values_len: values.len(),
        });
    }
    Ok(())
}

pub mod prelude {
    //! Re-exports of the entry points most callers need.
    pub use crate::{
        binary_search, binary_search_by, sort, sort_by, sort_f32, sort_f64, sort_intrinsic,
        sort_pairs, sort_pairs_by, Comparator, SortError,
    };
}
