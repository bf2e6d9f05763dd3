//! Failure modes for the fallible entry points.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Failure surfaced by a fallible sort or search.
#[derive(Debug, Error)]
pub enum SortError {
    /// The comparator violated the strict-weak-order contract sorting requires of it, either
    /// by panicking directly or by driving an internal invariant check to panic.
    #[error("comparator violated its ordering contract during sort: {detail}")]
    InvalidComparator {
        /// Best-effort description of the underlying panic, for diagnostics.
        detail: String,
    },
    /// `sort_pairs`/`sort_pairs_by` was called with a keys slice and a values slice of
    /// different lengths.
    #[error("keys length {keys_len} does not match values length {values_len}")]
    LengthMismatch {
        /// Length of the keys slice.
        keys_len: usize,
        /// Length of the values slice.
        values_len: usize,
    },
}

/// Runs `f`, converting any panic it (or anything it calls, including a comparator) raises
/// into [`SortError::InvalidComparator`].
///
/// This is the one place this crate intercepts unwinding. A panicking comparator is the only
/// way a correct algorithm built on checked Rust slice indexing can fail mid-sort, so catching
/// it here and reporting it uniformly is more useful to a caller than an arbitrary panic
/// message surfacing from deep inside a partition step.
pub(crate) fn guard_comparator<T>(f: impl FnOnce() -> T) -> Result<T, SortError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| SortError::InvalidComparator {
        detail: panic_message(&payload),
    })
}

fn panic_message(payload: &Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
