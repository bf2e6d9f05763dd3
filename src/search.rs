//! Binary search over a sorted sub-range, sharing the [`Comparator`] abstraction the sort
//! side uses so a caller's custom ordering works identically on both ends.

use std::cmp::Ordering;

use crate::error::{guard_comparator, SortError};
use crate::ordering::{Comparator, NaturalOrd};

/// Searches `array[index..index + length]` for `value`, using `K`'s natural [`Ord`].
///
/// Returns `Ok(Ok(i))` if an element equal to `value` is found at absolute index `i`; returns
/// `Ok(Err(i))` giving the absolute insertion point that keeps `array[index..index + length]`
/// sorted otherwise. Returns `Err(SortError::InvalidComparator)` if `index + length` exceeds
/// `array.len()` or if comparing against `value` panics — both surface as the same failure
/// because both are caught by the same `catch_unwind` boundary around the search loop.
pub fn binary_search<K: Ord>(
    array: &[K],
    index: usize,
    length: usize,
    value: &K,
) -> Result<Result<usize, usize>, SortError> {
    binary_search_by(array, index, length, |probe| probe.cmp(value))
}

/// [`binary_search`] with an explicit three-way comparator, matching the element currently
/// under examination against the sought value.
pub fn binary_search_by<K>(
    array: &[K],
    index: usize,
    length: usize,
    mut f: impl FnMut(&K) -> Ordering,
) -> Result<Result<usize, usize>, SortError> {
    guard_comparator(move || {
        let range = &array[index..index + length];
        let mut lo = 0usize;
        let mut hi = range.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match f(&range[mid]) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid + index),
            }
        }
        Err(lo + index)
    })
}

/// [`binary_search`] variant taking an explicit [`Comparator`], for callers already holding
/// one (e.g. one also used for the preceding sort) rather than an ad hoc closure.
pub fn binary_search_with<K, C: Comparator<K>>(
    array: &[K],
    index: usize,
    length: usize,
    value: &K,
    cmp: &mut C,
) -> Result<Result<usize, usize>, SortError> {
    guard_comparator(move || {
        let range = &array[index..index + length];
        let mut lo = 0usize;
        let mut hi = range.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if cmp.less(&range[mid], value) {
                lo = mid + 1;
            } else if cmp.less(value, &range[mid]) {
                hi = mid;
            } else {
                return Ok(mid + index);
            }
        }
        Err(lo + index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_present_element() {
        let array = [1, 3, 5, 7, 9, 11];
        assert_eq!(
            binary_search(&array, 0, array.len(), &7).unwrap(),
            Ok(3)
        );
    }

    #[test]
    fn reports_insertion_point_for_absent_element() {
        let array = [1, 3, 5, 7, 9, 11];
        assert_eq!(binary_search(&array, 0, array.len(), &6).unwrap(), Err(3));
        assert_eq!(binary_search(&array, 0, array.len(), &0).unwrap(), Err(0));
        assert_eq!(binary_search(&array, 0, array.len(), &100).unwrap(), Err(6));
    }

    #[test]
    fn respects_the_index_and_length_bounds_not_the_whole_array() {
        let array = [1, 3, 5, 7, 9, 11, 999, 1000];
        // Only array[..6] is a valid sorted view; the unsorted tail must not be searched, and
        // any index returned is absolute into `array`, not relative to the sub-range.
        assert_eq!(binary_search(&array, 0, 6, &7).unwrap(), Ok(3));
        assert_eq!(binary_search(&array, 0, 6, &999).unwrap(), Err(6));
    }

    #[test]
    fn nonzero_start_index_offsets_both_match_and_insertion_point() {
        let array = [0, 1, 3, 5, 7, 9, 11];
        // Search only array[1..7] == [1, 3, 5, 7, 9, 11]; absolute index of 7 is 4.
        assert_eq!(binary_search(&array, 1, 6, &7).unwrap(), Ok(4));
        assert_eq!(binary_search(&array, 1, 6, &6).unwrap(), Err(4));
    }

    #[test]
    fn empty_range_reports_insertion_point_at_index() {
        let array = [1, 2, 3];
        assert_eq!(binary_search(&array, 2, 0, &5).unwrap(), Err(2));
    }

    #[test]
    fn duplicates_return_some_matching_index_not_necessarily_first() {
        let array = [1, 2, 2, 2, 3];
        let found = binary_search(&array, 0, array.len(), &2).unwrap();
        assert!(matches!(found, Ok(idx) if array[idx] == 2));
    }

    #[test]
    fn out_of_bounds_range_surfaces_as_invalid_comparator() {
        let array = [1, 2, 3];
        let result = binary_search(&array, 1, 10, &2);
        assert!(matches!(result, Err(SortError::InvalidComparator { .. })));
    }

    #[test]
    fn panicking_comparator_surfaces_as_invalid_comparator() {
        let array = [1, 2, 3];
        let result = binary_search_by(&array, 0, array.len(), |_probe| panic!("broken comparator"));
        assert!(matches!(result, Err(SortError::InvalidComparator { .. })));
    }

    #[test]
    fn binary_search_with_explicit_comparator_matches_natural_ord() {
        let array = [1, 3, 5, 7, 9];
        let result = binary_search_with(&array, 0, array.len(), &5, &mut NaturalOrd).unwrap();
        assert_eq!(result, Ok(2));
    }
}
