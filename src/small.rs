//! Small-partition sorters: hand-unrolled networks for sizes 2 and 3, and the insertion sort
//! used both as the introsort leaf and as the small-subproblem terminator.

use crate::ordering::Comparator;

#[inline]
fn swap_if_greater<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C, i: usize, j: usize) {
    if cmp.less(&keys[j], &keys[i]) {
        keys.swap(i, j);
    }
}

#[inline]
fn swap_if_greater_pairs<K, V, C: Comparator<K>>(
    keys: &mut [K],
    values: &mut [V],
    cmp: &mut C,
    i: usize,
    j: usize,
) {
    if cmp.less(&keys[j], &keys[i]) {
        keys.swap(i, j);
        values.swap(i, j);
    }
}

/// Sorts a 2-element slice: a single conditional swap.
pub(crate) fn sort2<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C) {
    debug_assert_eq!(keys.len(), 2);
    swap_if_greater(keys, cmp, 0, 1);
}

pub(crate) fn sort2_pairs<K, V, C: Comparator<K>>(keys: &mut [K], values: &mut [V], cmp: &mut C) {
    debug_assert_eq!(keys.len(), 2);
    swap_if_greater_pairs(keys, values, cmp, 0, 1);
}

/// Sorts a 3-element slice with the fixed network `(0,1)`, `(0,2)`, `(1,2)`.
pub(crate) fn sort3<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C) {
    debug_assert_eq!(keys.len(), 3);
    swap_if_greater(keys, cmp, 0, 1);
    swap_if_greater(keys, cmp, 0, 2);
    swap_if_greater(keys, cmp, 1, 2);
}

pub(crate) fn sort3_pairs<K, V, C: Comparator<K>>(keys: &mut [K], values: &mut [V], cmp: &mut C) {
    debug_assert_eq!(keys.len(), 3);
    swap_if_greater_pairs(keys, values, cmp, 0, 1);
    swap_if_greater_pairs(keys, values, cmp, 0, 2);
    swap_if_greater_pairs(keys, values, cmp, 1, 2);
}

/// Classic shift-right insertion sort, used both at introsort leaves and as the
/// small-subproblem terminator below [`crate::INTROSORT_SIZE_THRESHOLD`].
pub(crate) fn insertion_sort<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C) {
    for i in 1..keys.len() {
        let mut j = i;
        while j > 0 && cmp.less(&keys[j], &keys[j - 1]) {
            keys.swap(j, j - 1);
            j -= 1;
        }
    }
}

pub(crate) fn insertion_sort_pairs<K, V, C: Comparator<K>>(
    keys: &mut [K],
    values: &mut [V],
    cmp: &mut C,
) {
    for i in 1..keys.len() {
        let mut j = i;
        while j > 0 && cmp.less(&keys[j], &keys[j - 1]) {
            keys.swap(j, j - 1);
            values.swap(j, j - 1);
            j -= 1;
        }
    }
}
