//! The introsort driver: a loop-with-tail-recursion dispatcher choosing among insertion sort,
//! the size-2/3 networks, heapsort, and median-of-three hole partitioning based on partition
//! size and the remaining recursion-depth budget.

use crate::heap;
use crate::ordering::Comparator;
use crate::partition;
use crate::small;

/// Partition-size cutoff below which insertion sort (or a size-2/3 network) runs instead of
/// partitioning further. Any value in `[8, 32]` is workable; `16` is the conventional choice.
pub const INTROSORT_SIZE_THRESHOLD: usize = 16;

/// Sorts `keys` in place using introsort.
pub(crate) fn introsort<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C) {
    if keys.len() < 2 {
        return;
    }
    let depth_limit = initial_depth_limit(keys.len());
    introsort_loop(keys, cmp, depth_limit);
}

/// Keys+values variant of [`introsort`].
pub(crate) fn introsort_pairs<K, V, C: Comparator<K>>(keys: &mut [K], values: &mut [V], cmp: &mut C) {
    if keys.len() < 2 {
        return;
    }
    let depth_limit = initial_depth_limit(keys.len());
    introsort_loop_pairs(keys, values, cmp, depth_limit);
}

/// `2 * (floor(log2(n)) + 1)`, the depth at which introsort gives up on partitioning further
/// and falls back to heapsort, bounding the worst case to `O(n log n)`.
fn initial_depth_limit(n: usize) -> usize {
    debug_assert!(n >= 1);
    2 * (n.ilog2() as usize + 1)
}

fn small_sort<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C) {
    match keys.len() {
        0 | 1 => {}
        2 => small::sort2(keys, cmp),
        3 => small::sort3(keys, cmp),
        _ => small::insertion_sort(keys, cmp),
    }
}

fn small_sort_pairs<K, V, C: Comparator<K>>(keys: &mut [K], values: &mut [V], cmp: &mut C) {
    match keys.len() {
        0 | 1 => {}
        2 => small::sort2_pairs(keys, values, cmp),
        3 => small::sort3_pairs(keys, values, cmp),
        _ => small::insertion_sort_pairs(keys, values, cmp),
    }
}

fn introsort_loop<K, C: Comparator<K>>(mut keys: &mut [K], cmp: &mut C, mut depth_limit: usize) {
    loop {
        let len = keys.len();
        if len <= 1 {
            return;
        }
        if len <= INTROSORT_SIZE_THRESHOLD {
            small_sort(keys, cmp);
            return;
        }
        if depth_limit == 0 {
            heap::heapsort(keys, cmp);
            return;
        }
        depth_limit -= 1;

        let p = partition::partition(keys, cmp);
        let (left, rest) = keys.split_at_mut(p);
        let right = &mut rest[1..];
        introsort_loop(right, cmp, depth_limit);
        keys = left;
    }
}

fn introsort_loop_pairs<K, V, C: Comparator<K>>(
    mut keys: &mut [K],
    mut values: &mut [V],
    cmp: &mut C,
    mut depth_limit: usize,
) {
    loop {
        let len = keys.len();
        if len <= 1 {
            return;
        }
        if len <= INTROSORT_SIZE_THRESHOLD {
            small_sort_pairs(keys, values, cmp);
            return;
        }
        if depth_limit == 0 {
            heap::heapsort_pairs(keys, values, cmp);
            return;
        }
        depth_limit -= 1;

        let p = partition::partition_pairs(keys, values, cmp);
        let (left_keys, rest_keys) = keys.split_at_mut(p);
        let (left_values, rest_values) = values.split_at_mut(p);
        let right_keys = &mut rest_keys[1..];
        let right_values = &mut rest_values[1..];
        introsort_loop_pairs(right_keys, right_values, cmp, depth_limit);
        keys = left_keys;
        values = left_values;
    }
}

#[cfg(test)]
pub(crate) fn introsort_with_depth_limit<K, C: Comparator<K>>(
    keys: &mut [K],
    cmp: &mut C,
    depth_limit: usize,
) {
    introsort_loop(keys, cmp, depth_limit);
}
