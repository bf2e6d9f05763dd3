//! Median-of-three pivot selection and the hole-threaded Hoare-style partition.
//!
//! The hole technique lifts the pivot out of the sequence into a local, leaving a single
//! logical gap that is relocated (never swapped through) as the two scan cursors converge.
//! Each relocation is one element copy instead of the three moves a textbook swap costs, which
//! is the whole point of preferring this over a classical swap-based Hoare partition.

use std::mem::ManuallyDrop;
use std::ptr;

use crate::ordering::Comparator;

/// Returns the index (one of `ia`, `ib`, `ic`) holding the median of `keys[ia]`, `keys[ib]`,
/// `keys[ic]` under `cmp`.
///
/// Ties are broken deterministically: when `keys[ic] <= keys[ia]` and `keys[ib] <= keys[ic]`,
/// `ic` is the median (the usual case of a middle element landing at the far end); the
/// remaining branches fall out symmetrically. Determinism here is load-bearing: the partition
/// permutation the test suite checks against depends on this exact tie-break table, not just
/// "a plausible median".
pub(crate) fn median3_index<K, C: Comparator<K>>(
    keys: &[K],
    ia: usize,
    ib: usize,
    ic: usize,
    cmp: &mut C,
) -> usize {
    let a_lt_c = cmp.less(&keys[ia], &keys[ic]);
    if !a_lt_c {
        // keys[ic] <= keys[ia]
        if !cmp.less(&keys[ic], &keys[ib]) {
            // keys[ib] <= keys[ic] <= keys[ia]: ic is the median.
            ic
        } else {
            // keys[ic] is the minimum of the three: median is min(a, b).
            if cmp.less(&keys[ia], &keys[ib]) { ia } else { ib }
        }
    } else {
        // keys[ia] < keys[ic]
        if !cmp.less(&keys[ib], &keys[ic]) {
            // keys[ia] < keys[ic] <= keys[ib]: ic is the median.
            ic
        } else {
            // keys[ic] is the maximum of the three: median is max(a, b).
            if cmp.less(&keys[ia], &keys[ib]) { ib } else { ia }
        }
    }
}

/// A single floating gap in a key slice, holding the displaced element until it is written
/// back somewhere.
///
/// Dropping the hole writes its element into whatever slot `pos` currently names. This keeps
/// the slice fully initialized even if a comparator panics mid-partition: unwinding through a
/// live `Hole` still leaves every original element in some valid slot.
struct Hole<'a, K> {
    data: &'a mut [K],
    elt: ManuallyDrop<K>,
    pos: usize,
}

impl<'a, K> Hole<'a, K> {
    /// Lifts `data[pos]` out, leaving a gap at `pos`.
    fn new(data: &'a mut [K], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: `pos < data.len()` is checked above. The read value is held in `elt` via
        // `ManuallyDrop` so it is never dropped in place; the slot at `pos` is logically
        // uninitialized until something is written back into it (by `move_to` or `Drop`).
        let elt = unsafe { ptr::read(&data[pos]) };
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    fn element(&self) -> &K {
        &self.elt
    }

    #[inline]
    fn get(&self, index: usize) -> &K {
        debug_assert_ne!(index, self.pos);
        &self.data[index]
    }

    /// Copies `data[index]` into the gap, then relocates the gap to `index`.
    fn move_to(&mut self, index: usize) {
        debug_assert_ne!(index, self.pos);
        let len = self.data.len();
        debug_assert!(index < len && self.pos < len);
        let ptr = self.data.as_mut_ptr();
        // SAFETY: `index` and `self.pos` are both valid, distinct indices into `data`
        // (checked above), so the two pointers do not overlap.
        unsafe {
            let src = ptr.add(index);
            let dst = ptr.add(self.pos);
            ptr::copy_nonoverlapping(src, dst, 1);
        }
        self.pos = index;
    }
}

impl<K> Drop for Hole<'_, K> {
    fn drop(&mut self) {
        let pos = self.pos;
        // SAFETY: `pos` is always a valid index into `data`, and the slot is the one logical
        // gap this hole owns, so writing `elt` back into it restores a fully initialized
        // slice exactly once.
        unsafe {
            ptr::copy_nonoverlapping(&*self.elt, self.data.as_mut_ptr().add(pos), 1);
        }
    }
}

/// Partitions `keys` around a median-of-three pivot using hole-threading.
///
/// Precondition: `keys.len() >= 2` (callers only invoke this above
/// [`crate::INTROSORT_SIZE_THRESHOLD`], which is itself `>= 2`).
pub(crate) fn partition<K, C: Comparator<K>>(keys: &mut [K], cmp: &mut C) -> usize {
    let len = keys.len();
    let last = len - 1;
    let mid = last / 2;
    let pivot_idx = median3_index(keys, 0, mid, last, cmp);

    let mut hole = Hole::new(keys, pivot_idx);
    if hole.pos() != last {
        hole.move_to(last);
    }

    let mut lo = 0usize;
    let mut hi = last;

    loop {
        while lo < hi && !cmp.less(hole.element(), hole.get(lo)) {
            lo += 1;
        }
        if lo == hi {
            break;
        }
        hole.move_to(lo);
        hi -= 1;

        while hi > lo && !cmp.less(hole.get(hi), hole.element()) {
            hi -= 1;
        }
        if hi == lo {
            break;
        }
        hole.move_to(hi);
        lo += 1;
    }

    debug_assert_eq!(hole.pos(), lo);
    drop(hole);
    lo
}

/// A floating gap spanning a parallel key slot and value slot, moved in lockstep.
struct PairHole<'a, K, V> {
    keys: &'a mut [K],
    values: &'a mut [V],
    key: ManuallyDrop<K>,
    value: ManuallyDrop<V>,
    pos: usize,
}

impl<'a, K, V> PairHole<'a, K, V> {
    fn new(keys: &'a mut [K], values: &'a mut [V], pos: usize) -> Self {
        debug_assert!(pos < keys.len());
        debug_assert_eq!(keys.len(), values.len());
        // SAFETY: `pos` is in bounds for both slices (checked above, lengths match).
        let (key, value) = unsafe { (ptr::read(&keys[pos]), ptr::read(&values[pos])) };
        PairHole {
            keys,
            values,
            key: ManuallyDrop::new(key),
            value: ManuallyDrop::new(value),
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    fn get_key(&self, index: usize) -> &K {
        debug_assert_ne!(index, self.pos);
        &self.keys[index]
    }

    fn move_to(&mut self, index: usize) {
        debug_assert_ne!(index, self.pos);
        let len = self.keys.len();
        debug_assert!(index < len && self.pos < len);
        let key_ptr = self.keys.as_mut_ptr();
        let value_ptr = self.values.as_mut_ptr();
        // SAFETY: `index` and `self.pos` are both valid, distinct indices shared by both
        // slices (same length, checked at construction).
        unsafe {
            ptr::copy_nonoverlapping(key_ptr.add(index), key_ptr.add(self.pos), 1);
            ptr::copy_nonoverlapping(value_ptr.add(index), value_ptr.add(self.pos), 1);
        }
        self.pos = index;
    }
}

impl<K, V> Drop for PairHole<'_, K, V> {
    fn drop(&mut self) {
        let pos = self.pos;
        // SAFETY: see `Hole::drop`; the same argument applies to both parallel slices.
        unsafe {
            ptr::copy_nonoverlapping(&*self.key, self.keys.as_mut_ptr().add(pos), 1);
            ptr::copy_nonoverlapping(&*self.value, self.values.as_mut_ptr().add(pos), 1);
        }
    }
}

/// Keys+values variant of [`partition`]: the pivot's paired value rides along, and every key
/// relocation carries the corresponding value relocation in the same step.
pub(crate) fn partition_pairs<K, V, C: Comparator<K>>(
    keys: &mut [K],
    values: &mut [V],
    cmp: &mut C,
) -> usize {
    let len = keys.len();
    let last = len - 1;
    let mid = last / 2;
    let pivot_idx = median3_index(keys, 0, mid, last, cmp);

    let mut hole = PairHole::new(keys, values, pivot_idx);
    if hole.pos() != last {
        hole.move_to(last);
    }

    let mut lo = 0usize;
    let mut hi = last;

    loop {
        while lo < hi && !cmp.less(hole.key(), hole.get_key(lo)) {
            lo += 1;
        }
        if lo == hi {
            break;
        }
        hole.move_to(lo);
        hi -= 1;

        while hi > lo && !cmp.less(hole.get_key(hi), hole.key()) {
            hi -= 1;
        }
        if hi == lo {
            break;
        }
        hole.move_to(hi);
        lo += 1;
    }

    debug_assert_eq!(hole.pos(), lo);
    drop(hole);
    lo
}
