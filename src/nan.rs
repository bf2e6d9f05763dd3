//! NaN pre-pass: segregates NaN floating-point keys ahead of the main sort so everything
//! downstream can assume a strict total order.

/// Floating-point key types the pre-pass and intrinsic float sort understand.
pub trait FloatKey: Copy + PartialOrd {
    /// `true` iff this value is NaN.
    fn is_nan(&self) -> bool;
}

impl FloatKey for f32 {
    #[inline(always)]
    fn is_nan(&self) -> bool {
        f32::is_nan(*self)
    }
}

impl FloatKey for f64 {
    #[inline(always)]
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }
}

/// Partitions `keys` so all NaNs occupy a prefix `[0, m)`, and returns `m`.
///
/// Relative order among non-NaN elements is not preserved; the sort that follows this pass is
/// unstable anyway.
pub(crate) fn partition_nans<K: FloatKey>(keys: &mut [K]) -> usize {
    let mut write = 0;
    for read in 0..keys.len() {
        if keys[read].is_nan() {
            keys.swap(write, read);
            write += 1;
        }
    }
    write
}

/// Keys+values variant of [`partition_nans`]: every key swap carries its paired value.
pub(crate) fn partition_nans_pairs<K: FloatKey, V>(keys: &mut [K], values: &mut [V]) -> usize {
    let mut write = 0;
    for read in 0..keys.len() {
        if keys[read].is_nan() {
            keys.swap(write, read);
            values.swap(write, read);
            write += 1;
        }
    }
    write
}
