//! Bit-pattern helpers for the packed grid representation.

/// Repeat a bit pattern of the given width `count` times.
///
/// The result occupies the low `width * count` bits; `count == 0` yields 0.
pub const fn repeat(val: u64, width: usize, count: usize) -> u64 {
    let mut ret = 0;
    let mut i = 0;
    while i < count {
        ret <<= width;
        ret |= val;
        i += 1;
    }
    ret
}
