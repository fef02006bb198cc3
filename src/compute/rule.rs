//! Rule 30 transition and output mixing primitives.
//!
//! Rows are slices of cells holding exactly 0 or 1. All neighborhoods wrap
//! circularly, so the automaton has no edges.

/// Rule 30 local update: `left XOR (mid OR right)`.
#[inline]
pub fn rule30(left: u8, mid: u8, right: u8) -> u8 {
    left ^ (mid | right)
}

/// Output mixing for one extracted bit: `center XOR (left AND right)`.
///
/// Reading the center column alone is more strongly correlated; the AND of
/// its neighbors is folded in to reduce that.
#[inline]
pub fn mix_bits(left: u8, center: u8, right: u8) -> u8 {
    (center ^ (left & right)) & 1
}

/// Index of the left neighbor of column `j` in a row of width `n`.
#[inline]
pub fn wrap_left(j: usize, n: usize) -> usize {
    (j + n - 1) % n
}

/// Index of the right neighbor of column `j` in a row of width `n`.
#[inline]
pub fn wrap_right(j: usize, n: usize) -> usize {
    (j + 1) % n
}

/// Compute `next` from `current` under Rule 30 with wraparound.
///
/// Both slices must have the same length.
pub fn step_row(current: &[u8], next: &mut [u8]) {
    debug_assert_eq!(current.len(), next.len());
    let n = current.len();

    for (j, cell) in next.iter_mut().enumerate() {
        let left = current[wrap_left(j, n)];
        let mid = current[j];
        let right = current[wrap_right(j, n)];
        *cell = rule30(left, mid, right);
    }
}

/// Extract one mixed bit around column `mid` of `row`.
#[inline]
pub fn extract_bit(row: &[u8], mid: usize) -> u8 {
    let n = row.len();
    mix_bits(row[wrap_left(mid, n)], row[mid], row[wrap_right(mid, n)])
}
