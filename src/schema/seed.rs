//! Seed types and the seed-to-first-row derivation.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Substitute for seeds that produce insufficiently chaotic first rows.
pub const DEFAULT_SEED: u64 = 0x0123_4567_89AB_CDEF;

/// Multiplier used to derive cells beyond the 64th column.
pub const HASH_MULTIPLIER: u64 = 6364136223846793005;

/// Where the 64-bit seed comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Seed {
    /// Explicit seed value.
    Fixed {
        /// Raw seed. 0 and `u64::MAX` are normalized at initialization.
        value: u64,
    },
    /// Derived from the wall clock when resolved.
    #[default]
    Clock,
}

impl Seed {
    /// Interpret a command line seed, where 0 asks for a clock seed.
    pub fn from_cli(value: u64) -> Self {
        if value == 0 {
            Seed::Clock
        } else {
            Seed::Fixed { value }
        }
    }

    /// Produce the concrete seed value.
    pub fn resolve(&self) -> u64 {
        match *self {
            Seed::Fixed { value } => value,
            Seed::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(DEFAULT_SEED),
        }
    }
}

/// Replace the two degenerate seeds (all zeros, all ones) with [`DEFAULT_SEED`].
#[inline]
pub fn normalize_seed(seed: u64) -> u64 {
    if seed == 0 || seed == u64::MAX {
        DEFAULT_SEED
    } else {
        seed
    }
}

/// Write the first automaton row for `seed` into `row`.
///
/// Columns below 64 take bit `i` of the seed directly. Wider grids derive
/// each further column from bit 32 of `seed * HASH_MULTIPLIER + i`
/// (wrapping). If fewer than a fifth of the cells end up set, every 7th
/// cell is flipped.
///
/// Returns `true` when that entropy floor was applied.
pub fn fill_initial_row(seed: u64, row: &mut [u8]) -> bool {
    for (i, cell) in row.iter_mut().enumerate() {
        *cell = if i < 64 {
            ((seed >> i) & 1) as u8
        } else {
            let hash = seed.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i as u64);
            ((hash >> 32) & 1) as u8
        };
    }

    let set_bits = row.iter().filter(|&&c| c != 0).count();
    if set_bits < row.len() / 5 {
        for cell in row.iter_mut().step_by(7) {
            *cell ^= 1;
        }
        true
    } else {
        false
    }
}

/// Allocate and return the first row for `seed` with `width` columns.
pub fn initial_row(seed: u64, width: usize) -> Vec<u8> {
    let mut row = vec![0u8; width];
    fill_initial_row(seed, &mut row);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_seeds_normalized() {
        assert_eq!(normalize_seed(0), DEFAULT_SEED);
        assert_eq!(normalize_seed(u64::MAX), DEFAULT_SEED);
        assert_eq!(normalize_seed(777), 777);
    }

    #[test]
    fn test_low_columns_copy_seed_bits() {
        let seed = 0b1011u64;
        let row = initial_row(seed | (0xFFFF << 48), 64);

        assert_eq!(&row[..5], &[1, 1, 0, 1, 0]);
        assert!(row[48..].iter().all(|&c| c == 1));
    }

    #[test]
    fn test_wide_columns_use_hash() {
        let seed = 0xDEAD_BEEF_CAFE_F00Du64;
        let row = initial_row(seed, 96);

        for (i, &cell) in row.iter().enumerate().skip(64) {
            let hash = seed.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i as u64);
            assert_eq!(cell, ((hash >> 32) & 1) as u8, "column {}", i);
        }
    }

    #[test]
    fn test_entropy_floor_flips_every_seventh_cell() {
        // One set bit in 64 columns is below the 20% floor.
        let mut row = vec![0u8; 64];
        let applied = fill_initial_row(1 << 3, &mut row);

        assert!(applied);
        for (i, &cell) in row.iter().enumerate() {
            let expected = u8::from(i == 3) ^ u8::from(i % 7 == 0);
            assert_eq!(cell, expected, "column {}", i);
        }
    }

    #[test]
    fn test_entropy_floor_skipped_for_dense_rows() {
        let mut row = vec![0u8; 64];
        assert!(!fill_initial_row(DEFAULT_SEED, &mut row));
        assert_eq!(row.iter().filter(|&&c| c == 1).count(), 32);
    }

    #[test]
    fn test_cells_are_binary() {
        for seed in [1u64, 42, 777, u64::MAX - 1] {
            assert!(initial_row(seed, 200).iter().all(|&c| c <= 1));
        }
    }

    #[test]
    fn test_cli_zero_means_clock() {
        assert_eq!(Seed::from_cli(0), Seed::Clock);
        assert_eq!(Seed::from_cli(9), Seed::Fixed { value: 9 });
        assert_eq!(Seed::Fixed { value: 9 }.resolve(), 9);
    }

    #[test]
    fn test_seed_json_roundtrip() {
        let json = serde_json::to_string(&Seed::Fixed { value: 777 }).unwrap();
        assert_eq!(json, r#"{"type":"Fixed","value":777}"#);

        let clock: Seed = serde_json::from_str(r#"{"type":"Clock"}"#).unwrap();
        assert_eq!(clock, Seed::Clock);
    }
}
