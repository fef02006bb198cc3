//! Automaton engine - Rule 30 grid state, stepping and bit extraction.
//!
//! The grid is a single flat buffer of `size * size` cells addressed by
//! `row * size + column`. Rows are overwritten circularly as the automaton
//! advances, so the buffer always holds the most recent `size` generations.

use std::fmt;

use crate::schema::{fill_initial_row, normalize_seed};

use super::{extract_bit, rule30, step_row};

/// Warm-up generations for grids up to 128 columns wide.
pub const WARMUP_ROUNDS_SMALL: usize = 30;

/// Warm-up generations for grids wider than 128 columns.
pub const WARMUP_ROUNDS_LARGE: usize = 50;

/// Number of discarded generations run by [`AutomatonState::initialize`].
#[inline]
pub fn warmup_rounds(size: usize) -> usize {
    if size > 128 {
        WARMUP_ROUNDS_LARGE
    } else {
        WARMUP_ROUNDS_SMALL
    }
}

/// Engine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    #[error("Automaton size must be positive (got {size})")]
    InvalidSize { size: usize },
    #[error("Failed to allocate automaton grid of {cells} cells")]
    Allocation { cells: usize },
}

/// Rule 30 automaton state.
///
/// Owned exclusively by its creator. `step` and `generate` mutate the grid,
/// so concurrent callers each need their own state.
#[derive(Clone)]
pub struct AutomatonState {
    /// Flat `size * size` grid of 0/1 cells.
    grid: Vec<u8>,
    /// Grid width (columns) and number of stored rows.
    size: usize,
    /// Row most recently computed.
    current_row: usize,
    /// Seed after degenerate-value normalization.
    seed: u64,
}

impl AutomatonState {
    /// Create a new automaton from `seed` with `size` columns.
    ///
    /// Derives the first row from the seed, then runs [`warmup_rounds`]
    /// unobserved generations. Seeds 0 and `u64::MAX` are replaced by
    /// [`DEFAULT_SEED`](crate::schema::DEFAULT_SEED).
    pub fn initialize(seed: u64, size: usize) -> Result<Self, AutomatonError> {
        if size == 0 {
            return Err(AutomatonError::InvalidSize { size });
        }

        let cells = size.checked_mul(size).ok_or(AutomatonError::Allocation {
            cells: usize::MAX,
        })?;
        let mut grid = Vec::new();
        grid.try_reserve_exact(cells)
            .map_err(|_| AutomatonError::Allocation { cells })?;
        grid.resize(cells, 0u8);

        let normalized = normalize_seed(seed);
        if normalized != seed {
            log::debug!("Degenerate seed {:#x} replaced with {:#x}", seed, normalized);
        }

        if fill_initial_row(normalized, &mut grid[..size]) {
            log::debug!("Initial row below entropy floor; flipped every 7th cell");
        }

        let mut state = Self {
            grid,
            size,
            current_row: 0,
            seed: normalized,
        };

        let rounds = warmup_rounds(size);
        log::debug!("Warming up {}-column automaton for {} rounds", size, rounds);
        state.run(rounds as u64);

        Ok(state)
    }

    /// Advance one generation.
    ///
    /// Overwrites row `(current_row + 1) % size` from the current row and
    /// makes it the new current row.
    pub fn step(&mut self) {
        let n = self.size;
        let r = self.current_row;
        let next = (r + 1) % n;

        if r == next {
            // Single column: the row is its own successor.
            let c = self.grid[0];
            self.grid[0] = rule30(c, c, c);
        } else {
            let (current, target) = self.split_rows(r, next);
            step_row(current, target);
        }

        self.current_row = next;
    }

    /// Advance `steps` generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Generate an unsigned value from `nbits` successive generations.
    ///
    /// Widths above 64 are capped at 64. Zero or negative widths return 0
    /// without advancing the automaton. Each bit is taken from the freshly
    /// computed row as `center XOR (left AND right)` around column
    /// `size / 2`, most significant bit first.
    pub fn generate(&mut self, nbits: i32) -> u64 {
        if nbits <= 0 {
            return 0;
        }
        let nbits = nbits.min(64);
        let mid = self.size / 2;

        let mut out = 0u64;
        for _ in 0..nbits {
            self.step();
            let bit = extract_bit(self.current(), mid);
            out = (out << 1) | u64::from(bit);
        }
        out
    }

    /// Release the grid buffer. The state cannot be used afterwards.
    pub fn release(self) {
        log::trace!(
            "Releasing {}-column automaton at row {}",
            self.size,
            self.current_row
        );
        drop(self);
    }

    /// Grid width in columns.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the row most recently computed.
    #[inline]
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Seed in effect after normalization.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Row at `index` (must be `< size`).
    #[inline]
    pub fn row(&self, index: usize) -> &[u8] {
        let start = index * self.size;
        &self.grid[start..start + self.size]
    }

    /// Row most recently computed.
    #[inline]
    pub fn current(&self) -> &[u8] {
        self.row(self.current_row)
    }

    /// Cell value (0 or 1) at (`row`, `column`).
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> u8 {
        self.grid[row * self.size + column]
    }

    /// Read-only view of the whole flat grid.
    #[inline]
    pub fn grid(&self) -> &[u8] {
        &self.grid
    }

    /// Borrow row `src` immutably and row `dst` mutably. Requires `src != dst`.
    fn split_rows(&mut self, src: usize, dst: usize) -> (&[u8], &mut [u8]) {
        let n = self.size;
        if src < dst {
            let (head, tail) = self.grid.split_at_mut(dst * n);
            (&head[src * n..src * n + n], &mut tail[..n])
        } else {
            let (head, tail) = self.grid.split_at_mut(src * n);
            (&tail[..n], &mut head[dst * n..dst * n + n])
        }
    }
}

impl fmt::Debug for AutomatonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutomatonState")
            .field("size", &self.size)
            .field("current_row", &self.current_row)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
