//! `rand` integration for the Rule 30 generator.

use rand::{RngCore, SeedableRng};

use crate::schema::DEFAULT_SIZE;

use super::{AutomatonError, AutomatonState};

/// Rule 30 generator usable anywhere a [`rand::RngCore`] is expected.
///
/// Not cryptographically secure.
#[derive(Debug, Clone)]
pub struct Rule30Rng {
    state: AutomatonState,
}

impl Rule30Rng {
    /// Create a generator with an explicit automaton width.
    pub fn new(seed: u64, size: usize) -> Result<Self, AutomatonError> {
        Ok(Self {
            state: AutomatonState::initialize(seed, size)?,
        })
    }

    /// Wrap an existing automaton.
    pub fn from_state(state: AutomatonState) -> Self {
        Self { state }
    }

    /// Underlying automaton.
    pub fn state(&self) -> &AutomatonState {
        &self.state
    }

    /// Unwrap into the underlying automaton.
    pub fn into_state(self) -> AutomatonState {
        self.state
    }

    /// Generate a value of `nbits` bits (see [`AutomatonState::generate`]).
    #[inline]
    pub fn generate(&mut self, nbits: i32) -> u64 {
        self.state.generate(nbits)
    }
}

impl RngCore for Rule30Rng {
    fn next_u32(&mut self) -> u32 {
        self.state.generate(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state.generate(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rule30Rng {
    type Seed = [u8; 8];

    /// Little-endian seed bytes with the default 64-column automaton.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed_from_u64(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        match Self::new(state, DEFAULT_SIZE) {
            Ok(rng) => rng,
            Err(err) => panic!("Rule 30 generator initialization failed: {err}"),
        }
    }
}
