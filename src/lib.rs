//! Rule 30 - Pseudo-random bits from an elementary cellular automaton.
//!
//! This crate evolves a one-dimensional binary cellular automaton under
//! Wolfram's Rule 30 with circular boundaries and extracts bits from its
//! center column. Output is deterministic for a given seed and width. It is
//! **not** cryptographically secure.
//!
//! # Architecture
//!
//! - `schema`: Configuration types and the seed-to-first-row derivation
//! - `compute`: Automaton engine, bit extraction, `rand` integration, statistics
//! - `render`: Terminal driver boundary and animated visualization
//!
//! # Example
//!
//! ```rust
//! use rule30_prng::compute::AutomatonState;
//!
//! let mut state = AutomatonState::initialize(777, 64).unwrap();
//! let value = state.generate(32);
//! assert!(value < 1 << 32);
//!
//! // Same seed and width, same sequence.
//! let mut replay = AutomatonState::initialize(777, 64).unwrap();
//! assert_eq!(replay.generate(32), value);
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{AutomatonError, AutomatonState, Rule30Rng, SampleStats};
pub use schema::{ConfigError, GeneratorConfig, Seed};
