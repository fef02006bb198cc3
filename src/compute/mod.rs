//! Compute module - Rule 30 automaton engine and bit extraction.

mod automaton;
mod rng;
mod rule;

pub mod stats;

pub use automaton::*;
pub use rng::*;
pub use rule::*;
pub use stats::SampleStats;
