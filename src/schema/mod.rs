//! Schema module - Configuration and seeding types for the generator.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
