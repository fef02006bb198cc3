//! Configuration types for the generator and its command line front end.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Seed;

/// Default automaton width.
pub const DEFAULT_SIZE: usize = 64;

/// Smallest width accepted by [`GeneratorConfig::validate`].
///
/// Narrower grids are valid for the engine but the three observed columns
/// would alias.
pub const MIN_SIZE: usize = 3;

/// Largest width accepted by [`GeneratorConfig::validate`].
pub const MAX_SIZE: usize = 4096;

/// Widest value a single `generate` call can produce.
pub const MAX_BITS: i32 = 64;

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_bits() -> i32 {
    32
}

fn default_count() -> usize {
    1
}

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed source.
    #[serde(default)]
    pub seed: Seed,
    /// Automaton width in columns (also the number of stored rows).
    #[serde(default = "default_size")]
    pub size: usize,
    /// Bit width of each generated value (0-64).
    #[serde(default = "default_bits")]
    pub bits: i32,
    /// Number of values to generate.
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: Seed::default(),
            size: DEFAULT_SIZE,
            bits: default_bits(),
            count: default_count(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Apply command line overrides on top of this configuration.
    ///
    /// A seed of 0 selects [`Seed::Clock`]. Negative sizes become 0 so that
    /// [`validate`](Self::validate) rejects them.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        size: Option<i64>,
        bits: Option<i32>,
        count: Option<usize>,
    ) -> Self {
        if let Some(seed) = seed {
            self.seed = Seed::from_cli(seed);
        }
        if let Some(size) = size {
            self.size = usize::try_from(size).unwrap_or(0);
        }
        if let Some(bits) = bits {
            self.bits = bits;
        }
        if let Some(count) = count {
            self.count = count;
        }
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        if !(0..=MAX_BITS).contains(&self.bits) {
            return Err(ConfigError::InvalidBitWidth { bits: self.bits });
        }
        if self.count == 0 {
            return Err(ConfigError::InvalidCount);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Automaton size {size} is outside the supported range {min}..={max}",
        min = MIN_SIZE,
        max = MAX_SIZE
    )]
    InvalidSize { size: usize },
    #[error("Bit width {bits} is outside the supported range 0..={max}", max = MAX_BITS)]
    InvalidBitWidth { bits: i32 },
    #[error("Value count must be non-zero")]
    InvalidCount,
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.size, 64);
        assert_eq!(config.bits, 32);
    }

    #[test]
    fn test_size_bounds() {
        let mut config = GeneratorConfig::default();

        for size in [0, 1, 2, MAX_SIZE + 1] {
            config.size = size;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSize { size: s }) if s == size
            ));
        }

        for size in [MIN_SIZE, 128, MAX_SIZE] {
            config.size = size;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_bit_width_bounds() {
        let mut config = GeneratorConfig::default();

        config.bits = 65;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBitWidth { bits: 65 })
        ));
        config.bits = -1;
        assert!(config.validate().is_err());
        config.bits = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = GeneratorConfig {
            count: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCount)));
    }

    #[test]
    fn test_overrides_replace_fields() {
        let config =
            GeneratorConfig::default().with_overrides(Some(777), Some(128), Some(16), Some(3));

        assert_eq!(config.seed, Seed::Fixed { value: 777 });
        assert_eq!(config.size, 128);
        assert_eq!(config.bits, 16);
        assert_eq!(config.count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_keep_unset_fields() {
        let base = GeneratorConfig {
            seed: Seed::Fixed { value: 5 },
            size: 32,
            ..GeneratorConfig::default()
        };
        assert_eq!(base.clone().with_overrides(None, None, None, None), base);
    }

    #[test]
    fn test_override_seed_zero_means_clock() {
        let config = GeneratorConfig {
            seed: Seed::Fixed { value: 5 },
            ..GeneratorConfig::default()
        }
        .with_overrides(Some(0), None, None, None);
        assert_eq!(config.seed, Seed::Clock);
    }

    #[test]
    fn test_override_negative_size_rejected() {
        let config = GeneratorConfig::default().with_overrides(None, Some(-5), None, None);

        assert_eq!(config.size, 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSize { size: 0 })
        ));

        let too_wide = GeneratorConfig::default().with_overrides(None, Some(5000), None, None);
        assert!(matches!(
            too_wide.validate(),
            Err(ConfigError::InvalidSize { size: 5000 })
        ));
    }

    #[test]
    fn test_json_defaults() {
        let config =
            GeneratorConfig::from_json_str(r#"{"seed": {"type": "Fixed", "value": 777}}"#)
                .unwrap();

        assert_eq!(config.seed, Seed::Fixed { value: 777 });
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.bits, 32);
        assert_eq!(config.count, 1);
    }

    #[test]
    fn test_json_parse_error() {
        let err = GeneratorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rule30.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"size": 128, "bits": 16, "count": 4}}"#).unwrap();

        let config = GeneratorConfig::from_json_file(&path).unwrap();
        assert_eq!(config.size, 128);
        assert_eq!(config.bits, 16);
        assert_eq!(config.count, 4);
        assert_eq!(config.seed, Seed::Clock);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
