use crate::{Error, Result, MIN_SIZE};

/// How the starting grid is populated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Every cell is alive with probability 1/2.
    #[default]
    Random,
    /// A single glider on an otherwise empty grid.
    Glider,
}

/// Parameters of one simulation run.
///
/// Each run owns its own copy; nothing here is process-wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    size: usize,
    seed_mode: SeedMode,
    seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            seed_mode: SeedMode::Random,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Validates `size` against the minimal torus side.
    pub fn new(size: usize, seed_mode: SeedMode) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(Error::InvalidSize { size });
        }
        Ok(Self {
            size,
            seed_mode,
            seed: None,
        })
    }

    /// Fixes the random seed (only relevant for [`SeedMode::Random`]).
    ///
    /// `None` means the generator is seeded from OS entropy.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_sizes() {
        for size in 0..MIN_SIZE {
            assert_eq!(
                SimulationConfig::new(size, SeedMode::Glider),
                Err(Error::InvalidSize { size })
            );
        }
        assert!(SimulationConfig::new(MIN_SIZE, SeedMode::Glider).is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.size(), 100);
        assert_eq!(config.seed_mode(), SeedMode::Random);
        assert_eq!(config.seed(), None);

        let config = config.with_seed(Some(42));
        assert_eq!(config.seed(), Some(42));
    }
}
