//! Configuration for seeding operations.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of users to create.
    pub user_count: usize,

    /// Number of posts to create, spread across the users.
    pub post_count: usize,

    /// Fixed RNG seed for reproducible runs; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: 10,
            post_count: 17,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Returns the RNG for this run, seeded when `rng_seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_counts() {
        let config = SeedConfig::default();
        assert_eq!(config.user_count, 10);
        assert_eq!(config.post_count, 17);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SeedConfig {
            rng_seed: Some(99),
            ..Default::default()
        };

        let first: Vec<u32> = config
            .rng()
            .sample_iter(rand::distributions::Standard)
            .take(8)
            .collect();
        let second: Vec<u32> = config
            .rng()
            .sample_iter(rand::distributions::Standard)
            .take(8)
            .collect();

        assert_eq!(first, second);
    }
}
