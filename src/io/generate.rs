//! Random test-case generation

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::state::GameState;

/// Bounds for generated test cases
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest token pool
    pub min_tokens: u32,
    /// Largest token pool
    pub max_tokens: u32,
    /// Largest depth ceiling; 0 always produces unbounded cases
    pub max_depth: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_tokens: 3,
            max_tokens: 12,
            max_depth: 6,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if self.min_tokens == 0 || self.min_tokens > self.max_tokens {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "token range {}..={} is empty or starts at zero",
                    self.min_tokens, self.max_tokens
                ),
            });
        }
        if self.max_depth < 0 {
            return Err(Error::InvalidConfiguration {
                message: format!("max depth {} is negative", self.max_depth),
            });
        }
        Ok(())
    }
}

/// Generate a single case: random pool size, random legal prefix, random depth.
pub fn generate_case<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> Result<GameState> {
    config.validate()?;
    Ok(sample_case(rng, config))
}

/// Draw one case from a config that has already been validated.
fn sample_case<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> GameState {
    let total = rng.random_range(config.min_tokens..=config.max_tokens);
    let depth = rng.random_range(0..=config.max_depth);
    let plies = rng.random_range(0..=total / 2);

    let mut state = GameState::new(total, depth);
    for _ in 0..plies {
        let moves = state.legal_moves();
        let Some(&token) = moves.choose(rng) else {
            break;
        };
        state = state.transition(token);
    }

    state.search_root()
}

/// Generate `count` cases. A seed makes the output reproducible.
pub fn generate_cases(count: usize, seed: Option<u64>, config: &GeneratorConfig) -> Result<Vec<GameState>> {
    config.validate()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let cases: Vec<_> = (0..count).map(|_| sample_case(&mut rng, config)).collect();
    debug!(count, ?seed, "generated test cases");
    Ok(cases)
}
