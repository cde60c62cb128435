// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::charset::{self, Charset};
use super::{GeneratorError, Result};
use crate::models::GenerationPolicy;

/// Owns the random source for one run. Draws mutate the stream in place,
/// so an instance must not be shared between threads without a lock.
pub struct PasswordGenerator {
    pub(super) rng: ChaCha20Rng,
}

impl PasswordGenerator {
    /// Generator seeded from the operating system's entropy source.
    pub fn new() -> Self {
        PasswordGenerator {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Deterministic generator; the same seed yields the same output.
    pub fn with_seed(seed: u64) -> Self {
        PasswordGenerator {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn generate_password(&mut self, policy: &GenerationPolicy) -> Result<String> {
        let Charset { alphabet, required } = charset::build_charset(policy, &mut self.rng)?;

        if required.len() > policy.length {
            return Err(GeneratorError::InvalidConfig(format!(
                "{} required character types do not fit in a password of length {}",
                required.len(),
                policy.length
            )));
        }

        let dist = Uniform::from(0..alphabet.len());
        let mut chars = required;
        let remaining = policy.length - chars.len();
        chars.extend((0..remaining).map(|_| alphabet[dist.sample(&mut self.rng)]));

        shuffle(&mut chars, &mut self.rng);

        Ok(chars.into_iter().collect())
    }

    /// Generate `count` passwords; the first failure aborts the whole batch.
    pub fn generate_passwords(&mut self, count: usize, policy: &GenerationPolicy) -> Result<Vec<String>> {
        check_count(count)?;
        log::debug!("Generating {} password(s) of length {}", count, policy.length);

        (0..count).map(|_| self.generate_password(policy)).collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn check_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(GeneratorError::InvalidConfig(
            "password count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

// Fisher-Yates, walking down from the last index
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
