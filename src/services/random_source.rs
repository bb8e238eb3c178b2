use ring::rand::{SecureRandom, SystemRandom};

use crate::types::errors::GeneratorError;

/// Size of the sampling space each draw is taken from.
const SAMPLE_SPACE: u64 = 1 << 32;

/// Trait defining the randomness port used by the password generator.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `[0, upper)`.
    fn index_below(&self, upper: usize) -> Result<usize, GeneratorError>;
}

/// Cryptographically secure random source backed by the operating system,
/// via the `ring` crate.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    /// Creates a new SystemRandomSource instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    fn next_u32(&self) -> Result<u32, GeneratorError> {
        let mut bytes = [0u8; 4];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| GeneratorError::RandomSource("Failed to read system entropy".to_string()))?;
        Ok(u32::from_le_bytes(bytes))
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    /// Draws above the largest multiple of `upper` are rejected and redrawn.
    fn index_below(&self, upper: usize) -> Result<usize, GeneratorError> {
        if upper == 0 {
            return Err(GeneratorError::RandomSource(
                "Cannot sample from an empty range".to_string(),
            ));
        }
        let upper = upper as u64;
        if upper > SAMPLE_SPACE {
            return Err(GeneratorError::RandomSource(format!(
                "Range too large: {}",
                upper
            )));
        }

        let limit = SAMPLE_SPACE - SAMPLE_SPACE % upper;
        loop {
            let value = u64::from(self.next_u32()?);
            if value < limit {
                return Ok((value % upper) as usize);
            }
        }
    }
}
