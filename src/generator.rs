// src/generator.rs
use rand::seq::SliceRandom;
use rand_core::OsRng;
use thiserror::Error;

use crate::config::GenerationConfig;
use crate::password::Password;

/// Smallest accepted password length. One mandatory character per enabled
/// class (at most four) must still leave room for filler.
pub const MIN_PASSWORD_LENGTH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Password must be at least {0} characters long.")]
    LengthTooShort(usize),

    #[error("Password generation failed: No characters were provided.")]
    EmptyAlphabet,
}

pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Generator
    }

    /// Generate a password satisfying the configuration.
    ///
    /// Coverage of every enabled class is guaranteed by construction: one
    /// character is drawn from each enabled set up front, the rest from the
    /// combined alphabet, and the whole sequence is shuffled so mandatory
    /// characters are not anchored to fixed positions. Bounded runtime, no
    /// rejection sampling.
    pub fn generate(&self, config: &GenerationConfig) -> Result<Password, ConfigError> {
        // Validate before consuming any randomness
        if config.length < MIN_PASSWORD_LENGTH {
            return Err(ConfigError::LengthTooShort(MIN_PASSWORD_LENGTH));
        }

        let enabled_sets: Vec<Vec<char>> = config
            .enabled_classes()
            .into_iter()
            .map(|class| config.charset(class).chars().collect())
            .collect();

        if enabled_sets.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        // Duplicates across class sets are kept on purpose: they weight the
        // filler distribution by class size.
        let alphabet: Vec<char> = enabled_sets.iter().flatten().copied().collect();

        let mut rng = OsRng;
        let mut characters: Vec<char> = Vec::with_capacity(config.length);

        // One mandatory character per enabled class, canonical order
        for set in &enabled_sets {
            characters.push(*set.choose(&mut rng).unwrap());
        }

        // Filler from the combined alphabet up to the requested length
        for _ in 0..config.length - enabled_sets.len() {
            characters.push(*alphabet.choose(&mut rng).unwrap());
        }

        characters.shuffle(&mut rng);

        log::debug!(
            "generated {}-character password from a {}-character alphabet",
            config.length,
            alphabet.len()
        );

        Ok(Password::new(characters.into_iter().collect()))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
