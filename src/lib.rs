// src/lib.rs
//! Password generation with guaranteed character-class coverage, plus an
//! entropy estimate for scoring strength.

pub mod cli;
pub mod config;
pub mod entropy;
pub mod generator;
pub mod password;

pub use config::{CharClass, GenerationConfig};
pub use entropy::EntropyCalculator;
pub use generator::{ConfigError, Generator, MIN_PASSWORD_LENGTH};
pub use password::Password;
