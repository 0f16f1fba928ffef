// src/password.rs
use std::fmt;

use crate::entropy::EntropyCalculator;

/// Immutable wrapper around a generated password string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Password(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Entropy estimate in bits. Recomputed on demand; the value is
    /// immutable so caching would buy nothing.
    pub fn entropy(&self) -> f64 {
        EntropyCalculator::calculate(&self.0)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
