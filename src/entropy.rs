// src/entropy.rs

// Fixed pool sizes per detected class. The special pool is assumed to be the
// 32 standard ASCII symbols regardless of the configured set, so the result
// is an approximation of guess-space size, not exact Shannon entropy.
const LOWERCASE_POOL: usize = 26;
const UPPERCASE_POOL: usize = 26;
const DIGITS_POOL: usize = 10;
const SPECIAL_POOL: usize = 32;

pub struct EntropyCalculator;

impl EntropyCalculator {
    /// Estimate password entropy in bits, truncated to two decimal places.
    ///
    /// Classes are detected from the password's content, not from any
    /// generation configuration: a password containing a digit counts the
    /// digit pool even if digits were never requested.
    pub fn calculate(password: &str) -> f64 {
        let mut pool_size = 0;

        if password.chars().any(|c| c.is_ascii_lowercase()) {
            pool_size += LOWERCASE_POOL;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            pool_size += UPPERCASE_POOL;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            pool_size += DIGITS_POOL;
        }
        if password.chars().any(|c| !c.is_alphanumeric()) {
            pool_size += SPECIAL_POOL;
        }

        // No recognized class (empty input included): log2 is degenerate
        if pool_size == 0 {
            return 0.0;
        }

        let length = password.chars().count() as f64;
        let entropy = length * (pool_size as f64).log2();
        Self::truncate_to_two_decimals(entropy)
    }

    fn truncate_to_two_decimals(value: f64) -> f64 {
        (value * 100.0).trunc() / 100.0
    }
}
