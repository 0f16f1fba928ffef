// src/config.rs
use serde::{Deserialize, Serialize};

pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
// The 32 standard ASCII punctuation symbols
pub const SPECIAL_CHARACTERS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// The four recognized character classes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Special,
    ];
}

// Configuration for password generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Length of the generated password
    pub length: usize,

    // One character-set string per class; an empty string disables the class
    pub lowercase: String,
    pub uppercase: String,
    pub digits: String,
    pub special: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 8,
            lowercase: LOWERCASE_LETTERS.to_string(),
            uppercase: UPPERCASE_LETTERS.to_string(),
            digits: DIGITS.to_string(),
            special: SPECIAL_CHARACTERS.to_string(),
        }
    }
}

impl GenerationConfig {
    /// The character set configured for a class. Empty means disabled.
    pub fn charset(&self, class: CharClass) -> &str {
        match class {
            CharClass::Lowercase => &self.lowercase,
            CharClass::Uppercase => &self.uppercase,
            CharClass::Digits => &self.digits,
            CharClass::Special => &self.special,
        }
    }

    /// Classes with a non-empty character set, in canonical order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .iter()
            .copied()
            .filter(|&class| !self.charset(class).is_empty())
            .collect()
    }
}
