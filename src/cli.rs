// src/cli.rs
use clap::Parser;

use crate::config::GenerationConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Password length
    #[arg(long, short, env = "PASSGEN_LENGTH", default_value_t = 8)]
    pub length: usize,

    /// Number of passwords to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Leave lowercase letters out
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave uppercase letters out
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave digits out
    #[arg(long)]
    pub no_digits: bool,

    /// Leave special characters out
    #[arg(long)]
    pub no_special: bool,

    /// Also print the entropy estimate in bits
    #[arg(long)]
    pub entropy: bool,

    /// Use JSON for output (for API use)
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn to_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig {
            length: self.length,
            ..GenerationConfig::default()
        };
        if self.no_lowercase {
            config.lowercase.clear();
        }
        if self.no_uppercase {
            config.uppercase.clear();
        }
        if self.no_digits {
            config.digits.clear();
        }
        if self.no_special {
            config.special.clear();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CharClass;

    #[test]
    fn flags_disable_classes() {
        let args = Args::parse_from(["passgen", "--length", "12", "--no-digits", "--no-special"]);
        let config = args.to_config();
        assert_eq!(config.length, 12);
        assert_eq!(
            config.enabled_classes(),
            vec![CharClass::Lowercase, CharClass::Uppercase]
        );
    }

    #[test]
    fn defaults_match_generation_defaults() {
        let args = Args::parse_from(["passgen"]);
        let config = args.to_config();
        assert_eq!(config.length, 8);
        assert_eq!(config.enabled_classes().len(), 4);
    }
}
