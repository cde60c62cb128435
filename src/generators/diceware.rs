// src/generators/diceware.rs
use rand::Rng;

use super::password::{check_count, PasswordGenerator};
use super::wordlist;
use super::{GeneratorError, Result};
use crate::models::DicewarePolicy;

pub const MIN_WORDS: usize = 3;
pub const MAX_WORDS: usize = 10;

/// Upper bound (exclusive) of the optional numeric suffix.
pub const NUMBER_SUFFIX_BOUND: u32 = 10_000;

impl PasswordGenerator {
    /// Build a passphrase from words drawn independently, with replacement.
    pub fn generate_passphrase(&mut self, policy: &DicewarePolicy) -> Result<String> {
        if policy.word_count < MIN_WORDS {
            return Err(GeneratorError::InvalidConfig(format!(
                "word count must be at least {}",
                MIN_WORDS
            )));
        }
        if policy.word_count > MAX_WORDS {
            return Err(GeneratorError::InvalidConfig(format!(
                "word count must not exceed {}",
                MAX_WORDS
            )));
        }

        let words = wordlist::words();
        let selected: Vec<String> = (0..policy.word_count)
            .map(|_| {
                let word = words[self.rng.gen_range(0..words.len())];
                if policy.capitalize {
                    capitalize(word)
                } else {
                    word.to_string()
                }
            })
            .collect();

        let mut passphrase = selected.join(policy.separator.as_str());

        if policy.append_number {
            let number = self.rng.gen_range(0..NUMBER_SUFFIX_BOUND);
            passphrase.push_str(&policy.separator);
            passphrase.push_str(&number.to_string());
        }

        Ok(passphrase)
    }

    pub fn generate_passphrases(&mut self, count: usize, policy: &DicewarePolicy) -> Result<Vec<String>> {
        check_count(count)?;
        log::debug!("Generating {} passphrase(s) of {} words", count, policy.word_count);

        (0..count).map(|_| self.generate_passphrase(policy)).collect()
    }
}

// Uppercase the first letter, leave the rest as is
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_word(word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
    }

    #[test]
    fn default_passphrase_shape() {
        let mut generator = PasswordGenerator::with_seed(11);
        for _ in 0..50 {
            let passphrase = generator.generate_passphrase(&DicewarePolicy::default()).unwrap();
            let parts: Vec<&str> = passphrase.split('-').collect();
            assert_eq!(parts.len(), 5, "{}", passphrase);
            assert!(parts.iter().all(|w| is_lower_word(w)), "{}", passphrase);
            assert!(parts.iter().all(|w| wordlist::words().contains(w)));
        }
    }

    #[test]
    fn capitalized_words() {
        let mut generator = PasswordGenerator::with_seed(12);
        let policy = DicewarePolicy { capitalize: true, ..Default::default() };
        let passphrase = generator.generate_passphrase(&policy).unwrap();

        for word in passphrase.split('-') {
            let mut chars = word.chars();
            assert!(chars.next().unwrap().is_ascii_uppercase(), "{}", passphrase);
            assert!(chars.all(|c| c.is_ascii_lowercase()), "{}", passphrase);
        }
    }

    #[test]
    fn number_suffix_and_custom_separator() {
        let mut generator = PasswordGenerator::with_seed(13);
        let policy = DicewarePolicy {
            word_count: 3,
            separator: "_".to_string(),
            capitalize: false,
            append_number: true,
        };

        for _ in 0..50 {
            let passphrase = generator.generate_passphrase(&policy).unwrap();
            let parts: Vec<&str> = passphrase.split('_').collect();
            assert_eq!(parts.len(), 4, "{}", passphrase);
            assert!(parts[..3].iter().all(|w| is_lower_word(w)));
            let number: u32 = parts[3].parse().unwrap();
            assert!(number < NUMBER_SUFFIX_BOUND);
        }
    }

    #[test]
    fn word_count_bounds() {
        let mut generator = PasswordGenerator::with_seed(14);
        for word_count in [0, 2, 11, 50] {
            let policy = DicewarePolicy { word_count, ..Default::default() };
            assert!(matches!(
                generator.generate_passphrase(&policy),
                Err(GeneratorError::InvalidConfig(_))
            ));
        }
        for word_count in [MIN_WORDS, MAX_WORDS] {
            let policy = DicewarePolicy { word_count, ..Default::default() };
            let passphrase = generator.generate_passphrase(&policy).unwrap();
            assert_eq!(passphrase.split('-').count(), word_count);
        }
    }

    #[test]
    fn empty_separator_concatenates() {
        let mut generator = PasswordGenerator::with_seed(15);
        let policy = DicewarePolicy {
            separator: String::new(),
            capitalize: true,
            ..Default::default()
        };
        let passphrase = generator.generate_passphrase(&policy).unwrap();
        assert_eq!(passphrase.chars().filter(|c| c.is_ascii_uppercase()).count(), 5);
    }

    #[test]
    fn batch_of_passphrases() {
        let mut generator = PasswordGenerator::with_seed(16);
        let passphrases = generator.generate_passphrases(4, &DicewarePolicy::default()).unwrap();
        assert_eq!(passphrases.len(), 4);

        let policy = DicewarePolicy { word_count: 2, ..Default::default() };
        assert!(generator.generate_passphrases(4, &policy).is_err());
    }

    #[test]
    fn capitalize_leaves_tail_untouched() {
        assert_eq!(capitalize("able"), "Able");
        assert_eq!(capitalize("mcDonald"), "McDonald");
        assert_eq!(capitalize(""), "");
    }
}
