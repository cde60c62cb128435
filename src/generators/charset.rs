// src/generators/charset.rs
use rand::Rng;

use super::{GeneratorError, Result};
use crate::models::GenerationPolicy;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Visually confusable characters dropped by `exclude_ambiguous`.
pub const AMBIGUOUS: &str = "0Ol1I";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const MIN_CUSTOM_ALPHABET: usize = 2;

/// Alphabet for the free positions of a password plus one pre-drawn
/// character for every category that must show up.
#[derive(Debug, Clone)]
pub struct Charset {
    pub alphabet: Vec<char>,
    pub required: Vec<char>,
}

/// Resolve a policy into a concrete alphabet, drawing the required
/// characters from `rng` along the way.
///
/// Ambiguous characters are only removed from the filler alphabet. A
/// required character that was already drawn (say an uppercase `O`) is
/// kept even when `exclude_ambiguous` is set.
pub fn build_charset<R: Rng + ?Sized>(policy: &GenerationPolicy, rng: &mut R) -> Result<Charset> {
    if policy.length < MIN_LENGTH {
        return Err(GeneratorError::InvalidConfig(format!(
            "password length must be at least {} characters",
            MIN_LENGTH
        )));
    }
    if policy.length > MAX_LENGTH {
        return Err(GeneratorError::InvalidConfig(format!(
            "password length must be at most {} characters",
            MAX_LENGTH
        )));
    }

    if let Some(custom) = policy.custom_alphabet.as_deref().filter(|s| !s.is_empty()) {
        let alphabet: Vec<char> = custom.chars().collect();

        let mut distinct = alphabet.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < MIN_CUSTOM_ALPHABET {
            return Err(GeneratorError::InvalidConfig(format!(
                "custom character set must contain at least {} distinct characters",
                MIN_CUSTOM_ALPHABET
            )));
        }

        let required = vec![pick(rng, &alphabet)];
        return Ok(Charset { alphabet, required });
    }

    let lowercase: Vec<char> = LOWERCASE.chars().collect();
    let mut alphabet = lowercase.clone();
    let mut required = vec![pick(rng, &lowercase)];

    let optional = [
        (policy.include_uppercase, UPPERCASE),
        (policy.include_digits, DIGITS),
        (policy.include_special, SPECIAL),
    ];
    for (enabled, class) in optional {
        if !enabled {
            continue;
        }
        let class: Vec<char> = class.chars().collect();
        required.push(pick(rng, &class));
        alphabet.extend(class);
    }

    if policy.exclude_ambiguous {
        alphabet.retain(|c| !AMBIGUOUS.contains(*c));
    }

    if alphabet.is_empty() {
        return Err(GeneratorError::InvalidConfig(
            "at least one character type must be selected".to_string(),
        ));
    }

    log::debug!(
        "Charset built: {} filler characters, {} required categories",
        alphabet.len(),
        required.len()
    );

    Ok(Charset { alphabet, required })
}

/// Uniform draw from a non-empty slice.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, chars: &[char]) -> char {
    chars[rng.gen_range(0..chars.len())]
}
