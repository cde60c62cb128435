// src/generators/wordlist.rs
use lazy_static::lazy_static;

static RAW_WORDLIST: &str = include_str!("wordlist.txt");

lazy_static! {
    static ref WORDS: Vec<&'static str> = RAW_WORDLIST
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
}

/// The diceware wordlist, parsed on first access.
pub fn words() -> &'static [&'static str] {
    &WORDS
}
