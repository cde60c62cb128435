// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub exclude_ambiguous: bool,
    /// When set, replaces every built-in character class and all flags above
    /// except `length`.
    pub custom_alphabet: Option<String>,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
            exclude_ambiguous: false,
            custom_alphabet: None,
        }
    }
}

impl GenerationPolicy {
    /// Apply a preset on top of the flags the user passed.
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::None => {}
            Preset::Simple => {
                self.include_uppercase = true;
                self.include_digits = true;
                self.include_special = false;
                self.exclude_ambiguous = true;
            }
            Preset::Complex => {
                self.length = self.length.max(COMPLEX_MIN_LENGTH);
                self.include_uppercase = true;
                self.include_digits = true;
                self.include_special = true;
                self.exclude_ambiguous = false;
            }
        }
    }
}

pub const COMPLEX_MIN_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    None,
    /// Letters and digits only, ambiguous characters removed.
    Simple,
    /// Every category, at least `COMPLEX_MIN_LENGTH` characters.
    Complex,
}

impl Preset {
    // Simple wins when both flags are given
    pub fn from_flags(simple: bool, complex: bool) -> Self {
        if simple {
            Preset::Simple
        } else if complex {
            Preset::Complex
        } else {
            Preset::None
        }
    }
}

// Diceware passphrase options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicewarePolicy {
    pub word_count: usize,
    pub separator: String,
    pub capitalize: bool,
    pub append_number: bool,
}

impl Default for DicewarePolicy {
    fn default() -> Self {
        Self {
            word_count: 5,
            separator: "-".to_string(),
            capitalize: false,
            append_number: false,
        }
    }
}

// Serialized names match the Display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very strong")]
    VeryStrong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Medium => write!(f, "Medium"),
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::VeryStrong => write!(f, "Very strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u32,
    pub level: StrengthLevel,
    pub detail: String,
}

/// What a batch was generated from; drives the summary line when printing
/// or saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchKind {
    Characters { length: usize },
    Diceware { words: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBatch {
    pub kind: BatchKind,
    pub passwords: Vec<String>,
}

impl GeneratedBatch {
    pub fn is_single(&self) -> bool {
        self.passwords.len() == 1
    }
}
