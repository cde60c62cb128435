// src/strength.rs
use std::collections::HashSet;

use crate::generators::charset::SPECIAL;
use crate::models::{StrengthLevel, StrengthReport};

/// Heuristic strength of any password, generated here or not.
///
/// Points are additive: up to 3 for length, 1 per character category
/// present, and up to 2 for the share of distinct characters. An empty
/// string scores 0.
pub fn analyze_password_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let mut score = match length {
        l if l >= 16 => 3,
        l if l >= 12 => 2,
        l if l >= 8 => 1,
        _ => 0,
    };

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL.contains(c));

    let categories: Vec<&str> = [
        (has_lower, "lowercase"),
        (has_upper, "uppercase"),
        (has_digit, "digits"),
        (has_special, "special"),
    ]
    .into_iter()
    .filter_map(|(present, name)| present.then_some(name))
    .collect();
    score += categories.len() as u32;

    let unique = password.chars().collect::<HashSet<_>>().len();
    if length > 0 {
        let ratio = unique as f64 / length as f64;
        if ratio > 0.8 {
            score += 2;
        } else if ratio > 0.6 {
            score += 1;
        }
    }

    let level = match score {
        s if s >= 9 => StrengthLevel::VeryStrong,
        s if s >= 7 => StrengthLevel::Strong,
        s if s >= 5 => StrengthLevel::Medium,
        _ => StrengthLevel::Weak,
    };

    let detail = format!(
        "Length: {} | Variety: {}/{} | Types: {}",
        length,
        unique,
        length,
        categories.join(", ")
    );

    StrengthReport { score, level, detail }
}
