// src/utils/format.rs
use crate::models::{BatchKind, GeneratedBatch};
use crate::strength::analyze_password_strength;

pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

// Noun form for a password count
pub fn pluralize_password(count: usize) -> &'static str {
    if count == 1 {
        "password"
    } else {
        "passwords"
    }
}

/// Numbered list entry, index padded to two columns.
pub fn numbered_line(index: usize, password: &str) -> String {
    format!("{:2}. {}", index, password)
}

/// Text printed to stdout for a finished batch.
pub fn render_batch(batch: &GeneratedBatch, show_strength: bool) -> String {
    let mut out = String::new();

    if batch.is_single() {
        let password = &batch.passwords[0];
        out.push_str(password);
        out.push('\n');
        if show_strength {
            let report = analyze_password_strength(password);
            out.push_str(&format!("\nStrength: {}\n", report.level));
            out.push_str(&format!("Details: {}\n", report.detail));
        }
        return out;
    }

    let count = batch.passwords.len();
    let summary = match batch.kind {
        BatchKind::Characters { length } => format!("(length: {})", length),
        BatchKind::Diceware { .. } => "(diceware)".to_string(),
    };

    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!("  Generated {} {} {}\n", count, pluralize_password(count), summary));
    out.push_str(&rule());
    out.push_str("\n\n");

    for (i, password) in batch.passwords.iter().enumerate() {
        out.push_str(&numbered_line(i + 1, password));
        if show_strength {
            out.push_str(&format!("  {}", analyze_password_strength(password).level));
        }
        out.push('\n');
    }
    out.push('\n');

    out
}

/// File body for an exported batch, stamped with `timestamp`.
pub fn render_export(batch: &GeneratedBatch, timestamp: &str) -> String {
    let mut out = String::new();
    out.push_str("Password generator\n");
    out.push_str(&format!("Date: {}\n", timestamp));
    out.push_str(&rule());
    out.push_str("\n\n");

    if batch.is_single() {
        out.push_str(&batch.passwords[0]);
        out.push('\n');
        return out;
    }

    let count = batch.passwords.len();
    let summary = match batch.kind {
        BatchKind::Characters { length } => format!("(length: {})", length),
        BatchKind::Diceware { words } => format!("(words: {})", words),
    };
    out.push_str(&format!("Generated {} {} {}\n\n", count, pluralize_password(count), summary));

    for (i, password) in batch.passwords.iter().enumerate() {
        out.push_str(&numbered_line(i + 1, password));
        out.push('\n');
    }

    out
}
