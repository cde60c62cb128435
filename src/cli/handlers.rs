// src/cli/handlers.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::cli::Args;
use crate::core::config::Config;
use crate::generators::{self, PasswordGenerator};
use crate::models::{
    BatchKind, DicewarePolicy, GeneratedBatch, GenerationPolicy, Preset, StrengthReport,
};
use crate::strength::analyze_password_strength;
use crate::utils;

/// What to generate for one invocation.
#[derive(Debug, Clone)]
pub enum Request {
    Characters(GenerationPolicy),
    Diceware(DicewarePolicy),
}

#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub show_strength: bool,
    pub output: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    strength: Option<StrengthReport>,
}

pub fn create_generator(seed: Option<u64>) -> PasswordGenerator {
    match seed {
        Some(seed) => {
            log::debug!("Using seeded generator");
            PasswordGenerator::with_seed(seed)
        }
        None => PasswordGenerator::new(),
    }
}

pub fn policy_from_args(args: &Args, config: &Config) -> GenerationPolicy {
    let mut policy = GenerationPolicy {
        length: args.length.unwrap_or(config.default_length),
        include_uppercase: !args.no_uppercase,
        include_digits: !args.no_digits,
        include_special: !args.no_special,
        exclude_ambiguous: args.exclude_ambiguous,
        custom_alphabet: args.custom_chars.clone(),
    };
    policy.apply_preset(Preset::from_flags(args.simple, args.complex));
    policy
}

pub fn diceware_policy_from_args(args: &Args, config: &Config) -> DicewarePolicy {
    DicewarePolicy {
        word_count: args.words.unwrap_or(config.default_words),
        separator: args
            .separator
            .clone()
            .unwrap_or_else(|| config.default_separator.clone()),
        capitalize: args.capitalize,
        append_number: args.add_number,
    }
}

/// Run the matching synthesizer `count` times. Nothing is returned unless
/// every draw succeeds.
pub fn generate_batch(
    generator: &mut PasswordGenerator,
    count: usize,
    request: &Request,
) -> generators::Result<GeneratedBatch> {
    match request {
        Request::Characters(policy) => Ok(GeneratedBatch {
            kind: BatchKind::Characters { length: policy.length },
            passwords: generator.generate_passwords(count, policy)?,
        }),
        Request::Diceware(policy) => Ok(GeneratedBatch {
            kind: BatchKind::Diceware { words: policy.word_count },
            passwords: generator.generate_passphrases(count, policy)?,
        }),
    }
}

pub fn render_json(batch: &GeneratedBatch, show_strength: bool) -> serde_json::Result<String> {
    let entries: Vec<JsonEntry> = batch
        .passwords
        .iter()
        .map(|password| JsonEntry {
            password,
            strength: show_strength.then(|| analyze_password_strength(password)),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Print a batch and optionally save it to a file.
pub fn emit(batch: &GeneratedBatch, options: &OutputOptions) -> Result<()> {
    if options.json {
        println!("{}", render_json(batch, options.show_strength)?);
    } else {
        print!("{}", utils::render_batch(batch, options.show_strength));
    }

    if let Some(path) = &options.output {
        utils::save_to_file(path, batch)
            .with_context(|| format!("Failed to save passwords to {}", path.display()))?;

        let message = format!("Passwords saved to file: {}", path.display());
        if options.json {
            // stdout stays valid JSON
            eprintln!("{}", message);
        } else {
            println!("{}", style(message).green());
        }
    }

    Ok(())
}

pub fn run(args: &Args, config: &Config) -> Result<()> {
    let count = args.count.unwrap_or(config.default_count);

    let request = if args.diceware {
        Request::Diceware(diceware_policy_from_args(args, config))
    } else {
        Request::Characters(policy_from_args(args, config))
    };

    let mut generator = create_generator(args.seed.or(config.seed));
    let batch = generate_batch(&mut generator, count, &request)?;

    emit(
        &batch,
        &OutputOptions {
            show_strength: args.show_strength,
            output: args.output.clone(),
            json: args.json,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    #[test]
    fn defaults_come_from_config() {
        let config = Config { default_length: 18, default_words: 4, ..Config::default() };
        let args = Args::default();

        let policy = policy_from_args(&args, &config);
        assert_eq!(policy.length, 18);
        assert!(policy.include_uppercase && policy.include_digits && policy.include_special);

        let diceware = diceware_policy_from_args(&args, &config);
        assert_eq!(diceware.word_count, 4);
        assert_eq!(diceware.separator, "-");
    }

    #[test]
    fn simple_flag_overrides_other_flags() {
        let args = Args {
            simple: true,
            complex: true,
            no_uppercase: true,
            no_digits: true,
            length: Some(10),
            ..Args::default()
        };
        let policy = policy_from_args(&args, &Config::default());

        assert_eq!(policy.length, 10);
        assert!(policy.include_uppercase);
        assert!(policy.include_digits);
        assert!(!policy.include_special);
        assert!(policy.exclude_ambiguous);
    }

    #[test]
    fn complex_flag_raises_length() {
        let args = Args { complex: true, length: Some(10), no_special: true, ..Args::default() };
        let policy = policy_from_args(&args, &Config::default());
        assert_eq!(policy.length, 20);
        assert!(policy.include_special);
    }

    #[test]
    fn batch_kind_matches_request() {
        let mut generator = PasswordGenerator::with_seed(21);

        let batch = generate_batch(&mut generator, 3, &Request::Characters(GenerationPolicy::default())).unwrap();
        assert_eq!(batch.kind, BatchKind::Characters { length: 12 });
        assert_eq!(batch.passwords.len(), 3);

        let batch = generate_batch(&mut generator, 2, &Request::Diceware(DicewarePolicy::default())).unwrap();
        assert_eq!(batch.kind, BatchKind::Diceware { words: 5 });
        assert_eq!(batch.passwords.len(), 2);
    }

    #[test]
    fn invalid_request_yields_no_batch() {
        let mut generator = PasswordGenerator::with_seed(22);
        let policy = GenerationPolicy { length: 3, ..Default::default() };
        let err = generate_batch(&mut generator, 4, &Request::Characters(policy)).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }

    #[test]
    fn json_includes_strength_on_request() {
        let batch = GeneratedBatch {
            kind: BatchKind::Characters { length: 8 },
            passwords: vec!["aaaaaaaa".to_string()],
        };

        let plain: serde_json::Value = serde_json::from_str(&render_json(&batch, false).unwrap()).unwrap();
        assert_eq!(plain[0]["password"], "aaaaaaaa");
        assert!(plain[0].get("strength").is_none());

        let scored: serde_json::Value = serde_json::from_str(&render_json(&batch, true).unwrap()).unwrap();
        assert_eq!(scored[0]["strength"]["score"], 2);
        assert_eq!(scored[0]["strength"]["level"], "Weak");
    }

    #[test]
    fn run_saves_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let args = Args {
            count: Some(3),
            length: Some(16),
            output: Some(path.clone()),
            seed: Some(5),
            ..Args::default()
        };

        run(&args, &Config::default()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Generated 3 passwords (length: 16)"));
        assert_eq!(contents.lines().filter(|l| l.starts_with(" ")).count(), 3);
    }
}
