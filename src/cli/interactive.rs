// src/cli/interactive.rs
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, InquireError, Select, Text};

use crate::cli::handlers::{self, OutputOptions, Request};
use crate::core::config::{Config, MAX_PASSWORD_COUNT, MAX_PASSWORD_LENGTH};
use crate::generators::charset::MIN_LENGTH;
use crate::generators::diceware::{MAX_WORDS, MIN_WORDS};
use crate::models::{DicewarePolicy, GenerationPolicy};

const MODE_CHARACTERS: &str = "🔐  Random characters";
const MODE_DICEWARE: &str = "🎲  Diceware passphrase";

// Error shown for an out-of-range answer, if any
fn range_error(value: usize, min: usize, max: usize) -> Option<String> {
    if value < min || value > max {
        Some(format!("Enter a number from {} to {}", min, max))
    } else {
        None
    }
}

fn ask_number(message: &str, default: usize, min: usize, max: usize) -> Result<usize, InquireError> {
    CustomType::<usize>::new(message)
        .with_default(default.clamp(min, max))
        .with_error_message("Please enter a number")
        .with_validator(move |value: &usize| {
            Ok::<_, CustomUserError>(match range_error(*value, min, max) {
                Some(message) => Validation::Invalid(message.into()),
                None => Validation::Valid,
            })
        })
        .prompt()
}

fn ask_yes_no(message: &str, default: bool) -> Result<bool, InquireError> {
    Confirm::new(message)
        .with_default(default)
        .with_help_message("y/yes or n/no")
        .prompt()
}

fn ask_request(config: &Config) -> Result<Request, InquireError> {
    let mode = Select::new("What do you want to generate?", vec![MODE_CHARACTERS, MODE_DICEWARE])
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()?;

    if mode == MODE_DICEWARE {
        let word_count = ask_number("Number of words:", config.default_words, MIN_WORDS, MAX_WORDS)?;
        let separator = Text::new("Separator between words:")
            .with_default(&config.default_separator)
            .prompt()?;
        let capitalize = ask_yes_no("Capitalize each word?", false)?;
        let append_number = ask_yes_no("Append a random number?", false)?;

        return Ok(Request::Diceware(DicewarePolicy {
            word_count,
            separator,
            capitalize,
            append_number,
        }));
    }

    let length = ask_number("Password length:", config.default_length, MIN_LENGTH, MAX_PASSWORD_LENGTH)?;

    println!();
    let include_uppercase = ask_yes_no("Use uppercase letters?", true)?;
    let include_digits = ask_yes_no("Use digits?", true)?;
    let include_special = ask_yes_no("Use special characters (!@#$...)?", true)?;
    let exclude_ambiguous = ask_yes_no("Exclude look-alike characters (0, O, l, 1, I)?", false)?;

    Ok(Request::Characters(GenerationPolicy {
        length,
        include_uppercase,
        include_digits,
        include_special,
        exclude_ambiguous,
        custom_alphabet: None,
    }))
}

fn ask_output(config: &Config) -> Result<OutputOptions, InquireError> {
    println!();
    let show_strength = ask_yes_no("Show password strength?", false)?;
    let output = if ask_yes_no("Save to a file?", false)? {
        let default_file = config.default_output_file.display().to_string();
        let file = Text::new("File name:").with_default(&default_file).prompt()?;
        let file = file.trim();
        Some(PathBuf::from(if file.is_empty() { default_file.as_str() } else { file }))
    } else {
        None
    };

    Ok(OutputOptions { show_strength, output, json: false })
}

/// Collect options through prompts, then generate and print like the
/// non-interactive path does.
pub fn run_interactive(config: &Config, seed: Option<u64>) -> Result<()> {
    println!();
    println!("{}", "=".repeat(50));
    println!("  {}", style("Password generator - interactive mode").bold().cyan());
    println!("{}", "=".repeat(50));
    println!();

    let prompts = ask_request(config).and_then(|request| {
        let count = ask_number("Number of passwords:", config.default_count, 1, MAX_PASSWORD_COUNT)?;
        let output = ask_output(config)?;
        Ok((request, count, output))
    });

    let (request, count, output) = match prompts {
        Ok(answers) => answers,
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            log::info!("Interactive session cancelled");
            println!("{}", style("Cancelled.").yellow());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!();
    println!("{}", "-".repeat(50));
    println!("Generating...");
    println!("{}", "-".repeat(50));

    let mut generator = handlers::create_generator(seed.or(config.seed));
    let batch = handlers::generate_batch(&mut generator, count, &request)?;
    handlers::emit(&batch, &output)?;

    println!();
    Ok(())
}
