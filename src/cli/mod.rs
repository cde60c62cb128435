// src/cli/mod.rs
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

pub mod handlers;
pub mod interactive;

#[derive(Parser, Debug, Default)]
#[command(
    name = "pwgen",
    author,
    version,
    about = "Random password generator with adjustable complexity",
    long_about = None,
    after_help = "Long options also accept a single dash, e.g. -no-special or -exclude-ambiguous.\n\n\
Examples:\n  \
pwgen -l 16                       16-character password\n  \
pwgen -l 20 -no-special           no special characters\n  \
pwgen -l 12 -c 5                  five passwords\n  \
pwgen -s -l 10                    letters and digits only\n  \
pwgen -complex                    every character type, at least 20 long\n  \
pwgen -l 16 -c 3 -o passwords.txt save three passwords to a file\n  \
pwgen -l 10 -custom-chars \"abc123!@#\"\n  \
pwgen -d -words 6 -capitalize     six-word diceware passphrase"
)]
pub struct Args {
    /// Interactive mode
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Password length (default: 12)
    #[arg(short = 'l', long = "length", value_name = "N")]
    pub length: Option<usize>,

    /// Number of passwords to generate (default: 1)
    #[arg(short = 'c', long = "count", value_name = "N")]
    pub count: Option<usize>,

    /// Do not use uppercase letters
    #[arg(long = "no-uppercase")]
    pub no_uppercase: bool,

    /// Do not use digits
    #[arg(long = "no-digits")]
    pub no_digits: bool,

    /// Do not use special characters
    #[arg(long = "no-special")]
    pub no_special: bool,

    /// Exclude look-alike characters (0, O, l, 1, I)
    #[arg(long = "exclude-ambiguous")]
    pub exclude_ambiguous: bool,

    /// Simple mode: letters and digits only, no look-alikes
    #[arg(short = 's', long = "simple")]
    pub simple: bool,

    /// Complex mode: every character type, length at least 20
    #[arg(long = "complex")]
    pub complex: bool,

    /// Save the passwords to a file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show a strength estimate for each password
    #[arg(long = "show-strength")]
    pub show_strength: bool,

    /// Build passwords from this character set only
    #[arg(long = "custom-chars", value_name = "CHARS", allow_hyphen_values = true)]
    pub custom_chars: Option<String>,

    /// Diceware mode (memorable passphrases)
    #[arg(short = 'd', long = "diceware")]
    pub diceware: bool,

    /// Number of diceware words (default: 5)
    #[arg(long = "words", value_name = "N")]
    pub words: Option<usize>,

    /// Separator between diceware words (default: "-")
    #[arg(long = "separator", value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Capitalize the first letter of every word
    #[arg(long = "capitalize")]
    pub capitalize: bool,

    /// Append a random number to the passphrase
    #[arg(long = "add-number")]
    pub add_number: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for a reproducible run
    #[arg(long, hide = true)]
    pub seed: Option<u64>,
}

/// Rewrite single-dash long options (`-no-digits`, `-words=4`) into their
/// double-dash form so clap can parse them. Only names that match a known
/// long option are touched; everything else passes through as is, and so
/// does the argument following an option that takes a value.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut command = Args::command();
    // adds the generated --help and --version
    command.build();

    let long_names: Vec<&str> = command.get_arguments().filter_map(|a| a.get_long()).collect();

    // every spelling that consumes the next argument
    let mut value_options: Vec<String> = Vec::new();
    for arg in command.get_arguments().filter(|a| a.get_action().takes_values()) {
        if let Some(long) = arg.get_long() {
            value_options.push(format!("-{}", long));
            value_options.push(format!("--{}", long));
        }
        if let Some(short) = arg.get_short() {
            value_options.push(format!("-{}", short));
        }
    }

    let mut normalized = Vec::new();
    let mut passthrough = false;
    let mut takes_value = false;

    for arg in args {
        if passthrough || takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        takes_value = arg
            .to_str()
            .map_or(false, |s| value_options.iter().any(|option| option == s));

        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            let body = s.strip_prefix('-')?;
            if body.starts_with('-') || body.len() < 2 {
                return None;
            }
            let name = body.split('=').next().unwrap_or(body);
            long_names.contains(&name).then(|| OsString::from(format!("-{}", s)))
        });

        if arg == "--" {
            passthrough = true;
        }
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}
