// src/utils/io.rs
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::generators::Result;
use crate::models::GeneratedBatch;
use crate::utils::render_export;

/// Write a batch to `path`, replacing any existing file.
pub fn save_to_file(path: &Path, batch: &GeneratedBatch) -> Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let contents = render_export(batch, &timestamp);

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    log::info!("Saved {} password(s) to {}", batch.passwords.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;
    use crate::models::BatchKind;

    #[test]
    fn writes_header_and_passwords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        let batch = GeneratedBatch {
            kind: BatchKind::Characters { length: 4 },
            passwords: vec!["ab1!".to_string(), "cd2@".to_string()],
        };

        save_to_file(&path, &batch).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Password generator");
        assert!(lines[1].starts_with("Date: "));
        assert_eq!(lines[2], "=".repeat(50));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Generated 2 passwords (length: 4)");
        assert_eq!(lines[6], " 1. ab1!");
        assert_eq!(lines[7], " 2. cd2@");
    }

    #[test]
    fn missing_directory_is_an_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("passwords.txt");
        let batch = GeneratedBatch {
            kind: BatchKind::Characters { length: 4 },
            passwords: vec!["ab1!".to_string()],
        };

        assert!(matches!(save_to_file(&path, &batch), Err(GeneratorError::IoFailure(_))));
    }
}
