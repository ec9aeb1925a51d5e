use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Splits text into entries: one per line, trimmed, skipping blank lines
/// and `#` comments. Lines without an `@` are kept as-is.
pub fn parse_email_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_email_list(path: Option<&Path>) -> Result<Vec<String>> {
    let start_time = Instant::now();

    let content = match path {
        Some(path) => {
            info!(action = "load", component = "email_file", file_path = ?path, "Reading emails from file");
            if !path.exists() {
                anyhow::bail!("Input file not found: {:?}", path);
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {:?}", path))?
        }
        None => {
            info!(action = "load", component = "stdin", "Reading emails from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read emails from stdin")?;
            buf
        }
    };

    let emails = parse_email_list(&content);
    info!(
        action = "loaded",
        component = "email_input",
        entry_count = emails.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded email entries"
    );
    Ok(emails)
}
