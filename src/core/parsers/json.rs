use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use serde_json::Value;

use crate::core::{AllLocaleMessages, LocaleMessages, MessageContext, MessageLocation};

/// Parse one locale file: a flat JSON object mapping identifiers to strings.
pub fn parse_json_file(path: &Path, locale: &str) -> Result<LocaleMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let Value::Object(map) = json else {
        bail!("Expected a JSON object at the top level of {:?}", path);
    };

    let file_path = path.to_string_lossy().to_string();
    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(&content);
    let mut messages = LocaleMessages::new(locale, file_path.clone());
    let mut cursor = 0;

    for (key, value) in map {
        let text = match value {
            Value::String(text) => text,
            other => bail!(
                "Expected a string value for key \"{}\" in {:?}, found {}",
                key,
                path,
                value_kind(&other)
            ),
        };
        let (offset, line) = find_key_line(&content, &key, cursor, &line_index);
        cursor = offset;
        messages.insert(MessageContext::new(
            MessageLocation::new(file_path.clone(), line),
            key,
            text,
        ));
    }

    Ok(messages)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0]; // Line 1 starts at offset 0
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    }
}

/// Find where `key` is defined, starting the search at byte offset `from`.
///
/// Keys are visited in file order, so searching from the previous key's
/// position skips string values that happen to contain the same text.
/// A match only counts when followed by `:`. Falls back to searching the
/// whole file, then to line 1.
///
/// Returns `(byte offset after the key, 1-based line)`.
fn find_key_line(content: &str, key: &str, from: usize, line_index: &[usize]) -> (usize, usize) {
    // Encode as JSON so escaped characters in the key match the raw file text
    let pattern = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key));

    let found = find_key_from(content, &pattern, from).or_else(|| find_key_from(content, &pattern, 0));
    match found {
        Some(start) => (start + pattern.len(), offset_to_line(line_index, start)),
        None => (from, 1),
    }
}

fn find_key_from(content: &str, pattern: &str, from: usize) -> Option<usize> {
    let remaining = content.get(from..)?;
    let mut pos = 0;
    while let Some(rel_pos) = remaining[pos..].find(pattern) {
        let abs_pos = pos + rel_pos;
        let after_pattern = abs_pos + pattern.len();
        if remaining[after_pattern..].trim_start().starts_with(':') {
            return Some(from + abs_pos);
        }
        pos = abs_pos + 1;
    }
    None
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "/path/to/messages/de.json" -> Some("de")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every locale file of `message_dir` whose file name matches `pattern`.
///
/// Only the directory itself is scanned, not its subdirectories. Any file
/// that cannot be read or parsed fails the whole scan.
pub fn scan_message_files(
    message_dir: impl AsRef<Path>,
    pattern: &Pattern,
) -> Result<AllLocaleMessages> {
    let message_dir = message_dir.as_ref();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Pass the directory as an argument or set 'messagesRoot' in .transcheckrc.json.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(message_dir)
        .with_context(|| format!("Failed to read directory: {:?}", message_dir))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name));
        if matches && let Some(locale) = extract_locale(&path) {
            tracing::debug!("Found locale file for '{}': {}", locale, path.display());
            files.push((locale, path));
        }
    }

    files
        .par_iter()
        .map(|(locale, path)| -> Result<(String, LocaleMessages)> {
            Ok((locale.clone(), parse_json_file(path, locale)?))
        })
        .collect()
}
