//! Placeholder consistency rule.
//!
//! Placeholders are marker-delimited substrings (`$name$` by default) that
//! must survive translation verbatim. For every reference key, the sorted
//! placeholder sequence of each translation must equal the reference's.

use std::{collections::BTreeMap, sync::LazyLock};

use anyhow::{Result, bail};
use regex::Regex;

use crate::{core::Corpus, issues::PlaceholderMismatchIssue};

/// Default placeholder marker.
pub const DEFAULT_MARKER: char = '$';

static DEFAULT_PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[^$]+\$").unwrap());

/// How placeholders are written: a marker character on both sides of a
/// non-empty body that does not contain the marker.
#[derive(Debug, Clone)]
pub struct PlaceholderSyntax {
    marker: char,
    pattern: Regex,
}

impl PlaceholderSyntax {
    pub fn new(marker: char) -> Result<Self> {
        if marker.is_whitespace() || marker.is_alphanumeric() {
            bail!(
                "Invalid placeholder marker {:?}: must be a symbol character",
                marker
            );
        }
        let escaped = regex::escape(&marker.to_string());
        let pattern = Regex::new(&format!("{0}[^{0}]+{0}", escaped))?;
        Ok(Self { marker, pattern })
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Placeholders of `text`, scanned left to right without overlap,
    /// markers included, sorted.
    pub fn extract_sorted<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut found: Vec<&str> = self.pattern.find_iter(text).map(|m| m.as_str()).collect();
        found.sort_unstable();
        found
    }
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            pattern: DEFAULT_PLACEHOLDER_REGEX.clone(),
        }
    }
}

/// Check every candidate locale's placeholders against the reference locale.
///
/// Keys are visited in reference file order; candidates without a value (or
/// with an empty one) for a key are skipped. Only locales with at least one
/// issue appear in the result.
pub fn check_placeholders(
    corpus: &Corpus,
    syntax: &PlaceholderSyntax,
) -> BTreeMap<String, Vec<PlaceholderMismatchIssue>> {
    let mut result: BTreeMap<String, Vec<PlaceholderMismatchIssue>> = BTreeMap::new();

    for reference in corpus.reference().iter() {
        // An empty reference sequence still matters: the translation may have
        // gained placeholders the reference doesn't have.
        let expected = syntax.extract_sorted(&reference.value);

        for (locale, messages) in corpus.candidates() {
            let Some(translated) = messages.get(&reference.key) else {
                continue;
            };
            if translated.value.is_empty() {
                continue;
            }

            if syntax.extract_sorted(&translated.value) != expected {
                result
                    .entry(locale.to_string())
                    .or_default()
                    .push(PlaceholderMismatchIssue {
                        context: translated.clone(),
                        reference: reference.value.clone(),
                    });
            }
        }
    }

    result
}
