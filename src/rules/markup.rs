//! Markup balance rule.
//!
//! A single left-to-right pass over the token stream with a stack of open
//! element names. A closing tag always consumes the top of the stack, even
//! when the names differ; there is no look-ahead or deeper search for the
//! matching opener. One broken region can therefore produce several issues,
//! always in the same order for the same input.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    core::{Corpus, LocaleMessages, parsers::markup::{MarkupToken, MarkupTokens}},
    issues::{MarkupError, UnbalancedMarkupIssue},
};

/// Check that every opening element in `text` is closed in order.
///
/// Returns an empty list for well-formed text (including text without any
/// markup). Elements still open at the end are reported most recently opened
/// first.
pub fn check_markup(text: &str) -> Vec<MarkupError> {
    check_tokens(MarkupTokens::new(text))
}

fn check_tokens(tokens: impl IntoIterator<Item = MarkupToken>) -> Vec<MarkupError> {
    let mut errors = Vec::new();
    let mut open: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            MarkupToken::Start(name) => open.push(name),
            MarkupToken::End(end) => match open.pop() {
                None => errors.push(MarkupError::EndWithoutStart(end)),
                Some(start) if start != end => {
                    errors.push(MarkupError::Mismatch { start, end });
                }
                Some(_) => {}
            },
            MarkupToken::SelfClosing(_) | MarkupToken::Text => {}
            MarkupToken::Error(message) => {
                errors.push(MarkupError::Tokenizer(message));
                break;
            }
        }
    }

    errors.extend(open.into_iter().rev().map(MarkupError::StartWithoutEnd));
    errors
}

/// Check the markup of every value of every locale, reference included.
///
/// Locales are checked in parallel; each locale's issues follow its file
/// order. Only locales with at least one issue appear in the result.
pub fn check_markup_balance(corpus: &Corpus) -> BTreeMap<String, Vec<UnbalancedMarkupIssue>> {
    let locales: Vec<(&str, &LocaleMessages)> = corpus.locales().collect();

    locales
        .par_iter()
        .map(|(locale, messages)| (locale.to_string(), check_locale_markup(messages)))
        .filter(|(_, issues)| !issues.is_empty())
        .collect()
}

fn check_locale_markup(messages: &LocaleMessages) -> Vec<UnbalancedMarkupIssue> {
    messages
        .iter()
        .flat_map(|context| {
            check_markup(&context.value)
                .into_iter()
                .map(|error| UnbalancedMarkupIssue {
                    context: context.clone(),
                    error,
                })
        })
        .collect()
}
