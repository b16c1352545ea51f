//! Issue types for translation check results.
//!
//! Every issue is a tagged variant carrying the data it was found on. Text
//! for users is only produced through the [`Report`] trait, at the reporting
//! boundary.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::MessageContext;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    PlaceholderMismatch,
    UnbalancedMarkup,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::UnbalancedMarkup => write!(f, "unbalanced-markup"),
        }
    }
}

// ============================================================
// Markup Errors
// ============================================================

/// One open/close defect found in a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// An element was opened and never closed.
    StartWithoutEnd(String),
    /// An element was closed while nothing was open.
    EndWithoutStart(String),
    /// The innermost open element was closed by a different name.
    Mismatch { start: String, end: String },
    /// The tokenizer gave up on the string.
    Tokenizer(String),
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::StartWithoutEnd(start) => {
                write!(f, "starting tag without ending tag: {}", start)
            }
            MarkupError::EndWithoutStart(end) => {
                write!(f, "ending tag without starting tag: {}", end)
            }
            MarkupError::Mismatch { start, end } => {
                write!(f, "starting and ending tags don't match: {}, {}", start, end)
            }
            MarkupError::Tokenizer(message) => write!(f, "unknown tokenizer error: {}", message),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translated value whose placeholders differ from the reference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    /// The translated entry.
    pub context: MessageContext,
    /// The reference locale's text for the same key.
    pub reference: String,
}

impl PlaceholderMismatchIssue {
    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Value whose markup is not balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbalancedMarkupIssue {
    /// The entry holding the offending text.
    pub context: MessageContext,
    pub error: MarkupError,
}

impl UnbalancedMarkupIssue {
    pub fn rule() -> Rule {
        Rule::UnbalancedMarkup
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A translation issue found during checking.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    PlaceholderMismatch(PlaceholderMismatchIssue),
    UnbalancedMarkup(UnbalancedMarkupIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        match self {
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::UnbalancedMarkup(_) => UnbalancedMarkupIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Entry the issue was found on.
    fn context(&self) -> &MessageContext;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;
}

impl Report for PlaceholderMismatchIssue {
    fn context(&self) -> &MessageContext {
        &self.context
    }

    fn message(&self) -> String {
        format!(
            "mismatch in variables: {} \u{21D2} {}",
            self.reference, self.context.value
        )
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnbalancedMarkupIssue {
    fn context(&self) -> &MessageContext {
        &self.context
    }

    fn message(&self) -> String {
        format!("{}: {}", self.error, self.context.value)
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Tests
// ============================================================
