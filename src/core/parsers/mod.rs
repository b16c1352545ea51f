//! Parsers for locale files and the strings inside them.
//!
//! - `json`: JSON locale file parser (scans the messages directory)
//! - `markup`: streaming markup tokenizer (uses quick-xml)

pub mod json;
pub mod markup;
