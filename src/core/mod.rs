//! Core data model and input parsing.
//!
//! - `context`: CheckContext, configuration plus the loaded corpus
//! - `data`: Corpus and per-locale message types
//! - `parsers`: locale file parsing and markup tokenizing

pub mod context;
pub mod data;
pub mod parsers;

pub use context::CheckContext;
pub use data::{AllLocaleMessages, Corpus, LocaleMessages, MessageContext, MessageLocation};
