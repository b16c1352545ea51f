//! Transcheck - translation file checker
//!
//! Transcheck is a CLI tool and library that checks localized JSON message
//! files against a reference locale. It reports placeholders that were
//! changed or lost in translation and markup whose tags are unbalanced.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Data model (Corpus, locale messages) and parsers
//! - `issues`: Issue type definitions and rendering
//! - `rules`: The placeholder and markup checks

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
