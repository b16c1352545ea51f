//! Rule implementations for transcheck.
//!
//! Each rule is a pure function over an already loaded [`Corpus`](crate::core::Corpus)
//! returning issues grouped by locale. Rules share no state and can run in
//! any order or concurrently.
//!
//! - `placeholders`: placeholders changed or lost in translation
//! - `markup`: unbalanced markup in any locale

pub mod markup;
pub mod placeholders;

pub use markup::{check_markup, check_markup_balance};
pub use placeholders::{PlaceholderSyntax, check_placeholders};
