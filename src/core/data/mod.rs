//! Core data types shared by parsers and rules.
//!
//! ## Module Structure
//!
//! - `message`: Message-related types (LocaleMessages, MessageContext, MessageLocation)
//! - `corpus`: Corpus, the reference locale plus all candidate locales

pub mod corpus;
pub mod message;

pub use corpus::{AllLocaleMessages, Corpus};
pub use message::{LocaleMessages, MessageContext, MessageLocation};
