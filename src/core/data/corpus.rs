use std::collections::BTreeMap;

use anyhow::{Result, bail};

use super::message::LocaleMessages;

/// Messages of every locale, keyed by locale code.
///
/// A `BTreeMap` keeps locale iteration sorted, so reports and check results
/// never depend on directory listing order.
pub type AllLocaleMessages = BTreeMap<String, LocaleMessages>;

/// The full set of locale files under check: one reference locale plus any
/// number of candidate locales checked against it.
///
/// Built once before any rule runs and only read afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    reference_locale: String,
    locales: AllLocaleMessages,
}

impl Corpus {
    /// Create a corpus. Fails if `reference_locale` has no messages.
    pub fn new(reference_locale: impl Into<String>, locales: AllLocaleMessages) -> Result<Self> {
        let reference_locale = reference_locale.into();
        if !locales.contains_key(&reference_locale) {
            bail!(
                "Reference locale '{}' messages not found (available: {})",
                reference_locale,
                if locales.is_empty() {
                    "none".to_string()
                } else {
                    locales.keys().cloned().collect::<Vec<_>>().join(", ")
                }
            );
        }
        Ok(Self {
            reference_locale,
            locales,
        })
    }

    pub fn reference_locale(&self) -> &str {
        &self.reference_locale
    }

    /// Messages of the reference locale.
    pub fn reference(&self) -> &LocaleMessages {
        // Presence is checked in `Corpus::new` and `locales` is never mutated.
        &self.locales[&self.reference_locale]
    }

    /// Every locale except the reference one, in sorted order.
    pub fn candidates(&self) -> impl Iterator<Item = (&str, &LocaleMessages)> {
        self.locales()
            .filter(move |(locale, _)| *locale != self.reference_locale)
    }

    /// Every locale including the reference one, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = (&str, &LocaleMessages)> {
        self.locales
            .iter()
            .map(|(locale, messages)| (locale.as_str(), messages))
    }

    /// Number of locales, reference included.
    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }
}
