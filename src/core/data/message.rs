use std::collections::HashMap;

/// Position information in message/locale files (JSON).
///
/// Represents the line where a translation key is defined, used for error
/// reporting when there are issues with its value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./messages/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// A single key/value pair of a locale file, together with where it was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The translation identifier (e.g., "welcome_title").
    pub key: String,
    /// The translated text. May be empty.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

/// All messages for a single locale.
///
/// Entries keep the order in which they were inserted (file order for parsed
/// files), so every traversal is deterministic.
#[derive(Debug, Clone, Default)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "de").
    pub locale: String,
    /// File path of the locale file.
    pub file_path: String,
    entries: Vec<MessageContext>,
    index: HashMap<String, usize>,
}

impl LocaleMessages {
    /// Create a new, empty LocaleMessages.
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entry. A key that already exists keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, context: MessageContext) {
        match self.index.get(&context.key) {
            Some(&i) => self.entries[i] = context,
            None => {
                self.index.insert(context.key.clone(), self.entries.len());
                self.entries.push(context);
            }
        }
    }

    /// Get a message entry by key.
    pub fn get(&self, key: &str) -> Option<&MessageContext> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MessageContext> {
        self.entries.iter()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
