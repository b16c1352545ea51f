//! Streaming markup tokenizer for translated strings.
//!
//! What counts as markup follows HTML tokenization: a `<` opens a tag only
//! when followed by a letter, `/`, `!` or `?`, otherwise it is text.
//! Comments, doctypes and processing instructions are skipped, and the
//! contents of raw text elements such as `<title>` or `<script>` are never
//! read as tags. Each tag is read with `quick_xml`'s pull reader in lenient
//! mode, which takes care of quoted attribute values and `/>`.

use quick_xml::{Reader, events::Event};

/// Elements whose contents are text up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "noscript",
    "plaintext",
    "script",
    "style",
    "textarea",
    "title",
    "xmp",
];

/// One markup token of a translated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupToken {
    /// Plain text, comments, declarations, processing instructions.
    Text,
    /// `<name ...>`
    Start(String),
    /// `</name>`
    End(String),
    /// `<name ... />`
    SelfClosing(String),
    /// The input could not be tokenized further. Always the last token.
    Error(String),
}

/// Lazy, finite sequence of [`MarkupToken`]s over a string.
///
/// Element names are ASCII-lowercased. A tag cut off by the end of input is
/// text. Ends after end of input or after the first [`MarkupToken::Error`].
pub struct MarkupTokens<'a> {
    input: &'a str,
    pos: usize,
    /// Set after the start tag of a raw text element.
    raw_text: Option<String>,
    finished: bool,
}

impl<'a> MarkupTokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_text: None,
            finished: false,
        }
    }

    fn text_to_end(&mut self) -> MarkupToken {
        self.pos = self.input.len();
        self.finished = true;
        MarkupToken::Text
    }

    fn skip_declaration(&mut self, rest: &str) -> MarkupToken {
        self.pos += declaration_end(rest);
        MarkupToken::Text
    }

    fn read_tag(&mut self, rest: &str) -> MarkupToken {
        let mut reader = Reader::from_str(rest);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        let token = match reader.read_event() {
            Ok(Event::Start(e)) => MarkupToken::Start(element_name(e.name().as_ref())),
            Ok(Event::End(e)) => MarkupToken::End(element_name(e.name().as_ref())),
            Ok(Event::Empty(e)) => MarkupToken::SelfClosing(element_name(e.name().as_ref())),
            Ok(_) => MarkupToken::Text,
            // Unclosed tag or quoted attribute value
            Err(quick_xml::Error::Syntax(_)) => return self.text_to_end(),
            Err(e) => {
                self.finished = true;
                return MarkupToken::Error(e.to_string());
            }
        };
        self.pos += reader.buffer_position() as usize;

        if let MarkupToken::Start(name) = &token
            && RAW_TEXT_ELEMENTS.contains(&name.as_str())
        {
            self.raw_text = Some(name.clone());
        }
        token
    }
}

impl Iterator for MarkupTokens<'_> {
    type Item = MarkupToken;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;

        loop {
            let rest = &input[self.pos..];
            if self.finished || rest.is_empty() {
                return None;
            }

            if let Some(element) = self.raw_text.take() {
                match raw_text_end(rest, &element) {
                    Some(0) => {}
                    Some(end) => {
                        self.pos += end;
                        return Some(MarkupToken::Text);
                    }
                    None => return Some(self.text_to_end()),
                }
            }

            match find_markup(rest) {
                Some(0) => {}
                Some(start) => {
                    self.pos += start;
                    return Some(MarkupToken::Text);
                }
                None => return Some(self.text_to_end()),
            }

            let bytes = rest.as_bytes();
            match bytes.get(1) {
                Some(b'!' | b'?') => return Some(self.skip_declaration(rest)),
                Some(b'/') => match bytes.get(2) {
                    Some(b'>') => {
                        // `</>` produces no token at all
                        self.pos += 3;
                        continue;
                    }
                    Some(c) if c.is_ascii_alphabetic() => {}
                    Some(_) => return Some(self.skip_declaration(rest)),
                    None => return Some(self.text_to_end()),
                },
                _ => {}
            }

            return Some(self.read_tag(rest));
        }
    }
}

/// Byte offset of the first `<` that starts markup.
fn find_markup(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&i| {
        bytes[i] == b'<'
            && bytes
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, b'/' | b'!' | b'?'))
    })
}

/// Length of the comment or declaration at the start of `text`.
fn declaration_end(text: &str) -> usize {
    let (from, terminator) = if text.starts_with("<!--") {
        (2, "-->")
    } else {
        (1, ">")
    };
    text[from..]
        .find(terminator)
        .map_or(text.len(), |i| from + i + terminator.len())
}

/// Byte offset of the end tag closing raw text `element`, if any.
fn raw_text_end(text: &str, element: &str) -> Option<usize> {
    if element == "plaintext" {
        return None;
    }
    let bytes = text.as_bytes();
    let name = element.as_bytes();
    text.match_indices("</").map(|(i, _)| i).find(|&i| {
        let after = i + 2 + name.len();
        bytes
            .get(i + 2..after)
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
            && bytes
                .get(after)
                .is_some_and(|b| b.is_ascii_whitespace() || matches!(b, b'/' | b'>'))
    })
}

fn element_name(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .position(|b| b.is_ascii_whitespace() || *b == b'/')
        .unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).to_ascii_lowercase()
}
