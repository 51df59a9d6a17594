//! Segments emitted by the grouper.

use std::fmt;

/// How a [`Group`] is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapType {
    /// Top-level text between delimited groups.
    Plain,
    /// Wrapped by an opening and a (different) closing literal.
    Brackets,
    /// Wrapped by the same literal on both ends, e.g. quote marks.
    Barrier,
}

/// One segment of the input.
///
/// `text` is the exact source text, delimiters included. Concatenating the
/// text of every group in order gives back the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    text: String,
    opening: Option<String>,
    closing: Option<String>,
    wrap_type: WrapType,
}

impl Group {
    /// Create a group, inferring the wrap type: plain if either delimiter is
    /// missing, barrier if they are equal, brackets otherwise.
    pub fn new(text: String, opening: Option<String>, closing: Option<String>) -> Self {
        let wrap_type = match (&opening, &closing) {
            (Some(o), Some(c)) if o == c => WrapType::Barrier,
            (Some(_), Some(_)) => WrapType::Brackets,
            _ => WrapType::Plain,
        };
        if wrap_type == WrapType::Plain {
            return Self::plain(text);
        }
        Self {
            text,
            opening,
            closing,
            wrap_type,
        }
    }

    /// An unwrapped group.
    pub fn plain(text: String) -> Self {
        Self {
            text,
            opening: None,
            closing: None,
            wrap_type: WrapType::Plain,
        }
    }

    pub(crate) fn wrapped(text: String, opening: String, closing: String, wrap_type: WrapType) -> Self {
        Self {
            text,
            opening: Some(opening),
            closing: Some(closing),
            wrap_type,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn opening(&self) -> Option<&str> {
        self.opening.as_deref()
    }

    pub fn closing(&self) -> Option<&str> {
        self.closing.as_deref()
    }

    pub fn wrap_type(&self) -> WrapType {
        self.wrap_type
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrap_type != WrapType::Plain
    }

    /// The text without its opening and closing literals. Same as
    /// [`text`](Self::text) for plain groups.
    ///
    /// Empty if the text is too short to hold both delimiters.
    pub fn unwrapped(&self) -> &str {
        let (Some(opening), Some(closing)) = (&self.opening, &self.closing) else {
            return &self.text;
        };
        let end = self.text.len().saturating_sub(closing.len());
        self.text.get(opening.len()..end).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_empty_unwrapped(&self) -> bool {
        self.unwrapped().is_empty()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Group {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Group> for String {
    fn from(group: Group) -> Self {
        group.text
    }
}
