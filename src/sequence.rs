//! Streaming multi-literal matcher.
//!
//! [`SequenceFinder`] recognises any of a set of literals while text is fed
//! to it one character at a time, with a single character of lookahead.
//! When literals share a prefix (`=`, `==`, `===`) the longest one wins.
//!
//! ```rust
//! use string_grouper::SequenceFinder;
//!
//! let mut finder = SequenceFinder::new([":=", "+"]).unwrap();
//! let text: Vec<char> = "a := x + 7".chars().collect();
//! let mut found = Vec::new();
//! for (i, &c) in text.iter().enumerate() {
//!     if let Some(seq) = finder.look(c, text.get(i + 1).copied()) {
//!         found.push(seq.to_string());
//!     }
//! }
//! assert_eq!(found, [":=", "+"]);
//! ```

use itertools::Itertools;
use log::debug;

use crate::error::ConfigError;

/// A literal, kept both as text (for callers) and as chars (for indexing).
#[derive(Debug, Clone)]
struct Literal {
    text: String,
    chars: Vec<char>,
}

/// One literal found by [`SequenceFinder::find_all`].
///
/// `start` and `end` are **character** (not byte) indices; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceMatch {
    pub start: usize,
    pub end: usize,
    pub literal: String,
}

/// Maximal-munch matcher over a fixed set of literals.
///
/// Call [`look`](Self::look) once per character, left to right, passing the
/// character that follows (or `None` at the end of the text). A literal is
/// reported on the call for its last character.
#[derive(Debug, Clone, Default)]
pub struct SequenceFinder {
    /// De-duplicated literals in first-seen order.
    sequences: Vec<Literal>,
    /// Indices into `sequences` still consistent with the consumed prefix.
    candidates: Vec<usize>,
    /// Characters matched so far, shared by every candidate.
    progress: usize,
}

impl SequenceFinder {
    /// Create a finder for `sequences`. Duplicates are dropped, order is kept.
    pub fn new<I, S>(sequences: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut finder = Self::default();
        finder.reset_with(sequences)?;
        Ok(finder)
    }

    /// Forget any partial match. Use this when moving back to the start of
    /// the text.
    pub fn reset(&mut self) {
        self.progress = 0;
        self.candidates.clear();
        self.candidates.extend(0..self.sequences.len());
    }

    /// Replace the literal set and reset.
    ///
    /// On error the finder keeps its previous literals.
    pub fn reset_with<I, S>(&mut self, sequences: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = sequences.into_iter().map(Into::into).unique().collect();
        if texts.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyLiteral);
        }
        debug!("sequence finder: {} literal(s) [{}]", texts.len(), texts.iter().join(" "));
        self.sequences = texts
            .into_iter()
            .map(|text| Literal {
                chars: text.chars().collect(),
                text,
            })
            .collect();
        self.reset();
        Ok(())
    }

    /// Feed one character.
    ///
    /// Returns the literal that ends at `c`, or `None` if nothing ended here
    /// or a longer literal could still continue with `next`.
    pub fn look(&mut self, c: char, next: Option<char>) -> Option<&str> {
        if self.sequences.is_empty() {
            return None;
        }

        let progress = self.progress;
        let sequences = &self.sequences;
        self.candidates
            .retain(|&i| sequences[i].chars.get(progress) == Some(&c));

        if self.candidates.is_empty() {
            self.reset();
            return None;
        }
        debug_assert!(self.candidates_agree(progress + 1));

        // Only one candidate can end here: equal length and equal prefix
        // means equal literal, and the set is de-duplicated.
        let completed = self
            .candidates
            .iter()
            .copied()
            .find(|&i| sequences[i].chars.len() == progress + 1);

        let can_continue = next.is_some_and(|n| {
            self.candidates
                .iter()
                .any(|&i| sequences[i].chars.get(progress + 1) == Some(&n))
        });

        if can_continue {
            self.progress += 1;
            None
        } else {
            self.reset();
            completed.map(|i| self.sequences[i].text.as_str())
        }
    }

    /// Scan all of `text` and return every literal found, in order.
    ///
    /// Resets before and after the scan.
    pub fn find_all(&mut self, text: &str) -> Vec<SequenceMatch> {
        self.reset();
        let mut matches = Vec::new();
        let mut chars = text.chars().peekable();
        let mut pos = 0usize;
        while let Some(c) = chars.next() {
            let next = chars.peek().copied();
            if let Some(literal) = self.look(c, next) {
                let len = literal.chars().count();
                matches.push(SequenceMatch {
                    start: pos + 1 - len,
                    end: pos + 1,
                    literal: literal.to_string(),
                });
            }
            pos += 1;
        }
        self.reset();
        matches
    }

    /// The literal set, de-duplicated, in configuration order.
    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(|l| l.text.as_str())
    }

    /// Number of characters of the current partial match.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// True if no literals are configured (the finder never matches).
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Every candidate agrees with every other on its first `len` characters.
    fn candidates_agree(&self, len: usize) -> bool {
        let Some(&first) = self.candidates.first() else {
            return true;
        };
        let head = self.sequences[first].chars.get(..len);
        head.is_some()
            && self
                .candidates
                .iter()
                .all(|&i| self.sequences[i].chars.get(..len) == head)
    }
}
