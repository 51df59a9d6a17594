//! Bracket- and barrier-aware grouping of a character stream.
//!
//! The grouper pulls characters from a [`CharCursor`] through a
//! [`SequenceFinder`] configured with every delimiter literal. Bracket pairs
//! adjust a per-pair depth counter, barriers flip a per-barrier toggle. The
//! stream is at *top level* while every depth is zero and every toggle is off.
//!
//! Leaving top level ends the plain text before the delimiter; returning to
//! it ends a wrapped group that runs from the delimiter that left top level
//! through the one that came back. Nested delimiters in between are part of
//! the wrapped group's text.

use std::mem;

use log::{debug, trace};

use crate::config::{Delimiter, DelimiterTable, GrouperConfig};
use crate::cursor::{CharCursor, StrCursor};
use crate::error::ConfigError;
use crate::group::{Group, WrapType};
use crate::sequence::SequenceFinder;


/// Splits a character stream into [`Group`]s.
///
/// Groups are produced lazily by [`next_group`](Self::next_group) (or the
/// [`Iterator`] impl). The last group of every run is a plain group holding
/// whatever followed the final delimited group, possibly empty.
pub struct Grouper<C: CharCursor> {
    cursor: C,
    /// Lookahead: `Some(c)` once the next character has been pulled.
    peeked: Option<Option<char>>,
    config: GrouperConfig,
    table: DelimiterTable,
    finder: SequenceFinder,
    /// Nesting level per bracket pair. Negative after a stray closer.
    depths: Vec<isize>,
    /// Inside/outside per barrier.
    toggles: Vec<bool>,
    active: bool,
    /// Literal that left top level, while not active.
    opened_by: Option<(String, WrapType)>,
    buffer: String,
    finished: bool,
}

impl<C: CharCursor> Grouper<C> {
    pub fn new(config: GrouperConfig, cursor: C) -> Result<Self, ConfigError> {
        let table = config.delimiter_table()?;
        let finder = SequenceFinder::new(config.literals())?;
        debug!(
            "grouper: {} bracket pair(s), {} barrier(s), include_empty={}",
            table.pairs,
            table.barriers.len(),
            config.include_empty
        );
        Ok(Self {
            cursor,
            peeked: None,
            depths: vec![0; table.pairs],
            toggles: vec![false; table.barriers.len()],
            config,
            table,
            finder,
            active: true,
            opened_by: None,
            buffer: String::new(),
            finished: false,
        })
    }

    pub fn config(&self) -> &GrouperConfig {
        &self.config
    }

    /// Start over from the beginning of the stream, optionally with a new
    /// cursor and/or configuration.
    ///
    /// An invalid configuration is rejected before anything is reset.
    pub fn reset(&mut self, cursor: Option<C>, config: Option<GrouperConfig>) -> Result<(), ConfigError> {
        if let Some(config) = config {
            let table = config.delimiter_table()?;
            let finder = SequenceFinder::new(config.literals())?;
            debug!(
                "grouper reconfigured: {} bracket pair(s), {} barrier(s), include_empty={}",
                table.pairs,
                table.barriers.len(),
                config.include_empty
            );
            self.config = config;
            self.table = table;
            self.finder = finder;
        }
        match cursor {
            Some(cursor) => self.cursor = cursor,
            None => self.cursor.rewind(),
        }
        self.restart();
        Ok(())
    }

    /// Start over from the beginning of the current stream.
    pub fn rewind(&mut self) {
        self.cursor.rewind();
        self.restart();
    }

    fn restart(&mut self) {
        debug!("grouper restarted");
        self.peeked = None;
        self.finder.reset();
        self.depths = vec![0; self.table.pairs];
        self.toggles = vec![false; self.table.barriers.len()];
        self.active = true;
        self.opened_by = None;
        self.buffer.clear();
        self.finished = false;
    }

    /// Return the next group, or `None` once the stream is exhausted. Keeps
    /// returning `None` after that.
    pub fn next_group(&mut self) -> Option<Group> {
        if self.finished {
            return None;
        }
        loop {
            let Some(current) = self.bump() else {
                self.finished = true;
                let group = Group::plain(mem::take(&mut self.buffer));
                trace!("terminal group {:?}", group.text());
                return Some(group);
            };
            let next = self.peek();
            self.buffer.push(current);

            let Some(role) = self
                .finder
                .look(current, next)
                .and_then(|literal| self.table.roles.get(literal))
                .copied()
            else {
                continue;
            };

            let was_active = self.active;
            self.apply(role);
            if was_active == self.active {
                continue;
            }
            let group = if self.active {
                self.close_group(role)
            } else {
                self.open_group(role)
            };
            if group.is_some() {
                return group;
            }
        }
    }

    fn bump(&mut self) -> Option<char> {
        match self.peeked.take() {
            Some(c) => c,
            None => self.cursor.next(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = Some(self.cursor.next());
        }
        self.peeked.flatten()
    }

    /// Update depth or toggle for a matched delimiter, then recompute `active`.
    fn apply(&mut self, role: Delimiter) {
        match role {
            Delimiter::Open(pair) => self.depths[pair] += 1,
            Delimiter::Close(pair) => self.depths[pair] -= 1,
            Delimiter::Barrier(index) => self.toggles[index] = !self.toggles[index],
        }
        self.active = self.depths.iter().all(|&d| d == 0) && !self.toggles.contains(&true);
    }

    fn literal(&self, role: Delimiter) -> &str {
        match role {
            Delimiter::Open(pair) => &self.config.brackets[pair].0,
            Delimiter::Close(pair) => &self.config.brackets[pair].1,
            Delimiter::Barrier(index) => &self.table.barriers[index],
        }
    }

    /// Top level was just left: everything before `role`'s literal is plain.
    fn open_group(&mut self, role: Delimiter) -> Option<Group> {
        let literal = self.literal(role).to_string();
        let wrap_type = match role {
            Delimiter::Barrier(_) => WrapType::Barrier,
            Delimiter::Open(_) | Delimiter::Close(_) => WrapType::Brackets,
        };
        debug_assert!(self.buffer.ends_with(&literal));
        let prefix_len = self.buffer.len() - literal.len();
        self.opened_by = Some((literal, wrap_type));

        if prefix_len == 0 && !self.config.include_empty {
            trace!("suppressed empty plain group");
            return None;
        }
        let rest = self.buffer.split_off(prefix_len);
        let group = Group::plain(mem::replace(&mut self.buffer, rest));
        trace!("plain group {:?}", group.text());
        Some(group)
    }

    /// Top level was just regained: the buffer is one wrapped group.
    ///
    /// An empty wrapped group that is not returned stays in the buffer and
    /// becomes the start of the next plain group.
    fn close_group(&mut self, role: Delimiter) -> Option<Group> {
        let closing = self.literal(role).to_string();
        let (opening, wrap_type) = self.opened_by.take()?;
        let delimiters = opening.len() + closing.len();

        if self.buffer.len() <= delimiters && !self.config.include_empty {
            trace!("suppressed empty wrapped group {:?}", self.buffer);
            return None;
        }
        let group = Group::wrapped(mem::take(&mut self.buffer), opening, closing, wrap_type);
        trace!("{:?} group {:?}", group.wrap_type(), group.text());
        Some(group)
    }
}

impl<C: CharCursor> Iterator for Grouper<C> {
    type Item = Group;

    fn next(&mut self) -> Option<Group> {
        self.next_group()
    }
}

/// Group a string slice.
///
/// ```rust
/// use string_grouper::{GrouperConfig, group_str};
///
/// let config = GrouperConfig::new().with_barrier("\"");
/// let texts: Vec<String> = group_str("a\"b\"c", config)
///     .unwrap()
///     .map(String::from)
///     .collect();
/// assert_eq!(texts, ["a", "\"b\"", "c"]);
/// ```
pub fn group_str(text: &str, config: GrouperConfig) -> Result<Grouper<StrCursor<'_>>, ConfigError> {
    Grouper::new(config, StrCursor::new(text))
}
