//! Grouper configuration: bracket pairs, barriers and named presets.

use std::collections::HashMap;

use itertools::Itertools;
use phf::{Map, phf_map};

use crate::error::ConfigError;

/// What the grouper should split on.
///
/// Bracket pairs nest; barriers toggle (the same literal opens and closes).
/// With `include_empty` unset, groups with nothing in them are not returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrouperConfig {
    pub brackets: Vec<(String, String)>,
    pub barriers: Vec<String>,
    pub include_empty: bool,
}

struct Preset {
    brackets: &'static [(&'static str, &'static str)],
    barriers: &'static [&'static str],
}

/// Built-in configurations, selectable by name.
/// Please keep names sorted alphabetically.
const PRESETS: Map<&'static str, Preset> = phf_map! {
    "code" => Preset {
        brackets: &[("(", ")"), ("[", "]"), ("{", "}")],
        barriers: &["\"", "'"],
    },
    "markup" => Preset {
        brackets: &[("<!--", "-->"), ("<", ">")],
        barriers: &[],
    },
    "parens" => Preset {
        brackets: &[("(", ")")],
        barriers: &[],
    },
    "quotes" => Preset {
        brackets: &[],
        barriers: &["\"", "'", "`"],
    },
};

impl GrouperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a built-in configuration by name.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        let preset = PRESETS
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        Ok(Self {
            brackets: preset
                .brackets
                .iter()
                .map(|&(o, c)| (o.to_string(), c.to_string()))
                .collect(),
            barriers: preset.barriers.iter().map(|b| b.to_string()).collect(),
            include_empty: false,
        })
    }

    /// Names accepted by [`preset`](Self::preset), sorted.
    pub fn preset_names() -> Vec<&'static str> {
        PRESETS.keys().copied().sorted().collect()
    }

    pub fn with_bracket(mut self, opening: impl Into<String>, closing: impl Into<String>) -> Self {
        self.brackets.push((opening.into(), closing.into()));
        self
    }

    pub fn with_barrier(mut self, barrier: impl Into<String>) -> Self {
        self.barriers.push(barrier.into());
        self
    }

    pub fn include_empty(mut self, include_empty: bool) -> Self {
        self.include_empty = include_empty;
        self
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delimiter_table().map(|_| ())
    }

    /// Every literal the matcher must look for: barriers first, then each
    /// bracket's opening and closing.
    pub(crate) fn literals(&self) -> impl Iterator<Item = &str> {
        self.barriers
            .iter()
            .map(String::as_str)
            .chain(self.brackets.iter().flat_map(|(o, c)| [o.as_str(), c.as_str()]))
    }

    /// Validate and index the delimiters.
    pub(crate) fn delimiter_table(&self) -> Result<DelimiterTable, ConfigError> {
        if self.literals().any(str::is_empty) {
            return Err(ConfigError::EmptyLiteral);
        }

        let mut roles = HashMap::new();
        for (pair, (opening, closing)) in self.brackets.iter().enumerate() {
            if roles.insert(opening.clone(), Delimiter::Open(pair)).is_some() {
                return Err(ConfigError::DuplicateBracket(opening.clone()));
            }
            if roles.insert(closing.clone(), Delimiter::Close(pair)).is_some() {
                return Err(ConfigError::DuplicateBracket(closing.clone()));
            }
        }

        let barriers: Vec<String> = self.barriers.iter().unique().cloned().collect();
        for (index, barrier) in barriers.iter().enumerate() {
            if roles.insert(barrier.clone(), Delimiter::Barrier(index)).is_some() {
                return Err(ConfigError::BarrierCollision(barrier.clone()));
            }
        }

        Ok(DelimiterTable {
            roles,
            pairs: self.brackets.len(),
            barriers,
        })
    }
}

/// The role a matched literal plays. Indices refer to bracket pairs in
/// configuration order, or to barriers after de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    Open(usize),
    Close(usize),
    Barrier(usize),
}

#[derive(Debug)]
pub(crate) struct DelimiterTable {
    pub roles: HashMap<String, Delimiter>,
    pub pairs: usize,
    /// Barriers after de-duplication, indexed by [`Delimiter::Barrier`].
    pub barriers: Vec<String>,
}
