//! Streaming literal matching and delimiter-aware text grouping.
//!
//! A [`Grouper`] splits text into [`Group`]s at bracket pairs and barriers
//! (literals such as quote marks that open and close themselves). Literals
//! may be several characters long; they are recognised by a
//! [`SequenceFinder`], which sees one character plus one of lookahead and
//! always prefers the longest literal.
//!
//! # Example
//!
//! ```rust
//! use string_grouper::{GrouperConfig, WrapType, group_str};
//!
//! let config = GrouperConfig::new()
//!     .with_bracket("(", ")")
//!     .with_barrier("\"");
//!
//! let groups: Vec<_> = group_str("call(a, (b)) \"text\"", config).unwrap().collect();
//!
//! assert_eq!(groups[0].text(), "call");
//! assert_eq!(groups[1].text(), "(a, (b))");
//! assert_eq!(groups[1].unwrapped(), "a, (b)");
//! assert_eq!(groups[2].text(), " ");
//! assert_eq!(groups[3].wrap_type(), WrapType::Barrier);
//! assert_eq!(groups[3].unwrapped(), "text");
//!
//! // Nothing is lost: the groups add up to the input.
//! let joined: String = groups.iter().map(|g| g.text()).collect();
//! assert_eq!(joined, "call(a, (b)) \"text\"");
//! ```

mod config;
mod cursor;
mod error;
mod group;
mod grouper;
pub mod sequence;

pub use config::GrouperConfig;
pub use cursor::{CharCursor, RopeCursor, StrCursor};
pub use error::ConfigError;
pub use group::{Group, WrapType};
pub use grouper::{Grouper, group_str};
pub use sequence::{SequenceFinder, SequenceMatch};
