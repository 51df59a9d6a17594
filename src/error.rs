use thiserror::Error;

/// Errors raised while building a [`SequenceFinder`](crate::SequenceFinder)
/// or a [`Grouper`](crate::Grouper) from a configuration.
///
/// There are no runtime errors: unbalanced input degrades the grouping but
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A literal of length zero can never be matched.
    #[error("empty literal in sequence set")]
    EmptyLiteral,
    /// A bracket literal appears more than once across all openings and closings.
    #[error("bracket literal {0:?} is used more than once")]
    DuplicateBracket(String),
    /// A barrier is also configured as a bracket opening or closing.
    #[error("barrier {0:?} is also used as a bracket literal")]
    BarrierCollision(String),
    /// No preset with this name exists.
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}
