//! Error types for symbol construction.
//!
//! Every failure is a validation failure raised while a value is being built; nothing is
//! ever mutated after construction, so there is no partial state to recover from.

use thiserror::Error;

use crate::interfaces::Dimension;

/// Result type alias using `NotationError`.
pub type Result<T> = std::result::Result<T, NotationError>;

/// Errors raised while parsing or constructing axes and symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NotationError {
    /// Zero rotation order, unreadable token, or a glide letter outside the alphabet.
    #[error("InvalidAxis: {0}")]
    InvalidAxis(String),

    /// Centering letter outside the alphabet of the dimension.
    #[error("InvalidCentering: '{centering}' is not a valid {dimension} centering")]
    InvalidCentering { centering: char, dimension: Dimension },

    /// A space group axis whose order breaks the crystallographic restriction.
    #[error("InvalidRotationOrder: a {order}-fold axis is not allowed in a space group")]
    InvalidRotationOrder { order: u32 },

    /// Table index outside 1..=len.
    #[error("IndexOutOfRange: no {dimension} symbol at index {index} (valid range 1..={len})")]
    IndexOutOfRange {
        dimension: Dimension,
        index: usize,
        len: usize,
    },

    /// More axis tokens than the dimension has directions.
    #[error("TooManyAxes: a {dimension} symbol holds {expected} axes, found {found}")]
    TooManyAxes {
        dimension: Dimension,
        expected: usize,
        found: usize,
    },

    /// Symbols are only defined for 1, 2 and 3 dimensions.
    #[error("UnsupportedDimension: {0}D symbols are not supported")]
    UnsupportedDimension(usize),

    /// Operation with a documented contract but no implementation.
    #[error("NotImplemented: {0}")]
    NotImplemented(String),
}
