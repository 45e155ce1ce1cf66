use log::trace;

use crate::error::{NotationError, Result};
use crate::interfaces::Dimension;
use crate::tables::space_group_symbols::{
    LINE_GROUP_SYMBOLS, PLANE_GROUP_SYMBOLS, SPACE_GROUP_SYMBOLS,
};

/// Read-only lookup of canonical notation strings by dimension and 1-based index.
///
/// Implementations must be fully populated before the first lookup; symbols only
/// ever read from them.
pub trait SymbolSource {
    /// Number of symbols listed for `dimension`.
    fn len(&self, dimension: Dimension) -> usize;

    /// Notation string at `index` (1-based). Fails with `IndexOutOfRange`.
    fn lookup(&self, dimension: Dimension, index: usize) -> Result<&str>;

    /// Index of `notation` in the table of `dimension`, if listed.
    fn position(&self, dimension: Dimension, notation: &str) -> Option<usize> {
        (1..=self.len(dimension)).find(|&index| {
            self.lookup(dimension, index)
                .map_or(false, |entry| entry == notation)
        })
    }
}

/// The built-in tables: 2 line groups, 17 plane groups and 230 space groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSymbols;

impl StandardSymbols {
    fn symbols(dimension: Dimension) -> &'static [&'static str] {
        match dimension {
            Dimension::_1D => &LINE_GROUP_SYMBOLS,
            Dimension::_2D => &PLANE_GROUP_SYMBOLS,
            Dimension::_3D => &SPACE_GROUP_SYMBOLS,
        }
    }
}

impl SymbolSource for StandardSymbols {
    fn len(&self, dimension: Dimension) -> usize {
        Self::symbols(dimension).len()
    }

    fn lookup(&self, dimension: Dimension, index: usize) -> Result<&str> {
        let symbols = Self::symbols(dimension);
        trace!("looking up {} symbol #{}", dimension, index);
        index
            .checked_sub(1)
            .and_then(|i| symbols.get(i))
            .copied()
            .ok_or(NotationError::IndexOutOfRange {
                dimension,
                index,
                len: symbols.len(),
            })
    }
}
