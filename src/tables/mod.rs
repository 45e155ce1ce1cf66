// Tables module: Contains the indexed sources of canonical symbols
// This module provides the lookup that turns a group number into a notation string

// ======================== MODULE DECLARATIONS ========================
pub mod space_group_symbols;
pub mod symbol_source;


// ======================== SYMBOL SOURCES ========================
pub use symbol_source::{
    StandardSymbols, // struct - built-in tables (2 line, 17 plane, 230 space groups)
    SymbolSource,    // trait - read-only lookup by dimension and 1-based index
};
// SymbolSource trait methods:
//   len(&self, dimension: Dimension) -> usize                               - number of listed symbols
//   lookup(&self, dimension: Dimension, index: usize) -> Result<&str>       - notation string, IndexOutOfRange past the end
//   position(&self, dimension: Dimension, notation: &str) -> Option<usize>  - reverse lookup (1-based)

// ======================== RAW TABLES ========================
pub use space_group_symbols::{
    LINE_GROUP_SYMBOLS,  // [&str; 2] - line groups
    PLANE_GROUP_SYMBOLS, // [&str; 17] - plane groups
    SPACE_GROUP_SYMBOLS, // [&str; 230] - space groups, canonical long form
};
