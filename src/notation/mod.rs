// Notation module: Contains the Hermann-Mauguin axis and symbol types
// This module provides parsing, validation and long/short rendering of point and space group symbols

// ======================== MODULE DECLARATIONS ========================
pub mod axis;
pub mod hermann_mauguin;
pub mod notation_types;
pub mod subscripts;
pub mod symbol_forms;
pub mod validation;

mod _tests_hermann_mauguin;

// ======================== NOTATION ENUMS ========================
pub use notation_types::{
    Centering,     // enum - lattice centering letters (P, A, B, C, I, F, R, H)
    CrystalSystem, // enum - the seven crystal systems (Triclinic ... Cubic)
    Glide,         // enum - reflection/glide letters (a, b, c, d, e, g, m, n)
};

// ======================== AXIS ========================
pub use axis::Axis; // struct - rotation, screw order and glide along one direction
// Axis impl methods:
//   new(rotation: i32, screw: u32, glide: Option<char>) -> Result<Self>    - validated construction
//   from_parts(rotation: i32, screw: u32, glide: Option<Glide>) -> Result<Self>
//   from_rotation / from_screw / from_rotation_glide / from_glide          - partial component constructors
//   parse(token: &str) -> Result<Self>                                    - reads "4_2/m", "4₂/m", "-3", "c", ...
//   rotation(&self) -> i32, screw(&self) -> u32, glide(&self) -> Option<Glide>
//   order(&self) -> u32                                                   - |rotation|, 2 for a reflection on a 1-fold axis
//   is_identity(&self) -> bool, is_rotoinversion(&self) -> bool
//   to_ascii_string(&self) -> String                                      - "4_2/m" instead of "4₂/m"
//   IDENTITY, INVERSION, MIRROR                                           - constants

// ======================== HERMANN-MAUGUIN SYMBOLS ========================
pub use hermann_mauguin::{
    HermannMauguin,   // struct - centering + N axes
    HermannMauguin1D, // type - HermannMauguin<1>
    HermannMauguin2D, // type - HermannMauguin<2>
    HermannMauguin3D, // type - HermannMauguin<3>
};
// HermannMauguin<N> impl methods:
//   new(centering: Option<char>, axes: [Axis; N]) -> Result<Self>         - validated construction
//   from_parts(centering: Option<Centering>, axes: [Axis; N]) -> Result<Self>
//   point_group(axes: [Axis; N]) -> Result<Self>
//   parse(notation: &str) -> Result<Self>                                 - "F 4_1/d -3 2/m", "-6 m 2", ...
//   from_index(index: usize) -> Result<Self>                              - built-in table lookup (1-based)
//   from_index_in(source: &impl SymbolSource, index: usize) -> Result<Self>
//   table_index(&self) -> Option<usize>                                   - reverse table lookup
//   long_form(&self) -> String, long_form_ascii(&self) -> String, short_form(&self) -> String
//   axis_orders(&self) -> [u32; N]
//   is_point_group(&self) -> bool, is_space_group(&self) -> bool
//   standardize(&self) -> Result<Self>                                    - NotImplemented
// HermannMauguin<3> only:
//   crystal_system(&self) -> CrystalSystem

// ======================== SUBSCRIPT CODEC ========================
pub use subscripts::{
    digits_to_subscript, // fn(n: u32) -> String - "21" as "₂₁"
    to_subscript,        // fn(s: &str) -> String - "2_1" → "2₁"
    to_underscore,       // fn(s: &str) -> String - "2₁" → "2_1"
};

// ======================== VALIDATION RULES ========================
pub use validation::{
    is_crystallographic, // fn(order: u32) -> bool - order in {1, 2, 3, 4, 6}
    valid_centerings,    // fn(dimension: Dimension) -> &'static [char]
};
