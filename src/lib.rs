//! Hermann-Mauguin notation library
//!
//! This library parses, validates and renders Hermann-Mauguin symbols of point groups and
//! space groups in one, two and three dimensions, and derives the short form of a symbol
//! from its long form.
//!
//! ```
//! use hermann_mauguin::HermannMauguin3D;
//!
//! let fd3m: HermannMauguin3D = "F 4_1/d -3 2/m".parse().unwrap();
//! assert_eq!(fd3m.long_form(), "F 4₁/d -3 2/m");
//! assert_eq!(fd3m.short_form(), "Fd-3m");
//! ```

pub mod config;
pub mod error;
pub mod interfaces;
pub mod notation;
pub mod tables;

pub use error::{NotationError, Result};
pub use interfaces::Dimension;
pub use notation::{
    Axis, Centering, CrystalSystem, Glide, HermannMauguin, HermannMauguin1D, HermannMauguin2D,
    HermannMauguin3D,
};
pub use tables::{StandardSymbols, SymbolSource};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
