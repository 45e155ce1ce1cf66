// Validation rules shared by the axis and symbol constructors: the crystallographic
// restriction and the per-dimension centering alphabets.

use crate::config::{CENTERINGS_1D, CENTERINGS_2D, CENTERINGS_3D, CRYSTALLOGRAPHIC_ORDERS};
use crate::error::{NotationError, Result};
use crate::interfaces::Dimension;
use crate::notation::notation_types::{Centering, Glide};

/// Whether a rotation order is compatible with a lattice (1, 2, 3, 4 or 6).
pub fn is_crystallographic(order: u32) -> bool {
    CRYSTALLOGRAPHIC_ORDERS.contains(&order)
}

/// Fail with `InvalidRotationOrder` unless `order` passes the crystallographic restriction.
pub fn check_rotation_order(order: u32) -> Result<()> {
    if is_crystallographic(order) {
        Ok(())
    } else {
        Err(NotationError::InvalidRotationOrder { order })
    }
}

/// Centering letters allowed in the given dimension.
pub fn valid_centerings(dimension: Dimension) -> &'static [char] {
    match dimension {
        Dimension::_1D => CENTERINGS_1D,
        Dimension::_2D => CENTERINGS_2D,
        Dimension::_3D => CENTERINGS_3D,
    }
}

pub fn is_valid_centering(centering: Centering, dimension: Dimension) -> bool {
    valid_centerings(dimension).contains(&centering.as_char())
}

/// Read a centering letter (any case) and check it against the dimension's alphabet.
pub fn check_centering(c: char, dimension: Dimension) -> Result<Centering> {
    match Centering::from_char(c) {
        Some(centering) if is_valid_centering(centering, dimension) => Ok(centering),
        _ => Err(NotationError::InvalidCentering {
            centering: c,
            dimension,
        }),
    }
}

/// Read a glide letter (any case) and check it against the glide alphabet.
pub fn check_glide(c: char) -> Result<Glide> {
    Glide::from_char(c).ok_or_else(|| {
        NotationError::InvalidAxis(format!("'{}' is not a reflection or glide symbol", c))
    })
}
