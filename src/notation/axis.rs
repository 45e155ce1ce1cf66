use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NotationError, Result};
use crate::notation::notation_types::Glide;
use crate::notation::subscripts::{
    digits_to_subscript, subscript_to_digit, to_subscript, to_underscore,
};
use crate::notation::validation::check_glide;

/// One component of a Hermann-Mauguin symbol: the operation seen along one direction.
///
/// Negative rotations are rotoinversions (`-3` is a threefold rotoinversion). A screw
/// order is only kept for proper rotations and always satisfies `screw < rotation`.
/// A glide or mirror on a onefold axis is a plain reflection (`m`, `c`, ...).
///
/// Serialized field by field; the rendered token is lossy (`-4` hides a glide, `-2`
/// reads back as `m`). Deserialized fields pass through [`Axis::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AxisFields")]
pub struct Axis {
    rotation: i32,
    screw: u32,
    glide: Option<Glide>,
}

impl Axis {
    /// The trivial axis `1`.
    pub const IDENTITY: Axis = Axis {
        rotation: 1,
        screw: 0,
        glide: None,
    };

    /// The inversion centre `-1`.
    pub const INVERSION: Axis = Axis {
        rotation: -1,
        screw: 0,
        glide: None,
    };

    /// A plain mirror `m`.
    pub const MIRROR: Axis = Axis {
        rotation: 1,
        screw: 0,
        glide: Some(Glide::Mirror),
    };

    /// Build an axis from its components.
    ///
    /// Fails with `InvalidAxis` for a zero rotation or a glide letter outside
    /// `{a, b, c, d, e, g, m, n}` (any case). The screw order is reduced modulo the
    /// rotation for proper rotations and dropped for rotoinversions.
    pub fn new(rotation: i32, screw: u32, glide: Option<char>) -> Result<Self> {
        let glide = glide.map(check_glide).transpose()?;
        Self::from_parts(rotation, screw, glide)
    }

    /// Same as [`Axis::new`] with an already typed glide.
    pub fn from_parts(rotation: i32, screw: u32, glide: Option<Glide>) -> Result<Self> {
        if rotation == 0 {
            return Err(NotationError::InvalidAxis(
                "rotation order must be nonzero".to_string(),
            ));
        }
        let screw = if rotation > 0 {
            screw % rotation.unsigned_abs()
        } else {
            0
        };
        Ok(Axis {
            rotation,
            screw,
            glide,
        })
    }

    pub fn from_rotation(rotation: i32) -> Result<Self> {
        Self::new(rotation, 0, None)
    }

    pub fn from_screw(rotation: i32, screw: u32) -> Result<Self> {
        Self::new(rotation, screw, None)
    }

    pub fn from_rotation_glide(rotation: i32, glide: char) -> Result<Self> {
        Self::new(rotation, 0, Some(glide))
    }

    /// A reflection or glide on a trivial axis.
    pub fn from_glide(glide: char) -> Result<Self> {
        Self::new(1, 0, Some(glide))
    }

    /// Parse a single axis token such as `4_2/m`, `4₂/m`, `-3`, `c` or `2`.
    ///
    /// An empty token is the identity. A token starting with `-2` is read as a plain
    /// mirror, since the twofold rotoinversion is the mirror perpendicular to it.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(Self::IDENTITY);
        }
        if token.starts_with("-2") {
            debug!("reading '{}' as a plain mirror", token);
            return Ok(Self::MIRROR);
        }

        let token = to_subscript(token);
        let rotation = scan_rotation(&token)?;
        let screw = scan_screw(&token, rotation);
        let glide = token.chars().find(|c| c.is_alphabetic());
        Self::new(rotation, screw, glide)
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn screw(&self) -> u32 {
        self.screw
    }

    pub fn glide(&self) -> Option<Glide> {
        self.glide
    }

    /// Order of the operation: `|rotation|`, except that a reflection on a onefold
    /// axis counts as order 2.
    pub fn order(&self) -> u32 {
        let order = self.rotation.unsigned_abs();
        if order == 1 && self.glide.is_some() {
            2
        } else {
            order
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == 1 && self.glide.is_none()
    }

    pub fn is_rotoinversion(&self) -> bool {
        self.rotation < 0
    }

    /// Rendered form with `_digit` screws instead of subscripts (`4_2/m`).
    pub fn to_ascii_string(&self) -> String {
        to_underscore(&self.to_string())
    }
}

// Unchecked mirror of `Axis` for deserialization.
#[derive(Deserialize)]
struct AxisFields {
    rotation: i32,
    screw: u32,
    glide: Option<Glide>,
}

impl TryFrom<AxisFields> for Axis {
    type Error = NotationError;

    fn try_from(fields: AxisFields) -> Result<Self> {
        Self::from_parts(fields.rotation, fields.screw, fields.glide)
    }
}

// Rotation sign and magnitude from ASCII digits and minus signs (hyphen or en-dash).
fn scan_rotation(token: &str) -> Result<i32> {
    let digits: String = token
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            '-' | '\u{2013}' => Some('-'),
            _ => None,
        })
        .collect();
    if digits.is_empty() {
        return Ok(1);
    }
    digits.parse().map_err(|_| {
        NotationError::InvalidAxis(format!("cannot read a rotation order from '{}'", token))
    })
}

// Screw order from the subscript digits, reduced modulo the rotation while scanning so
// arbitrarily long subscripts cannot overflow. Rotoinversions carry no screw, and a
// zero rotation is rejected by the constructor afterwards.
fn scan_screw(token: &str, rotation: i32) -> u32 {
    if rotation <= 0 {
        return 0;
    }
    let modulus = u64::from(rotation.unsigned_abs());
    let screw = token
        .chars()
        .filter_map(subscript_to_digit)
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| (acc * 10 + u64::from(digit)) % modulus);
    // screw < modulus <= i32::MAX
    screw as u32
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // rotoinversions never show screw or glide
        if self.rotation < 0 {
            return write!(f, "{}", self.rotation);
        }
        if let (1, Some(glide)) = (self.rotation, self.glide) {
            return write!(f, "{}", glide);
        }
        write!(f, "{}", self.rotation)?;
        if self.screw != 0 {
            write!(f, "{}", digits_to_subscript(self.screw))?;
        }
        if let Some(glide) = self.glide {
            write!(f, "/{}", glide)?;
        }
        Ok(())
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FromStr for Axis {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Axis {
    type Error = NotationError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Axis {
    type Error = NotationError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Axis> for String {
    fn from(axis: Axis) -> Self {
        axis.to_string()
    }
}
