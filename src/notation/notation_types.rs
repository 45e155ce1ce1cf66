use serde::{Deserialize, Serialize};
use std::fmt;

/// Reflection and glide operations that can sit on an axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Glide {
    AxialA,   // a
    AxialB,   // b
    AxialC,   // c
    Diamond,  // d
    Double,   // e
    Line,     // g (2D glide line)
    Mirror,   // m
    Diagonal, // n
}

impl Glide {
    /// Read a glide letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Glide::AxialA),
            'b' => Some(Glide::AxialB),
            'c' => Some(Glide::AxialC),
            'd' => Some(Glide::Diamond),
            'e' => Some(Glide::Double),
            'g' => Some(Glide::Line),
            'm' => Some(Glide::Mirror),
            'n' => Some(Glide::Diagonal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glide::AxialA => 'a',
            Glide::AxialB => 'b',
            Glide::AxialC => 'c',
            Glide::Diamond => 'd',
            Glide::Double => 'e',
            Glide::Line => 'g',
            Glide::Mirror => 'm',
            Glide::Diagonal => 'n',
        }
    }
}

impl fmt::Display for Glide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Lattice centerings that can lead a space group symbol.
///
/// Which of them are legal depends on the dimension, see
/// [`valid_centerings`](crate::notation::validation::valid_centerings).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Centering {
    Primitive,    // P
    BaseA,        // A
    BaseB,        // B
    BaseC,        // C
    BodyCentered, // I
    FaceCentered, // F
    Rhombohedral, // R
    Hexagonal,    // H
}

impl Centering {
    /// Read a centering letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(Centering::Primitive),
            'A' => Some(Centering::BaseA),
            'B' => Some(Centering::BaseB),
            'C' => Some(Centering::BaseC),
            'I' => Some(Centering::BodyCentered),
            'F' => Some(Centering::FaceCentered),
            'R' => Some(Centering::Rhombohedral),
            'H' => Some(Centering::Hexagonal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Centering::Primitive => 'P',
            Centering::BaseA => 'A',
            Centering::BaseB => 'B',
            Centering::BaseC => 'C',
            Centering::BodyCentered => 'I',
            Centering::FaceCentered => 'F',
            Centering::Rhombohedral => 'R',
            Centering::Hexagonal => 'H',
        }
    }

    pub fn is_primitive(self) -> bool {
        self == Centering::Primitive
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The seven 3D crystal systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

impl CrystalSystem {
    /// Crystal family: trigonal folds into hexagonal, everything else is unchanged.
    pub fn family(self) -> Self {
        match self {
            CrystalSystem::Trigonal => CrystalSystem::Hexagonal,
            other => other,
        }
    }
}
