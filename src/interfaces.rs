// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NotationError, Result};

// Enumeration for dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    _1D,
    _2D,
    _3D,
}

impl Dimension {
    /// Map a spatial rank (number of axes) onto a supported dimension.
    pub fn from_rank(rank: usize) -> Result<Self> {
        match rank {
            1 => Ok(Dimension::_1D),
            2 => Ok(Dimension::_2D),
            3 => Ok(Dimension::_3D),
            other => Err(NotationError::UnsupportedDimension(other)),
        }
    }

    pub fn rank(self) -> usize {
        match self {
            Dimension::_1D => 1,
            Dimension::_2D => 2,
            Dimension::_3D => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.rank())
    }
}
