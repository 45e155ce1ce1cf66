use log::trace;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{NotationError, Result};
use crate::interfaces::Dimension;
use crate::notation::axis::Axis;
use crate::notation::notation_types::{Centering, CrystalSystem};
use crate::notation::validation::{check_centering, check_rotation_order, is_valid_centering};
use crate::tables::{StandardSymbols, SymbolSource};

/// A Hermann-Mauguin symbol in `N` dimensions: an optional centering letter followed
/// by one [`Axis`] per crystallographic direction.
///
/// Without centering the symbol is a point group, with centering a space group.
/// Space group axes must satisfy the crystallographic restriction. Values are
/// validated on construction and never change afterwards.
///
/// Serialized as its centering and the full axis list rather than the long form, which
/// drops identity and inversion-masked axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SymbolFields", into = "SymbolFields")]
pub struct HermannMauguin<const N: usize> {
    centering: Option<Centering>,
    axes: [Axis; N],
}

pub type HermannMauguin1D = HermannMauguin<1>;
pub type HermannMauguin2D = HermannMauguin<2>;
pub type HermannMauguin3D = HermannMauguin<3>;

impl<const N: usize> HermannMauguin<N> {
    /// Build a symbol from a centering letter (any case) and its axes.
    ///
    /// Fails with `InvalidCentering` if the letter is not legal in `N` dimensions and
    /// with `InvalidRotationOrder` if a space group carries a non-crystallographic axis.
    pub fn new(centering: Option<char>, axes: [Axis; N]) -> Result<Self> {
        let dimension = Dimension::from_rank(N)?;
        let centering = centering
            .map(|c| check_centering(c, dimension))
            .transpose()?;
        Self::from_parts(centering, axes)
    }

    /// Same as [`HermannMauguin::new`] with an already typed centering.
    pub fn from_parts(centering: Option<Centering>, axes: [Axis; N]) -> Result<Self> {
        let dimension = Dimension::from_rank(N)?;
        if let Some(c) = centering {
            if !is_valid_centering(c, dimension) {
                return Err(NotationError::InvalidCentering {
                    centering: c.as_char(),
                    dimension,
                });
            }
            for axis in &axes {
                check_rotation_order(axis.order())?;
            }
        }
        Ok(HermannMauguin { centering, axes })
    }

    /// A point group (no centering) from its axes.
    pub fn point_group(axes: [Axis; N]) -> Result<Self> {
        Self::from_parts(None, axes)
    }

    /// Parse a whitespace separated symbol such as `"F 4_1/d -3 2/m"` or `"-6 m 2"`.
    ///
    /// A leading single letter is the centering unless it is `m`, which always starts
    /// an axis. Missing trailing axes are identities. Plane group (2D) notation is not
    /// parsed and yields `NotImplemented`.
    pub fn parse(notation: &str) -> Result<Self> {
        let dimension = Dimension::from_rank(N)?;
        if dimension == Dimension::_2D {
            return Err(NotationError::NotImplemented(format!(
                "parsing 2D symbol '{}'",
                notation
            )));
        }

        let mut tokens: Vec<&str> = notation.split_whitespace().collect();
        let centering = tokens.first().and_then(|first| leading_centering(first));
        if centering.is_some() {
            tokens.remove(0);
        }
        trace!("'{}': centering {:?}, axis tokens {:?}", notation, centering, tokens);

        if tokens.len() > N {
            return Err(NotationError::TooManyAxes {
                dimension,
                expected: N,
                found: tokens.len(),
            });
        }
        let mut axes = [Axis::IDENTITY; N];
        for (axis, token) in axes.iter_mut().zip(&tokens) {
            *axis = Axis::parse(token)?;
        }
        Self::new(centering, axes)
    }

    /// Symbol number `index` (1-based) of the built-in tables.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::from_index_in(&StandardSymbols, index)
    }

    /// Symbol number `index` (1-based) of an arbitrary symbol source.
    pub fn from_index_in<S: SymbolSource + ?Sized>(source: &S, index: usize) -> Result<Self> {
        let dimension = Dimension::from_rank(N)?;
        let notation = source.lookup(dimension, index)?;
        Self::parse(notation)
    }

    /// Position of this symbol in the built-in table of its dimension, if listed.
    ///
    /// Distinct symbols can share a long form (`R 3 1 2` and `R 3 2 1` both render as
    /// `R 3 2`), so the listed entry must also parse back to this symbol.
    pub fn table_index(&self) -> Option<usize> {
        StandardSymbols
            .position(self.dimension(), &self.long_form())
            .filter(|&index| Self::from_index(index).as_ref() == Ok(self))
    }

    pub fn dimension(&self) -> Dimension {
        // N is checked by every constructor
        match N {
            1 => Dimension::_1D,
            2 => Dimension::_2D,
            _ => Dimension::_3D,
        }
    }

    pub fn centering(&self) -> Option<Centering> {
        self.centering
    }

    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    /// Order of every axis, by position.
    pub fn axis_orders(&self) -> [u32; N] {
        self.axes.map(|axis| axis.order())
    }

    pub fn is_point_group(&self) -> bool {
        self.centering.is_none()
    }

    pub fn is_space_group(&self) -> bool {
        self.centering.is_some()
    }

    /// Bring the symbol into its standard setting.
    ///
    /// Intended contract:
    /// - triclinic: primitive centering
    /// - monoclinic: unique axis b (β ≠ 90°), centering P or C
    /// - orthorhombic mm2: twofold axis along z
    /// - tetragonal: F → I and C → P
    /// - trigonal: H → P
    /// - hexagonal and cubic: unchanged
    ///
    /// Not implemented; always returns `NotImplemented`.
    pub fn standardize(&self) -> Result<Self> {
        Err(NotationError::NotImplemented(format!(
            "standardizing '{}'",
            self.long_form()
        )))
    }
}

impl HermannMauguin<3> {
    /// Crystal system implied by the axis orders.
    pub fn crystal_system(&self) -> CrystalSystem {
        let [first, second, _] = self.axis_orders();
        let twofold = self.axis_orders().iter().filter(|&&order| order == 2).count();
        match (first, second, twofold) {
            (_, 3, _) => CrystalSystem::Cubic,
            (6, _, _) => CrystalSystem::Hexagonal,
            (3, _, _) => CrystalSystem::Trigonal,
            (4, _, _) => CrystalSystem::Tetragonal,
            (_, _, 3) => CrystalSystem::Orthorhombic,
            (_, _, t) if t > 0 => CrystalSystem::Monoclinic,
            _ => CrystalSystem::Triclinic,
        }
    }
}

// A single alphabetic character other than `m` is a centering letter.
fn leading_centering(token: &str) -> Option<char> {
    if token.starts_with('m') {
        return None;
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

impl<const N: usize> FromStr for HermannMauguin<N> {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<const N: usize> TryFrom<&str> for HermannMauguin<N> {
    type Error = NotationError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<const N: usize> TryFrom<String> for HermannMauguin<N> {
    type Error = NotationError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

// Serialized shape of a symbol; arrays of generic length have no serde impls.
#[derive(Clone, Serialize, Deserialize)]
struct SymbolFields {
    centering: Option<Centering>,
    axes: Vec<Axis>,
}

impl<const N: usize> From<HermannMauguin<N>> for SymbolFields {
    fn from(symbol: HermannMauguin<N>) -> Self {
        SymbolFields {
            centering: symbol.centering,
            axes: symbol.axes.to_vec(),
        }
    }
}

impl<const N: usize> TryFrom<SymbolFields> for HermannMauguin<N> {
    type Error = NotationError;

    fn try_from(fields: SymbolFields) -> Result<Self> {
        let dimension = Dimension::from_rank(N)?;
        if fields.axes.len() > N {
            return Err(NotationError::TooManyAxes {
                dimension,
                expected: N,
                found: fields.axes.len(),
            });
        }
        // missing trailing axes are identities, as in `parse`
        let mut axes = [Axis::IDENTITY; N];
        for (slot, axis) in axes.iter_mut().zip(fields.axes) {
            *slot = axis;
        }
        Self::from_parts(fields.centering, axes)
    }
}

impl<const N: usize> From<HermannMauguin<N>> for String {
    fn from(symbol: HermannMauguin<N>) -> Self {
        symbol.long_form()
    }
}
