//! Long and short forms of a Hermann-Mauguin symbol.
//!
//! The long form lists every axis (`"I 4₁/a 2/m 2/d"`), the short form keeps only what
//! is needed to identify the group (`"I4₁/amd"`). The short form checks run in a fixed
//! order: identity, inversion, trigonal exception, general reduction. Each later check
//! relies on the earlier ones not having matched.

use std::fmt;

use crate::notation::axis::Axis;
use crate::notation::hermann_mauguin::HermannMauguin;
use crate::notation::subscripts::{digits_to_subscript, to_underscore};

impl<const N: usize> HermannMauguin<N> {
    /// Fully explicit symbol, axes separated by single spaces.
    pub fn long_form(&self) -> String {
        let prefix = self
            .centering()
            .map(|c| format!("{} ", c))
            .unwrap_or_default();

        if self.axes().iter().any(|axis| axis.rotation() == -1) {
            return format!("{}-1", prefix);
        }
        if self.is_identity() {
            return format!("{}1", prefix);
        }

        let mut parts: Vec<String> = self.axes().iter().map(Axis::to_string).collect();
        if self.is_centered_trigonal() {
            parts.retain(|part| part != "1");
        }
        format!("{}{}", prefix, parts.join(" "))
    }

    /// Long form with `_digit` screws (`"I 4_1/a 2/m 2/d"`).
    pub fn long_form_ascii(&self) -> String {
        to_underscore(&self.long_form())
    }

    /// Abbreviated symbol without separators (`"Fd-3m"`, `"P2₁/c"`, `"-6m2"`).
    pub fn short_form(&self) -> String {
        let prefix = self
            .centering()
            .map(|c| c.to_string())
            .unwrap_or_default();

        let body = if self.is_identity() {
            "1".to_string()
        } else if self.has_inversion_axis() {
            "-1".to_string()
        } else {
            let kept: Vec<&Axis> = if self.is_primitive_trigonal() {
                self.axes().iter().collect()
            } else {
                self.nontrivial_axes()
            };
            condense_axes(&kept)
        };
        format!("{}{}", prefix, body)
    }

    fn is_identity(&self) -> bool {
        self.axes().iter().all(Axis::is_identity)
    }

    fn has_inversion_axis(&self) -> bool {
        self.axes().contains(&Axis::INVERSION)
    }

    // 32, 3m and -32/m families with one identity direction, e.g. 3 1 2 or 3 m 1
    fn has_trigonal_orders(&self) -> bool {
        matches!(self.axis_orders().as_slice(), [3, 1, 2] | [3, 2, 1])
    }

    // R-centered trigonal groups drop the identity direction in the long form
    fn is_centered_trigonal(&self) -> bool {
        self.centering().map_or(false, |c| !c.is_primitive()) && self.has_trigonal_orders()
    }

    // P312 and P321 only differ by the position of the identity; keep it
    fn is_primitive_trigonal(&self) -> bool {
        self.centering().map_or(false, |c| c.is_primitive()) && self.has_trigonal_orders()
    }

    fn nontrivial_axes(&self) -> Vec<&Axis> {
        self.axes()
            .iter()
            .filter(|axis| axis.to_string() != "1")
            .collect()
    }
}

// Join the axes of a short form. A single axis is written in full; with several axes
// each one that ends in a glide letter is reduced to that letter.
fn condense_axes(axes: &[&Axis]) -> String {
    match axes {
        [] => "1".to_string(),
        [single] => single.to_string(),
        [first, second, ..] => {
            let block: String = axes
                .iter()
                .map(|axis| glide_letter_or_whole(&axis.to_string()).to_string())
                .collect();
            if block.starts_with(char::is_alphabetic) && needs_leading_rotation(first, second) {
                format!("{}{}", leading_rotation(first), block)
            } else {
                block
            }
        }
    }
}

fn glide_letter_or_whole(symbol: &str) -> &str {
    match symbol.char_indices().last() {
        Some((i, c)) if c.is_alphabetic() => &symbol[i..],
        _ => symbol,
    }
}

// 4/mmm, 6₃/mmc, 4₁/amd: an even axis above twofold keeps its rotation in front of the
// letters unless a threefold follows (m-3m is cubic, not 4/m-3m).
fn needs_leading_rotation(first: &Axis, second: &Axis) -> bool {
    let order = first.order();
    order > 2 && order % 2 == 0 && second.order() != 3
}

fn leading_rotation(axis: &Axis) -> String {
    let screw = if axis.screw() != 0 {
        digits_to_subscript(axis.screw())
    } else {
        String::new()
    };
    format!("{}{}/", axis.rotation(), screw)
}

impl<const N: usize> fmt::Display for HermannMauguin<N> {
    /// `{}` writes the long form, `{:#}` the short form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.short_form())
        } else {
            f.write_str(&self.long_form())
        }
    }
}
