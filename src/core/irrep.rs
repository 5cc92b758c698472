//! Irrep descriptors and deterministic Mulliken-style naming.
//!
//! A 1- or 2-D irrep of a cyclic or dihedral family is fully described by
//! four sign-eigenvalues plus an angular index, rather than by a hand
//! written name per group — see §4.1. Naming becomes a pure function of
//! this descriptor and the parent group type/order.

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::group_type::AxialFamily;

/// Whether a descriptor stands for a genuine irreducible representation or
/// for a merged complex-conjugate pair (see §9: complex 2-D irreps of
/// cyclic/dihedral groups are represented as one real reducible block).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrepKind {
    /// A true irreducible representation.
    Irreducible,
    /// A real 2-D block standing in for a complex-conjugate pair.
    ReduciblePair,
}

/// A sign-eigenvalue, `-1`, `0`, or `+1`. `0` means "not applicable to the
/// parent group type" and is elided from the Mulliken label.
pub type Sign = i8;

/// The parametric description of a 1- or 2-D irrep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrrepDescriptor {
    /// Irreducible vs. reducible-complex-pair.
    pub kind: IrrepKind,
    /// Dimension, `1..=5`.
    pub dim: u8,
    /// Angular index `l >= 0`; nonzero only for 2-D irreps of cyclic and
    /// dihedral families.
    pub angular: u32,
    /// Sign under the principal `C_n` generator (the A/B distinction).
    pub p: Sign,
    /// Sign under a vertical mirror or a perpendicular `C2` (the 1/2
    /// subscript).
    pub v: Sign,
    /// Sign under `sigma_h` (the single/double prime distinction).
    pub h: Sign,
    /// Sign under inversion (the g/u distinction).
    pub i: Sign,
}

impl IrrepDescriptor {
    /// Build a descriptor with all four sign slots set explicitly.
    #[must_use]
    pub fn new(kind: IrrepKind, dim: u8, angular: u32, p: Sign, v: Sign, h: Sign, i: Sign) -> Self {
        Self { kind, dim, angular, p, v, h, i }
    }

    /// Validate that the descriptor is well-formed: dimension in `1..=5`
    /// and every sign in `{-1, 0, 1}`.
    pub fn validate(&self) -> SymmetryResult<()> {
        if !(1..=5).contains(&self.dim) {
            return Err(SymmetryError::invalid_table(format!(
                "invalid dimension ({}) for irreducible representation",
                self.dim
            )));
        }
        for (name, sign) in [("p", self.p), ("v", self.v), ("h", self.h), ("i", self.i)] {
            if !(-1..=1).contains(&sign) {
                return Err(SymmetryError::invalid_table(format!(
                    "invalid sign-eigenvalue {sign} for slot '{name}'"
                )));
            }
        }
        Ok(())
    }
}

fn lookup(sign: Sign, table: [&'static str; 3]) -> &'static str {
    table[usize::try_from(sign + 1).unwrap_or(1)]
}

/// Build the deterministic Mulliken-style label for `descriptor`, given the
/// parent `family` and order parameter `n`.
///
/// The parent group type masks out irrelevant sign slots before naming, per
/// §4.1: e.g. `Cn` discards `v`, `h`, and `i` entirely; `Dnd` folds its
/// effective A/B sign into the `h` slot for even `n` (mirroring how the
/// even-`n` generator schedule stores that distinction), matching the
/// reference implementation's `getRepresentationName`.
pub fn mulliken_label(family: AxialFamily, n: u32, descriptor: &IrrepDescriptor) -> SymmetryResult<String> {
    descriptor.validate()?;

    // eindex order mirrors the upstream layout: [p, h, v, i].
    let mut eindex = [descriptor.p, descriptor.h, descriptor.v, descriptor.i];

    match family {
        AxialFamily::Cn => {
            eindex[1] = 0;
            eindex[2] = 0;
            eindex[3] = 0;
        }
        AxialFamily::Cnv => {
            eindex[1] = 0;
            eindex[3] = 0;
        }
        AxialFamily::Cnh => {
            if n % 2 == 1 {
                eindex[3] = 0;
            } else {
                eindex[1] = 0;
            }
            eindex[2] = 0;
        }
        AxialFamily::Dn => {
            eindex[1] = 0;
            eindex[3] = 0;
        }
        AxialFamily::Dnd => {
            if n % 2 == 0 {
                eindex[3] = 0;
                eindex[0] = descriptor.h;
            }
            eindex[1] = 0;
        }
        AxialFamily::Dnh => {
            if n % 2 == 1 {
                eindex[3] = 0;
            } else {
                eindex[1] = 0;
            }
        }
    }

    const BASE_LETTERS: [char; 6] = ['A', 'B', 'E', 'T', 'G', 'H'];
    const SUBSCRIPT_I: [&str; 3] = ["u", "", "g"];
    const SUBSCRIPT_V: [&str; 3] = ["2", "", "1"];
    const SUFFIX_H: [&str; 3] = ["''", "", "'"];

    let rtype = if descriptor.dim == 1 {
        BASE_LETTERS[usize::from(eindex[0] != 1)]
    } else {
        *BASE_LETTERS.get(usize::from(descriptor.dim)).ok_or_else(|| {
            SymmetryError::invalid_table(format!("invalid dimension ({}) for naming", descriptor.dim))
        })?
    };

    let si = lookup(eindex[3], SUBSCRIPT_I);
    let sh = lookup(eindex[1], SUFFIX_H);

    let label = if descriptor.dim == 1 {
        let sv = lookup(eindex[2], SUBSCRIPT_V);
        format!("{rtype}{sv}{si}{sh}")
    } else if descriptor.angular > 0 {
        format!("{rtype}{}{si}{sh}", descriptor.angular)
    } else {
        format!("{rtype}{si}{sh}")
    };

    Ok(label)
}

/// A labeled row of a generated character table: the irrep's name,
/// dimension, and the index of its class representative in the owning
/// table's class list.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetrySpecies {
    /// Mulliken-style label, e.g. `"A1"`, `"E2u"`, `"T1g"`.
    pub label: String,
    /// Dimension of the irrep.
    pub dim: u8,
}

impl SymmetrySpecies {
    /// Build a species from a label and dimension.
    #[must_use]
    pub fn new(label: impl Into<String>, dim: u8) -> Self {
        Self { label: label.into(), dim }
    }
}
