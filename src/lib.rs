#![forbid(unsafe_code)]
//! Character-table and symmetrization core for molecular point groups.
//!
//! This crate builds the character table of a point group from its order
//! parameter and a pre-classified list of symmetry operations, decomposes
//! reducible representations into irreducibles, and symmetrizes molecular
//! geometries and wave functions against an assembled table.
//!
//! Classification of a molecule into a point group and enumeration of its
//! symmetry operations are out of scope: every entry point here takes the
//! group type, order parameter, and operation list as input.
//!
//! # Usage
//!
//! ```
//! use ptsym_core::{generate_character_table, GroupType, OperationKind, Orientation, SymmetryOperation, Vec3};
//!
//! let op = |kind, order, power, orientation, class| {
//!     let mut sop = SymmetryOperation::new(kind, order, power, Vec3::new(0.0, 0.0, 1.0), orientation);
//!     sop.class = class;
//!     sop
//! };
//! let ops = vec![
//!     op(OperationKind::Identity, 1, 1, Orientation::Horizontal, 0),
//!     op(OperationKind::ProperRotation, 3, 1, Orientation::Horizontal, 1),
//!     op(OperationKind::ProperRotation, 3, 2, Orientation::Horizontal, 1),
//!     op(OperationKind::Reflection, 1, 1, Orientation::Vertical, 2),
//!     op(OperationKind::Reflection, 1, 1, Orientation::Vertical, 2),
//!     op(OperationKind::Reflection, 1, 1, Orientation::Vertical, 2),
//! ];
//! let ct = generate_character_table(GroupType::Cnv, 3, &ops, None).unwrap();
//! assert_eq!(ct.order(), 6);
//! ```

mod core;
mod decompose;
mod diagnostics;
mod groups;
mod math;
mod symmetrize;

#[cfg(test)]
mod tests;

pub use core::{
    generate_character_table, mulliken_label, AxialFamily, CharacterTable, GroupType,
    IrrepDescriptor, IrrepKind, OperationKind, Orientation, PolyhedralFamily, Sign,
    SymmetryError, SymmetryOperation, SymmetryResult, SymmetrySpecies,
};
pub use decompose::{decompose, direct_product};
pub use diagnostics::{DiagnosticSink, NullSink};
pub use math::Vec3;
pub use symmetrize::{
    symmetrize_molecule, symmetrize_molecule_linear, symmetrize_translation,
    symmetrize_wavefunctions, EquivalenceSet, Salc, Thresholds,
};
