//! Per-family irrep generation: parametric axial generators and predefined
//! polyhedral tables.

pub mod character;
pub mod cyclic;
pub mod dihedral;
pub mod polyhedral;

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::group_type::AxialFamily;
use crate::core::irrep::IrrepDescriptor;

/// Dispatch to the parametric generator for `family`, producing exactly
/// `rl` descriptors.
pub fn generate(family: AxialFamily, n: u32, rl: usize) -> SymmetryResult<Vec<IrrepDescriptor>> {
    match family {
        AxialFamily::Cn => cyclic::generate_cn(n, rl),
        AxialFamily::Cnh => cyclic::generate_cnh(n, rl),
        AxialFamily::Cnv => cyclic::generate_cnv(n, rl),
        AxialFamily::Dn => dihedral::generate_dn(n, rl),
        AxialFamily::Dnh => dihedral::generate_dnh(n, rl),
        AxialFamily::Dnd => dihedral::generate_dnd(n, rl),
    }
}

/// The predefined table for `family`.
#[must_use]
pub fn predefined(family: crate::core::group_type::PolyhedralFamily) -> &'static polyhedral::PredefinedTable {
    use crate::core::group_type::PolyhedralFamily;
    match family {
        PolyhedralFamily::T => &polyhedral::T,
        PolyhedralFamily::Td => &polyhedral::TD,
        PolyhedralFamily::I => &polyhedral::I,
        PolyhedralFamily::Ih => &polyhedral::IH,
    }
}

/// Error for a [`crate::core::group_type::GroupType`] with neither a
/// parametric generator nor a predefined table (`Ci`, `Cs`, `Sn`, `Th`,
/// `O`, `Oh`, `K`, `Kh` — see §9's open question, resolved here by
/// continuing to raise [`SymmetryError::PointGroupError`]).
pub fn unsupported(type_name: &str) -> SymmetryError {
    SymmetryError::point_group(format!("character table representation not yet implemented for {type_name}"))
}
