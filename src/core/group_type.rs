//! The point-group type tag supplied by the classifier.

/// A finite (or, for `n == 0`, linear/infinite-order) point-group type.
///
/// Identified by this tag plus an integer `n` for the axial families (`Cn`,
/// `Cnh`, `Cnv`, `Dn`, `Dnh`, `Dnd`, `Sn`); `n == 0` denotes the continuous
/// axis of a linear group (`Cnv`/`Dnh` only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupType {
    /// `C_i`, the inversion-only group.
    Ci,
    /// `C_s`, the single-mirror group.
    Cs,
    /// `C_n`, the cyclic rotation group.
    Cn,
    /// `C_nh`, `C_n` plus a horizontal mirror.
    Cnh,
    /// `C_nv`, `C_n` plus vertical mirrors.
    Cnv,
    /// `D_n`, `C_n` plus perpendicular `C2` axes.
    Dn,
    /// `D_nh`, `D_n` plus a horizontal mirror.
    Dnh,
    /// `D_nd`, `D_n` plus dihedral mirrors.
    Dnd,
    /// `S_n`, the improper-rotation-only group.
    Sn,
    /// The chiral tetrahedral group.
    T,
    /// The full tetrahedral group.
    Td,
    /// The pyritohedral group.
    Th,
    /// The chiral octahedral group.
    O,
    /// The full octahedral group.
    Oh,
    /// The chiral icosahedral group.
    I,
    /// The full icosahedral group.
    Ih,
    /// The full rotation group.
    K,
    /// The full orthogonal group.
    Kh,
}

/// The six axial families with a parametric (`n`-dependent) irrep generator.
///
/// Every other [`GroupType`] is either NYI (`Ci`, `Cs`, `Sn`, `Th`, `O`,
/// `Oh`, `K`, `Kh`) or served by a predefined polyhedral table (`T`, `Td`,
/// `I`, `Ih`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxialFamily {
    /// `C_n`.
    Cn,
    /// `C_nh`.
    Cnh,
    /// `C_nv`.
    Cnv,
    /// `D_n`.
    Dn,
    /// `D_nh`.
    Dnh,
    /// `D_nd`.
    Dnd,
}

/// The four polyhedral families served by a predefined, positionally
/// matched character table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolyhedralFamily {
    /// The chiral tetrahedral group.
    T,
    /// The full tetrahedral group.
    Td,
    /// The chiral icosahedral group.
    I,
    /// The full icosahedral group.
    Ih,
}

impl GroupType {
    /// The parametric generator family this type dispatches to, if any.
    #[must_use]
    pub fn axial_family(self) -> Option<AxialFamily> {
        match self {
            GroupType::Cn => Some(AxialFamily::Cn),
            GroupType::Cnh => Some(AxialFamily::Cnh),
            GroupType::Cnv => Some(AxialFamily::Cnv),
            GroupType::Dn => Some(AxialFamily::Dn),
            GroupType::Dnh => Some(AxialFamily::Dnh),
            GroupType::Dnd => Some(AxialFamily::Dnd),
            _ => None,
        }
    }

    /// The predefined polyhedral table this type is served by, if any.
    #[must_use]
    pub fn polyhedral_family(self) -> Option<PolyhedralFamily> {
        match self {
            GroupType::T => Some(PolyhedralFamily::T),
            GroupType::Td => Some(PolyhedralFamily::Td),
            GroupType::I => Some(PolyhedralFamily::I),
            GroupType::Ih => Some(PolyhedralFamily::Ih),
            _ => None,
        }
    }
}
