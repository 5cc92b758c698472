//! The symmetry-operation data model supplied by the classifier collaborator.
//!
//! Everything in this module is an *input* type: the point-group classifier
//! and its conjugacy-class assignment live outside this crate. What we own
//! is the shape of the data it hands us, and the geometric action of each
//! operation (needed by the geometry symmetrizer).

use crate::math::vector::Vec3;

/// The five kinds of symmetry operation a point group can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// The identity, E.
    Identity,
    /// A proper rotation, `C_n^k`.
    ProperRotation,
    /// An improper (rotation-reflection) operation, `S_n^k`.
    ImproperRotation,
    /// A reflection through a plane, `sigma`.
    Reflection,
    /// Inversion through the origin, `i`.
    Inversion,
}

/// Where an operation's axis or plane sits relative to the principal axis.
///
/// `None` is used for operations with no meaningful orientation (identity,
/// inversion, and the class representatives of the predefined polyhedral
/// tables, which are matched positionally rather than by orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// No orientation applies.
    #[default]
    None,
    /// Coincides with or is perpendicular to the principal axis in the
    /// "horizontal" sense used by the character formula (see §4.3).
    Horizontal,
    /// A vertical mirror or a perpendicular `C2`.
    Vertical,
    /// A dihedral mirror or a perpendicular `C2` bisecting vertical mirrors.
    Dihedral,
}

/// One symmetry operation of a point group, already assigned to a
/// conjugacy class by the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryOperation {
    /// The operation's kind.
    pub kind: OperationKind,
    /// The operation's order. `0` denotes the continuous `C_inf`/`S_inf`
    /// axis of a linear group.
    pub order: u32,
    /// The power applied to the generator, e.g. `2` for `C_5^2`.
    pub power: i32,
    /// Unit vector along the rotation axis, or the plane normal for a
    /// reflection.
    pub axis: Vec3,
    /// Orientation relative to the principal axis.
    pub orientation: Orientation,
    /// Conjugacy-class index assigned by the classifier. Operations sharing
    /// a class index are conjugate and must yield identical characters for
    /// every irrep; class indices are contiguous starting at 0.
    pub class: usize,
}

impl SymmetryOperation {
    /// Build an operation. `class` defaults to `0`; callers normally set it
    /// explicitly once the classifier has partitioned the operation list.
    #[must_use]
    pub fn new(kind: OperationKind, order: u32, power: i32, axis: Vec3, orientation: Orientation) -> Self {
        Self {
            kind,
            order,
            power,
            axis,
            orientation,
            class: 0,
        }
    }

    /// `n / order` as used throughout the character formula, where `n` is
    /// the group's principal order parameter. Returns `1` for the
    /// continuous axis (`order == 0`), since it is only ever invoked there
    /// after the vector has already been projected onto the axis.
    #[must_use]
    pub fn principal_quotient(&self, n: u32) -> u32 {
        if self.order == 0 { 1 } else { n / self.order }
    }

    /// The rotation angle `2*pi*power/order` implied by this operation,
    /// or `0.0` for the continuous axis.
    #[must_use]
    pub fn angle(&self) -> f64 {
        if self.order == 0 {
            0.0
        } else {
            2.0 * std::f64::consts::PI * f64::from(self.power) / f64::from(self.order)
        }
    }

    /// Apply this operation to a point in space.
    ///
    /// A proper rotation turns `v` about `axis` by [`Self::angle`]; an
    /// improper rotation additionally reflects through the plane
    /// perpendicular to `axis`; a reflection uses `axis` as the plane
    /// normal; inversion negates `v`; the identity returns `v` unchanged.
    #[must_use]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        match self.kind {
            OperationKind::Identity => v,
            OperationKind::ProperRotation => v.rotate_about(self.axis, self.angle()),
            OperationKind::ImproperRotation => v.rotate_about(self.axis, self.angle()).reflect_through(self.axis),
            OperationKind::Reflection => v.reflect_through(self.axis),
            OperationKind::Inversion => v.negate(),
        }
    }
}
