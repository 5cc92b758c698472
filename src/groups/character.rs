//! The character formula: maps an irrep descriptor and a symmetry
//! operation to a single real character (see §4.3).

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::irrep::IrrepDescriptor;
use crate::core::operation::{OperationKind, Orientation, SymmetryOperation};

/// The character of `descriptor` evaluated on `op`, given the group's
/// principal order parameter `n`.
///
/// Dispatches on `op.orientation`: `Horizontal` uses the principal-axis
/// formula (proper/improper rotation characters keyed on whether
/// `n / op.order` is odd); `Vertical`/`Dihedral` use the perpendicular
/// formula (reflections and `C2`s keyed on `v`/`p*v`). `Orientation::None`
/// is only meaningful for the predefined polyhedral tables, which never
/// reach this function — it is rejected here as unrecognized.
pub fn character(n: u32, op: &SymmetryOperation, descriptor: &IrrepDescriptor) -> SymmetryResult<f64> {
    match op.orientation {
        Orientation::Horizontal => horizontal(n, op, descriptor),
        Orientation::Vertical | Orientation::Dihedral => perpendicular(op, descriptor),
        Orientation::None => Err(SymmetryError::invalid_table(
            "character formula received an operation with no orientation",
        )),
    }
}

fn horizontal(n: u32, op: &SymmetryOperation, d: &IrrepDescriptor) -> SymmetryResult<f64> {
    let q_odd = op.principal_quotient(n) % 2 == 1;
    match d.dim {
        1 => Ok(match op.kind {
            OperationKind::Identity => 1.0,
            OperationKind::Reflection => f64::from(d.h),
            OperationKind::Inversion => f64::from(d.i),
            OperationKind::ProperRotation => f64::from(if q_odd { d.p } else { 1 }),
            OperationKind::ImproperRotation => f64::from(d.h) * f64::from(if q_odd { d.p } else { 1 }),
        }),
        2 => {
            let rotation = crate::math::two_cos(
                2.0 * f64::from(d.angular) * f64::from(op.power) * std::f64::consts::PI / f64::from(op.order),
            );
            Ok(match op.kind {
                OperationKind::Identity => 2.0,
                OperationKind::Reflection => 2.0 * f64::from(d.h),
                OperationKind::Inversion => 2.0 * f64::from(d.i),
                OperationKind::ProperRotation => rotation,
                OperationKind::ImproperRotation => f64::from(d.h) * rotation,
            })
        }
        other => Err(SymmetryError::invalid_table(format!(
            "invalid dimension ({other}) of irreducible representation for point group"
        ))),
    }
}

fn perpendicular(op: &SymmetryOperation, d: &IrrepDescriptor) -> SymmetryResult<f64> {
    let dihedral = matches!(op.orientation, Orientation::Dihedral);
    match d.dim {
        1 => match op.kind {
            OperationKind::Identity => Ok(1.0),
            OperationKind::Inversion => Ok(f64::from(d.i)),
            OperationKind::Reflection => {
                Ok(if dihedral { f64::from(d.p) * f64::from(d.v) * f64::from(d.h) } else { f64::from(d.v) * f64::from(d.h) })
            }
            OperationKind::ProperRotation => {
                Ok(if dihedral { f64::from(d.p) * f64::from(d.v) } else { f64::from(d.v) })
            }
            OperationKind::ImproperRotation => Err(SymmetryError::invalid_table(
                "improper rotation in perpendicular orientation has no defined 1-D character",
            )),
        },
        2 => match op.kind {
            OperationKind::Identity => Ok(2.0),
            OperationKind::Reflection | OperationKind::ProperRotation => Ok(0.0),
            OperationKind::Inversion => Ok(2.0 * f64::from(d.i)),
            OperationKind::ImproperRotation => Err(SymmetryError::invalid_table(
                "improper rotation in perpendicular orientation has no defined 2-D character",
            )),
        },
        other => Err(SymmetryError::invalid_table(format!(
            "invalid dimension ({other}) of irreducible representation for point group"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::irrep::IrrepKind;
    use crate::math::Vec3;

    fn op(kind: OperationKind, order: u32, power: i32, orientation: Orientation) -> SymmetryOperation {
        SymmetryOperation::new(kind, order, power, Vec3::new(0.0, 0.0, 1.0), orientation)
    }

    #[test]
    fn identity_is_always_dimension() {
        let a1 = IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, 1, 1, 1, 1);
        let e = IrrepDescriptor::new(IrrepKind::Irreducible, 2, 1, 1, 1, 1, 1);
        let identity = op(OperationKind::Identity, 1, 1, Orientation::Horizontal);
        assert_eq!(character(3, &identity, &a1).unwrap(), 1.0);
        assert_eq!(character(3, &identity, &e).unwrap(), 2.0);
    }

    #[test]
    fn c3v_e_character_on_c3_is_minus_one() {
        let e = IrrepDescriptor::new(IrrepKind::Irreducible, 2, 1, 1, 1, 1, 1);
        let c3 = op(OperationKind::ProperRotation, 3, 1, Orientation::Horizontal);
        let chi = character(3, &c3, &e).unwrap();
        assert!((chi - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn c3v_e_character_on_sigma_v_is_zero() {
        let e = IrrepDescriptor::new(IrrepKind::Irreducible, 2, 1, 1, 1, 1, 1);
        let sv = op(OperationKind::Reflection, 1, 1, Orientation::Vertical);
        assert_eq!(character(3, &sv, &e).unwrap(), 0.0);
    }

    #[test]
    fn perpendicular_improper_rotation_is_rejected() {
        let a1 = IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, 1, 1, 1, 1);
        let s = op(OperationKind::ImproperRotation, 4, 1, Orientation::Vertical);
        assert!(character(4, &s, &a1).is_err());
    }
}
