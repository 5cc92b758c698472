//! Predefined character tables for the polyhedral point groups.
//!
//! Unlike the axial families, T/Td/I/Ih are not generated parametrically:
//! each is a fixed table of (class-representative descriptor, label,
//! dimension, character row) tuples, matched positionally against the
//! runtime operation list by [`bind`]. This keeps the four tables as pure
//! data rather than near-duplicate functions (see §4.4, §9).

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::operation::{OperationKind, Orientation, SymmetryOperation};
use crate::math::{C2PI, C4PI};

/// One column of a predefined table: the class-representative shape the
/// binder searches the runtime operation list for.
#[derive(Debug, Clone, Copy)]
pub struct ClassDescriptor {
    pub kind: OperationKind,
    pub order: u32,
    pub power: i32,
}

impl ClassDescriptor {
    const fn new(kind: OperationKind, order: u32, power: i32) -> Self {
        Self { kind, order, power }
    }

    fn matches(self, op: &SymmetryOperation) -> bool {
        op.kind == self.kind && op.order == self.order && op.power == self.power && op.orientation == Orientation::None
    }
}

/// A fixed, positionally indexed character table, as held for each
/// polyhedral group.
pub struct PredefinedTable {
    pub classes: &'static [ClassDescriptor],
    pub labels: &'static [&'static str],
    pub dims: &'static [u8],
    /// Row-major `labels.len() x labels.len()` character matrix.
    pub rows: &'static [&'static [f64]],
}

pub const T: PredefinedTable = PredefinedTable {
    classes: &[
        ClassDescriptor::new(OperationKind::Identity, 1, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 3, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 2, 1),
    ],
    labels: &["A", "E", "T"],
    dims: &[1, 2, 3],
    rows: &[&[1.0, 1.0, 1.0], &[2.0, -1.0, 2.0], &[3.0, 0.0, -1.0]],
};

pub const TD: PredefinedTable = PredefinedTable {
    classes: &[
        ClassDescriptor::new(OperationKind::Identity, 1, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 2, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 3, 1),
        ClassDescriptor::new(OperationKind::ImproperRotation, 4, 1),
        ClassDescriptor::new(OperationKind::Reflection, 1, 1),
    ],
    labels: &["A1", "A2", "E", "T1", "T2"],
    dims: &[1, 1, 2, 3, 3],
    rows: &[
        &[1.0, 1.0, 1.0, 1.0, 1.0],
        &[1.0, 1.0, 1.0, -1.0, -1.0],
        &[2.0, 2.0, -1.0, 0.0, 0.0],
        &[3.0, -1.0, 0.0, 1.0, -1.0],
        &[3.0, -1.0, 0.0, -1.0, 1.0],
    ],
};

pub const I: PredefinedTable = PredefinedTable {
    classes: &[
        ClassDescriptor::new(OperationKind::Identity, 1, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 2, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 3, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 5, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 5, 2),
    ],
    labels: &["A", "T1", "T2", "G", "H"],
    dims: &[1, 3, 3, 4, 5],
    rows: &[
        &[1.0, 1.0, 1.0, 1.0, 1.0],
        &[3.0, -1.0, 0.0, -C4PI, -C2PI],
        &[3.0, -1.0, 0.0, -C2PI, -C4PI],
        &[4.0, 0.0, 1.0, -1.0, -1.0],
        &[5.0, 1.0, -1.0, 0.0, 0.0],
    ],
};

pub const IH: PredefinedTable = PredefinedTable {
    classes: &[
        ClassDescriptor::new(OperationKind::Identity, 1, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 2, 1),
        ClassDescriptor::new(OperationKind::Reflection, 1, 1),
        ClassDescriptor::new(OperationKind::ImproperRotation, 6, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 5, 1),
        ClassDescriptor::new(OperationKind::ImproperRotation, 10, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 5, 2),
        ClassDescriptor::new(OperationKind::Inversion, 1, 1),
        ClassDescriptor::new(OperationKind::ProperRotation, 3, 1),
        ClassDescriptor::new(OperationKind::ImproperRotation, 10, 3),
    ],
    labels: &["Ag", "Au", "T1g", "T1u", "T2g", "T2u", "Gg", "Gu", "Hg", "Hu"],
    dims: &[1, 1, 3, 3, 3, 3, 4, 4, 5, 5],
    rows: &[
        &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        &[1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0],
        &[3.0, -1.0, -1.0, 0.0, -C4PI, -C2PI, -C2PI, 3.0, 0.0, -C4PI],
        &[3.0, -1.0, 1.0, 0.0, -C4PI, C2PI, -C2PI, -3.0, 0.0, C4PI],
        &[3.0, -1.0, -1.0, 0.0, -C2PI, -C4PI, -C4PI, 3.0, 0.0, -C2PI],
        &[3.0, -1.0, 1.0, 0.0, -C2PI, C4PI, -C4PI, -3.0, 0.0, C2PI],
        &[4.0, 0.0, 0.0, 1.0, -1.0, -1.0, -1.0, 4.0, 1.0, -1.0],
        &[4.0, 0.0, 0.0, -1.0, -1.0, 1.0, -1.0, -4.0, 1.0, 1.0],
        &[5.0, 1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 5.0, -1.0, 0.0],
        &[5.0, 1.0, -1.0, 1.0, 0.0, 0.0, 0.0, -5.0, -1.0, 0.0],
    ],
};

/// Bind `table` against the runtime operation list, producing a
/// `table.labels.len() x table.labels.len()` character matrix indexed by
/// the runtime class numbers. See §4.4: for each predefined column, the
/// first matching runtime operation's class determines the destination
/// column; every predefined row is copied into that column.
pub fn bind(ops: &[SymmetryOperation], table: &PredefinedTable, d: usize) -> SymmetryResult<(Vec<String>, Vec<u8>, Vec<Vec<f64>>)> {
    let l = table.labels.len();
    if d != l {
        return Err(SymmetryError::invalid_table(format!("unexpected size of character table {l} != {d}")));
    }

    let mut matrix = vec![vec![0.0; l]; l];
    for (i, descriptor) in table.classes.iter().enumerate() {
        let sop = ops.iter().find(|op| descriptor.matches(op)).ok_or_else(|| {
            SymmetryError::invalid_table(format!(
                "could not find representative symmetry operation for class {i} when generating character table"
            ))
        })?;
        if sop.class >= l {
            return Err(SymmetryError::invalid_table(format!("conjugacy class exceeds character table size {} >= {l}", sop.class)));
        }
        for row in 0..l {
            matrix[row][sop.class] = table.rows[row][i];
        }
    }

    let labels = table.labels.iter().map(|s| (*s).to_string()).collect();
    let dims = table.dims.to_vec();
    Ok((labels, dims, matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn op(kind: OperationKind, order: u32, power: i32, class: usize) -> SymmetryOperation {
        let mut sop = SymmetryOperation::new(kind, order, power, Vec3::new(0.0, 0.0, 1.0), Orientation::None);
        sop.class = class;
        sop
    }

    #[test]
    fn td_binds_in_any_runtime_order() {
        let ops = vec![
            op(OperationKind::Reflection, 1, 1, 4),
            op(OperationKind::Identity, 1, 1, 0),
            op(OperationKind::ImproperRotation, 4, 1, 3),
            op(OperationKind::ProperRotation, 3, 1, 2),
            op(OperationKind::ProperRotation, 2, 1, 1),
        ];
        let (labels, dims, matrix) = bind(&ops, &TD, 5).unwrap();
        assert_eq!(labels, vec!["A1", "A2", "E", "T1", "T2"]);
        assert_eq!(dims, vec![1, 1, 2, 3, 3]);
        assert_eq!(matrix[3][4], -1.0);
        assert_eq!(matrix[0][2], 1.0);
    }

    #[test]
    fn missing_class_is_an_error() {
        let ops = vec![op(OperationKind::Identity, 1, 1, 0)];
        assert!(bind(&ops, &TD, 5).is_err());
    }

    #[test]
    fn size_mismatch_is_an_error() {
        let ops = vec![op(OperationKind::Identity, 1, 1, 0)];
        assert!(bind(&ops, &TD, 3).is_err());
    }
}
