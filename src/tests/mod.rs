//! Property-based tests over the universal invariants every generated
//! character table must satisfy, independent of which point group produced
//! it: row orthogonality, the identity column equalling irrep dimension,
//! `sum(dim^2) == |G|`, and decomposition exactness.
//!
//! These complement the per-module unit tests with randomized `n` over the
//! cyclic/dihedral families, which are cheap to construct without a real
//! classifier.


use crate::core::{GroupType, OperationKind, Orientation, SymmetryOperation};
use crate::math::Vec3;
use crate::{decompose, generate_character_table};
use quickcheck::{quickcheck, TestResult};

/// Build the operation list of a `C_nv` group for order parameter `n >= 1`
/// with the true conjugacy-class structure: identity; rotation powers `k`
/// and `n-k` conjugate into one class each (a lone `C2` forms its own
/// singleton class when `n` is even); and the `n` vertical mirrors, which
/// stay in one class for odd `n` but split into two alternating classes of
/// `n/2` planes each for even `n`.
fn cnv_ops(n: u32) -> Vec<SymmetryOperation> {
    let z = Vec3::new(0.0, 0.0, 1.0);
    let mut ops = Vec::new();
    let mut next_class = 0usize;

    let mut make = |kind, order, power, orientation, class| {
        let mut sop = SymmetryOperation::new(kind, order, power, z, orientation);
        sop.class = class;
        sop
    };

    ops.push(make(OperationKind::Identity, 1, 1, Orientation::Horizontal, next_class));
    next_class += 1;

    let mut assigned = vec![false; n as usize];
    for k in 1..n {
        if assigned[k as usize] {
            continue;
        }
        let partner = n - k;
        ops.push(make(OperationKind::ProperRotation, n, k as i32, Orientation::Horizontal, next_class));
        assigned[k as usize] = true;
        if partner != k {
            ops.push(make(OperationKind::ProperRotation, n, partner as i32, Orientation::Horizontal, next_class));
            assigned[partner as usize] = true;
        }
        next_class += 1;
    }

    if n % 2 == 0 {
        for _ in 0..n / 2 {
            ops.push(make(OperationKind::Reflection, 1, 1, Orientation::Vertical, next_class));
        }
        next_class += 1;
        for _ in 0..n / 2 {
            ops.push(make(OperationKind::Reflection, 1, 1, Orientation::Dihedral, next_class));
        }
    } else {
        for _ in 0..n {
            ops.push(make(OperationKind::Reflection, 1, 1, Orientation::Vertical, next_class));
        }
    }

    ops
}

quickcheck! {
    fn row_orthogonality_holds_for_any_cnv(n: u8) -> TestResult {
        let n = u32::from(n % 10) + 1;
        let ops = cnv_ops(n);
        let Ok(ct) = generate_character_table(GroupType::Cnv, n, &ops, None) else {
            return TestResult::discard();
        };
        // generate_character_table already verifies orthogonality internally;
        // re-derive it here against the returned table as an independent check.
        for i in 0..ct.d {
            for j in (i + 1)..ct.d {
                let r: f64 = (0..ct.d).map(|k| ct.classc[k] as f64 * ct.table[i][k] * ct.table[j][k]).sum();
                if r.abs() > 1e-8 {
                    return TestResult::from_bool(false);
                }
            }
        }
        TestResult::passed()
    }

    fn identity_column_equals_dimension_for_any_cnv(n: u8) -> TestResult {
        let n = u32::from(n % 10) + 1;
        let ops = cnv_ops(n);
        let Ok(ct) = generate_character_table(GroupType::Cnv, n, &ops, None) else {
            return TestResult::discard();
        };
        TestResult::from_bool(ct.species.iter().enumerate().all(|(row, species)| ct.table[row][0] == f64::from(species.dim)))
    }

    fn sum_of_squared_dimensions_equals_order_for_any_cnv(n: u8) -> TestResult {
        let n = u32::from(n % 10) + 1;
        let ops = cnv_ops(n);
        let Ok(ct) = generate_character_table(GroupType::Cnv, n, &ops, None) else {
            return TestResult::discard();
        };
        let sum: u32 = ct.species.iter().map(|s| u32::from(s.dim) * u32::from(s.dim)).sum();
        TestResult::from_bool(sum as usize == ct.order())
    }

    fn decomposing_a_table_row_recovers_the_unit_vector(n: u8, row_seed: u8) -> TestResult {
        let n = u32::from(n % 8) + 1;
        let ops = cnv_ops(n);
        let Ok(ct) = generate_character_table(GroupType::Cnv, n, &ops, None) else {
            return TestResult::discard();
        };
        let row = usize::from(row_seed) % ct.d;
        let Ok(dspan) = decompose(&ct, &ct.table[row]) else {
            return TestResult::from_bool(false);
        };
        TestResult::from_bool(dspan.iter().enumerate().all(|(i, value)| {
            let expected = if i == row { 1.0 } else { 0.0 };
            (value - expected).abs() < 1e-6
        }))
    }
}
