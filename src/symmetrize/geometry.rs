//! Geometry symmetrizer: projects atomic positions onto the
//! totally-symmetric subspace under a permutation representation (§4.7).

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::operation::SymmetryOperation;
use crate::math::Vec3;

/// A group of atoms permuted among themselves by every group operation.
#[derive(Debug, Clone)]
pub struct EquivalenceSet {
    /// Current positions, one per member, mutated in place by
    /// [`symmetrize_molecule`].
    pub positions: Vec<Vec3>,
    /// `permutations[j][k]` is the index within this set that member `k`
    /// maps to under group operation `j`.
    pub permutations: Vec<Vec<usize>>,
}

/// Numerical thresholds governing symmetrization (§6).
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Squared-length threshold below which a singleton equivalence set is
    /// treated as sitting exactly at the origin (and so contributes no
    /// error even though `ol` is ~0).
    pub zero: f64,
}

/// Apply every operation in `ops` to `set`'s current positions, scatter the
/// results through `set.permutations`, and overwrite each position with the
/// group average. Returns the per-set contribution `(ol - sl) / ol` used by
/// [`symmetrize_molecule`]'s error accumulation, or `None` when the set is
/// exempted by the zero threshold.
fn project_and_average(set: &mut EquivalenceSet, ops: &[SymmetryOperation], project: impl Fn(Vec3) -> Vec3, thresholds: Thresholds) -> SymmetryResult<Option<f64>> {
    let order = ops.len();
    if set.positions.len() > order {
        return Err(SymmetryError::symmetrization(format!(
            "equivalence set ({} elements) larger than order of point group ({order})",
            set.positions.len()
        )));
    }

    let mut accumulated = vec![Vec3::zero(); order];
    for (j, op) in ops.iter().enumerate() {
        for (k, &position) in set.positions.iter().enumerate() {
            let p = set.permutations[j][k];
            let moved = op.apply(project(position));
            accumulated[p] = accumulated[p].add(moved);
        }
    }

    let mut ol = 0.0;
    let mut sl = 0.0;
    for (k, position) in set.positions.iter_mut().enumerate() {
        ol += position.length_squared();
        sl += accumulated[k].length_squared();
        *position = accumulated[k].scale(1.0 / order as f64);
    }
    sl /= (order as f64) * (order as f64);

    if set.positions.len() == 1 && ol <= thresholds.zero {
        Ok(None)
    } else {
        Ok(Some((ol - sl) / ol))
    }
}

/// Symmetrize every equivalence set in `sets` by group-averaging projection
/// onto the totally symmetric subspace (§4.7, step 1-3). Returns the RMS
/// residual error `sqrt(max(sum_i (ol_i - sl_i)/ol_i, 0))`.
pub fn symmetrize_molecule(ops: &[SymmetryOperation], sets: &mut [EquivalenceSet], thresholds: Thresholds) -> SymmetryResult<f64> {
    let mut e = 0.0;
    for set in sets.iter_mut() {
        if let Some(contribution) = project_and_average(set, ops, |v| v, thresholds)? {
            e += contribution;
        }
    }
    Ok(e.max(0.0).sqrt())
}

/// The linear-group path for `C_inf_v`/`D_inf_h` (detected by the caller as
/// `n == 0`): project each position onto the principal `C_inf` axis before
/// symmetrizing, and take the max of per-set errors rather than the sum.
pub fn symmetrize_molecule_linear(ops: &[SymmetryOperation], sets: &mut [EquivalenceSet], thresholds: Thresholds) -> SymmetryResult<f64> {
    let axis = ops
        .iter()
        .find(|op| matches!(op.kind, crate::core::operation::OperationKind::ProperRotation) && op.order == 0)
        .map(|op| op.axis)
        .ok_or_else(|| SymmetryError::symmetrization("cannot find C_inf operation in linear point group"))?;

    let mut e = 0.0f64;
    for set in sets.iter_mut() {
        if let Some(contribution) = project_and_average(set, ops, |v| v.project_onto(axis), thresholds)? {
            e = e.max(contribution);
        }
    }
    Ok(e.sqrt())
}

/// Rigidly displace one member (`atom_index`) of `set` by `translation`,
/// redistributing the displacement across the whole set by group-averaging
/// (§6's `symmetrizeTranslation`).
pub fn symmetrize_translation(ops: &[SymmetryOperation], set: &mut EquivalenceSet, atom_index: usize, translation: Vec3) {
    let order = ops.len();
    let mut v = vec![Vec3::zero(); set.positions.len()];
    for (j, op) in ops.iter().enumerate() {
        let p = set.permutations[j][atom_index];
        v[p] = v[p].add(op.apply(translation));
    }
    let scale = set.positions.len() as f64 / order as f64;
    for (position, displacement) in set.positions.iter_mut().zip(v) {
        *position = position.add(displacement.scale(scale));
    }
}
