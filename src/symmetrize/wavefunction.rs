//! Wave-function symmetrizer: classifies basis-expanded wave functions by
//! irrep, pairs partner functions of degenerate irreps, and reconstructs a
//! symmetrized wave-function matrix by averaging over partners (§4.8).
//!
//! Partner-function pairing is the heuristic flagged in the design notes
//! (§9): it greedily assigns each candidate partner to whichever slot its
//! distance improves most, processing wave functions in index order. This
//! is order-dependent for highly degenerate inputs by construction, not by
//! oversight — do not change the tie-break rule without updating the tests
//! that pin it down.

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::table::CharacterTable;
use crate::diagnostics::DiagnosticSink;

/// One symmetry-adapted linear combination: `dim` partner rows, each a
/// sparse expansion over a subset of the full basis-function list.
#[derive(Debug, Clone)]
pub struct Salc {
    /// Indices into the basis-function list this SALC is expressed over.
    pub basis_indices: Vec<usize>,
    /// `coeffs[d][j]` is the coefficient of `basis_indices[j]` in partner
    /// row `d`, for `d` in `0..dim`.
    pub coeffs: Vec<Vec<f64>>,
}

impl Salc {
    /// Number of partner rows (the dimension of the irrep this SALC belongs to).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.coeffs.len()
    }

    fn expand(&self, row: usize, basisl: usize) -> Vec<f64> {
        let mut out = vec![0.0; basisl];
        for (j, &basis_index) in self.basis_indices.iter().enumerate() {
            out[basis_index] = self.coeffs[row][j];
        }
        out
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum::<f64>().sqrt()
}

/// Symmetrize `wf` (a `basisl x basisl` matrix, one row per wave function)
/// against `salcs_by_irrep` (one SALC list per row of `ct`) and an expected
/// irrep-count vector `span`. Returns the symmetrized `basisl x basisl`
/// matrix.
pub fn symmetrize_wavefunctions(
    ct: &CharacterTable,
    salcs_by_irrep: &[Vec<Salc>],
    span: &[usize],
    wf: &[Vec<f64>],
    sink: Option<&dyn DiagnosticSink>,
) -> SymmetryResult<Vec<Vec<f64>>> {
    let basisl = wf.len();
    let md = ct.species.iter().map(|s| usize::from(s.dim)).max().unwrap_or(1).max(1);
    let psalcl: usize = salcs_by_irrep.iter().map(|s| s.len()).sum();

    let mut symwf = vec![vec![0.0; basisl]; basisl];
    let mut assigned_irrep = vec![0usize; basisl];
    let mut ispan = vec![0usize; ct.d];
    let mut salc_projection = vec![vec![0.0; psalcl]; basisl];
    let mut partner_dim_magnitude = vec![vec![0.0; md]; basisl];
    let mut salc_offset = vec![0usize; ct.d];

    // --- 1. Component analysis -------------------------------------------------
    for (o, wf_o) in wf.iter().enumerate() {
        let mut best_total = -1.0;
        let mut psalc_index = 0usize;
        for k in 0..ct.d {
            salc_offset[k] = psalc_index;
            let mut irrep_total = 0.0;
            for salc in &salcs_by_irrep[k] {
                let mut salc_total = 0.0;
                for d in 0..salc.dim() {
                    let expanded = salc.expand(d, basisl);
                    let projection = dot(wf_o, &expanded);
                    let magnitude = projection * projection;
                    irrep_total += magnitude;
                    salc_total += magnitude;
                    partner_dim_magnitude[o][d] += magnitude;
                }
                salc_projection[o][psalc_index] = salc_total.sqrt();
                psalc_index += 1;
            }
            if irrep_total > best_total {
                assigned_irrep[o] = k;
                best_total = irrep_total;
            }
        }
        ispan[assigned_irrep[o]] += 1;
    }

    // --- 2. Span check -----------------------------------------------------------
    for k in 0..ct.d {
        let expected = span[k] * usize::from(ct.species[k].dim);
        if ispan[k] != expected {
            return Err(SymmetryError::symmetrization(format!(
                "projected wave functions do not span the expected irreducible representations: expected {expected} {}, got {}",
                ct.species[k].label, ispan[k]
            )));
        }
    }

    // --- 3. Partner pairing -------------------------------------------------------
    // `partners[o]` holds the dim-1 partner indices found while `o` was the
    // processing leader; `-1` marks an unfilled slot. `claimed_by` records,
    // for each wave function, the leader that already listed it as a
    // partner, so it is skipped when its own turn comes.
    let mut partners: Vec<Vec<i64>> = vec![vec![-1; md]; basisl];
    let mut claimed_by: Vec<Option<usize>> = vec![None; basisl];

    for o in 0..basisl {
        if claimed_by[o].is_some() {
            continue;
        }
        let ko = assigned_irrep[o];
        let dim = usize::from(ct.species[ko].dim);
        if dim <= 1 {
            continue;
        }

        let mut best_distance = vec![f64::MAX; dim];
        let mut round: Vec<i64> = vec![-1; dim];

        for po in 0..basisl {
            if assigned_irrep[po] != ko || po == o {
                continue;
            }
            let distance = l2_distance(&salc_projection[o], &salc_projection[po]);
            let mut best_slot = 0usize;
            let mut best_improvement = 0.0;
            for slot in 1..dim {
                if distance < best_distance[slot] {
                    let improvement = (best_distance[slot] - distance).abs();
                    if improvement > best_improvement {
                        best_slot = slot;
                        best_improvement = improvement;
                    }
                }
            }
            if best_slot > 0 {
                best_distance[best_slot] = distance;
                round[best_slot] = i64::try_from(po).unwrap_or(-1);
            }
        }

        for slot in round.iter().skip(1) {
            if *slot >= 0 {
                let partner = *slot as usize;
                claimed_by[partner] = Some(o);
            }
        }
        partners[o] = round;
        partners[o][0] = i64::try_from(o).unwrap_or(-1);

        if let Some(sink) = sink {
            let labeled: Vec<usize> = partners[o][1..dim].iter().filter(|&&p| p >= 0).map(|&p| p as usize).collect();
            sink.partner_functions(o, &ct.species[ko].label, &labeled);
        }
    }

    // --- verify every degenerate wave function resolved fully -------------------
    for o in 0..basisl {
        let ko = assigned_irrep[o];
        let dim = usize::from(ct.species[ko].dim);
        if dim <= 1 || claimed_by[o].is_some() {
            continue;
        }
        for slot in partners[o].iter().take(dim).skip(1) {
            if *slot < 0 {
                return Err(SymmetryError::symmetrization(format!(
                    "could not determine partner function for wave function {o}"
                )));
            }
        }
    }

    // --- 4. Dimension assignment + 5. averaged reconstruction -------------------
    for o in 0..basisl {
        if claimed_by[o].is_some() {
            continue;
        }
        let ko = assigned_irrep[o];
        let dim = usize::from(ct.species[ko].dim);
        let group: Vec<usize> = if dim <= 1 {
            vec![o]
        } else {
            std::iter::once(o).chain(partners[o][1..dim].iter().map(|&p| p as usize)).collect()
        };

        // Greedily assign each partner its largest-magnitude unclaimed
        // dimension, preserving ordering when ties occur (§4.8 step 4).
        let mut dim_of: Vec<i64> = vec![-1; dim];
        for (i, &member) in group.iter().enumerate() {
            let mut best_dim = -1i64;
            let mut best_mag = 0.0;
            for d in 0..dim {
                let mag = partner_dim_magnitude[member][d];
                if mag > best_mag && !dim_of[..i].contains(&(d as i64)) {
                    best_dim = d as i64;
                    best_mag = mag;
                }
            }
            dim_of[i] = best_dim;
        }

        for (s, salc) in salcs_by_irrep[ko].iter().enumerate() {
            let psalc_index = salc_offset[ko] + s;
            let avg: f64 = group.iter().map(|&member| salc_projection[member][psalc_index]).sum::<f64>() / dim as f64;
            for (i, &member) in group.iter().enumerate() {
                let assigned_dim = dim_of[i];
                if assigned_dim < 0 {
                    continue;
                }
                let expanded = salc.expand(assigned_dim as usize, basisl);
                for (value, contribution) in symwf[member].iter_mut().zip(expanded) {
                    *value += avg * contribution;
                }
            }
        }
    }

    Ok(symwf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::group_type::GroupType;
    use crate::core::operation::{OperationKind, Orientation, SymmetryOperation};
    use crate::core::table::generate_character_table;
    use crate::math::Vec3;

    fn c3v_table() -> CharacterTable {
        let op = |kind, order, power, orientation, class| {
            let mut sop = SymmetryOperation::new(kind, order, power, Vec3::new(0.0, 0.0, 1.0), orientation);
            sop.class = class;
            sop
        };
        let ops = vec![
            op(OperationKind::Identity, 1, 1, Orientation::Horizontal, 0),
            op(OperationKind::ProperRotation, 3, 1, Orientation::Horizontal, 1),
            op(OperationKind::ProperRotation, 3, 2, Orientation::Horizontal, 1),
            op(OperationKind::Reflection, 1, 1, Orientation::Vertical, 2),
            op(OperationKind::Reflection, 1, 1, Orientation::Vertical, 2),
            op(OperationKind::Reflection, 1, 1, Orientation::Vertical, 2),
        ];
        generate_character_table(GroupType::Cnv, 3, &ops, None).unwrap()
    }

    #[test]
    fn two_totally_symmetric_functions_span_a1_only() {
        let ct = c3v_table();
        let salcs_by_irrep = vec![
            vec![Salc { basis_indices: vec![0], coeffs: vec![vec![1.0]] }],
            vec![],
            vec![],
        ];
        let wf = vec![vec![1.0]];
        let span = vec![1, 0, 0];
        let symwf = symmetrize_wavefunctions(&ct, &salcs_by_irrep, &span, &wf, None).unwrap();
        assert_eq!(symwf.len(), 1);
        assert!((symwf[0][0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn reconstruction_does_not_leak_across_irreps() {
        let ct = c3v_table();
        let salcs_by_irrep = vec![
            vec![Salc { basis_indices: vec![0], coeffs: vec![vec![1.0]] }],
            vec![],
            vec![Salc { basis_indices: vec![1, 2], coeffs: vec![vec![1.0, 0.0], vec![0.0, 1.0]] }],
        ];
        // Each wave function leans heavily on the irrep it belongs to, with a
        // small (0.1) component that overlaps the other irrep's SALC. A
        // reconstruction that folds in every irrep's SALCs instead of only
        // the owning one would carry that overlap into the output.
        let wf = vec![vec![1.0, 0.1, 0.1], vec![0.1, 1.0, 0.0], vec![0.1, 0.0, 1.0]];
        let span = vec![1, 0, 1];
        let symwf = symmetrize_wavefunctions(&ct, &salcs_by_irrep, &span, &wf, None).unwrap();
        assert!((symwf[0][0] - 1.0).abs() < 1e-9);
        assert!(symwf[0][1].abs() < 1e-9, "A1 reconstruction leaked into the E SALC: {:?}", symwf[0]);
        assert!(symwf[0][2].abs() < 1e-9, "A1 reconstruction leaked into the E SALC: {:?}", symwf[0]);
        assert!((symwf[1][1] - 1.0).abs() < 1e-9);
        assert!(symwf[1][0].abs() < 1e-9, "E reconstruction leaked into the A1 SALC: {:?}", symwf[1]);
        assert!((symwf[2][2] - 1.0).abs() < 1e-9);
        assert!(symwf[2][0].abs() < 1e-9, "E reconstruction leaked into the A1 SALC: {:?}", symwf[2]);
    }

    #[test]
    fn span_mismatch_is_rejected() {
        let ct = c3v_table();
        let salcs_by_irrep = vec![
            vec![Salc { basis_indices: vec![0], coeffs: vec![vec![1.0]] }],
            vec![],
            vec![],
        ];
        let wf = vec![vec![1.0]];
        let span = vec![0, 1, 0];
        assert!(symmetrize_wavefunctions(&ct, &salcs_by_irrep, &span, &wf, None).is_err());
    }
}
