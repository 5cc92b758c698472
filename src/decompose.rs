//! Decomposition of a reducible representation into irreducibles, and the
//! pointwise direct product of two class-indexed character vectors (§4.6).

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::table::CharacterTable;

/// Reduce `rspan`, a class-indexed character vector of a (possibly
/// reducible) representation, into multiplicities of `ct`'s irreps via the
/// standard reduction formula:
/// `dspan[k] = (1/|G|) * sum_j classc[j] * rspan[j] * chi_k(j)`.
pub fn decompose(ct: &CharacterTable, rspan: &[f64]) -> SymmetryResult<Vec<f64>> {
    if rspan.len() != ct.d {
        return Err(SymmetryError::invalid_table(format!(
            "reducible representation has {} classes, table has {}",
            rspan.len(),
            ct.d
        )));
    }
    let order = ct.order() as f64;
    Ok((0..ct.d)
        .map(|k| {
            let sum: f64 = (0..ct.d).map(|j| ct.classc[j] as f64 * rspan[j] * ct.table[k][j]).sum();
            sum / order
        })
        .collect())
}

/// Pointwise product of two class-indexed character vectors,
/// `p[i] = a[i] * b[i]`. Symmetric: `direct_product(a, b) == direct_product(b, a)`.
pub fn direct_product(a: &[f64], b: &[f64]) -> SymmetryResult<Vec<f64>> {
    if a.len() != b.len() {
        return Err(SymmetryError::invalid_table(format!(
            "direct product operands have mismatched lengths ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}
