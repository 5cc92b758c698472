//! Irrep generators for the `C_n`, `C_nh`, and `C_nv` families.
//!
//! Each function emits exactly `rl` descriptors for a given `n`, in the
//! fixed order the table assembler later zips against the class columns
//! (see §4.5). The schedules are deterministic functions of `n`'s parity.

use crate::core::error::{SymmetryError, SymmetryResult};
use crate::core::irrep::{IrrepDescriptor, IrrepKind};

fn checked_len(rl: usize, produced: usize, family: &str) -> SymmetryResult<()> {
    if produced != rl {
        return Err(SymmetryError::invalid_table(format!(
            "{family} generator produced {produced} descriptors, expected {rl}"
        )));
    }
    Ok(())
}

/// `A` (all +1); if `n` is even, `B` (`p = -1`, rest +1); then `E_i`
/// reducible-complex-pair 2-D blocks for `i = 1, 2, ...`.
pub fn generate_cn(n: u32, rl: usize) -> SymmetryResult<Vec<IrrepDescriptor>> {
    let mut reps = Vec::with_capacity(rl);
    reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, 1, 1, 1, 1));
    if n % 2 == 0 {
        reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, -1, 1, 1, 1));
    }
    let mut i = 1;
    while reps.len() < rl {
        reps.push(IrrepDescriptor::new(IrrepKind::ReduciblePair, 2, i, 1, 1, 1, 1));
        i += 1;
    }
    checked_len(rl, reps.len(), "Cn")?;
    Ok(reps)
}

/// `Ag`, `Au`; if `n` even, a `Bg`/`Bu` pair with `h` fixed by `n mod 4`;
/// then `E_ig`/`E_iu` reducible-complex-pair blocks with alternating
/// inversion sign.
pub fn generate_cnh(n: u32, rl: usize) -> SymmetryResult<Vec<IrrepDescriptor>> {
    let mut reps = Vec::with_capacity(rl);
    reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, 1, 1, 1, 1));
    reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, 1, 1, -1, -1));
    if n % 2 == 0 {
        let h = 1 - i8::try_from(n & 2).unwrap_or(0);
        reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, -1, 1, h, 1));
        reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, -1, 1, -h, -1));
    }
    let mut i = 1u32;
    while reps.len() < rl {
        let alt: i8 = if i % 2 == 1 { -1 } else { 1 };
        reps.push(IrrepDescriptor::new(IrrepKind::ReduciblePair, 2, i, 1, 1, 1, alt));
        reps.push(IrrepDescriptor::new(IrrepKind::ReduciblePair, 2, i, 1, 1, -1, -alt));
        i += 1;
    }
    checked_len(rl, reps.len(), "Cnh")?;
    Ok(reps)
}

/// `A1`, `A2` (`v = -1`); if `n` even, `B1`/`B2`; then irreducible `E_i`
/// 2-D blocks.
pub fn generate_cnv(n: u32, rl: usize) -> SymmetryResult<Vec<IrrepDescriptor>> {
    let mut reps = Vec::with_capacity(rl);
    reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, 1, 1, 1, 1));
    reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, 1, -1, 1, 1));
    if n % 2 == 0 {
        reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, -1, 1, 1, 1));
        reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 1, 0, -1, -1, 1, 1));
    }
    let mut i = 1;
    while reps.len() < rl {
        reps.push(IrrepDescriptor::new(IrrepKind::Irreducible, 2, i, 1, 1, 1, 1));
        i += 1;
    }
    checked_len(rl, reps.len(), "Cnv")?;
    Ok(reps)
}
