//! Small numeric building blocks shared by the table generators and the
//! symmetrizers.
//!
//! This module centralizes the handful of formulas that are reused across
//! the crate: the 3-D vector algebra needed to apply a symmetry operation to
//! an atomic position, and the golden-ratio constants used by the
//! icosahedral predefined tables.
//!
//! # References
//!
//! - Cotton, F. A. "Chemical Applications of Group Theory" (3rd ed., 1990) —
//!   character formulas and the icosahedral tables.
//! - DLMF §4.21 <https://dlmf.nist.gov/4.21> — golden ratio trigonometric
//!   identities used for the `C2PI`/`C4PI` constants.

pub mod vector;

pub use vector::Vec3;

/// `2*cos(2*pi/5) = (sqrt(5) - 1) / 2`, the golden-ratio constant that
/// appears in the I and Ih character tables.
pub const C2PI: f64 = 0.618_033_988_749_894_8;

/// `2*cos(4*pi/5) = -(sqrt(5) + 1) / 2`.
pub const C4PI: f64 = -1.618_033_988_749_894_8;

/// Numerical tolerance for row-orthogonality verification of a generated
/// character table (see §4.5 of the table-assembly design).
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-10;

/// `2*cos(theta)`, the trace of a 2x2 rotation block by `theta` radians.
///
/// Used by the character formula for 2-D irreps of cyclic and dihedral
/// families: `χ(C_n^k) = 2*cos(2*pi*l*k/n)`.
#[must_use]
pub fn two_cos(theta: f64) -> f64 {
    2.0 * theta.cos()
}
