//! Projection of molecular geometries and wave functions onto
//! irrep-labeled subspaces (§4.7, §4.8).

pub mod geometry;
pub mod wavefunction;

pub use geometry::{symmetrize_molecule, symmetrize_molecule_linear, symmetrize_translation, EquivalenceSet, Thresholds};
pub use wavefunction::{symmetrize_wavefunctions, Salc};
