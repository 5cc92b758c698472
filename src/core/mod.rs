//! Core data model for character tables: symmetry operations, irrep
//! descriptors and naming, group-type dispatch, the assembled table, and
//! the crate's error type.

pub mod error;
pub mod group_type;
pub mod irrep;
pub mod operation;
pub mod table;

pub use error::{SymmetryError, SymmetryResult};
pub use group_type::{AxialFamily, GroupType, PolyhedralFamily};
pub use irrep::{mulliken_label, IrrepDescriptor, IrrepKind, Sign, SymmetrySpecies};
pub use operation::{OperationKind, Orientation, SymmetryOperation};
pub use table::{generate_character_table, CharacterTable};
