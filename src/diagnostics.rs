//! Optional observability hook (§5, §9).
//!
//! The reference implementation prints the assembled character table to
//! standard output as a debug artifact of `generateCharacterTable`. That is
//! not part of the contract, so instead every entry point that would have
//! printed takes an optional `&dyn DiagnosticSink` and calls into it;
//! passing `None` is silent and allocation-free.

use crate::core::irrep::SymmetrySpecies;

/// Receives diagnostic events during table generation and symmetrization.
/// Implement this to route internals to a logger, a test fixture, or a
/// terminal table dump; the default no-op is [`NullSink`].
pub trait DiagnosticSink {
    /// Called once a character table's species and character matrix have
    /// been assembled, before verification.
    fn character_table(&self, _species: &[SymmetrySpecies], _table: &[Vec<f64>]) {}

    /// Called once per wave function during partner-pairing, reporting the
    /// assigned irrep label and the partner indices found for it.
    fn partner_functions(&self, _wavefunction: usize, _irrep_label: &str, _partners: &[usize]) {}
}

/// A [`DiagnosticSink`] that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        labels: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn character_table(&self, species: &[SymmetrySpecies], _table: &[Vec<f64>]) {
            self.labels.borrow_mut().extend(species.iter().map(|s| s.label.clone()));
        }
    }

    #[test]
    fn null_sink_is_silent() {
        let sink = NullSink;
        sink.character_table(&[], &[]);
    }

    #[test]
    fn custom_sink_observes_species() {
        let sink = RecordingSink::default();
        let species = vec![SymmetrySpecies::new("A1", 1)];
        sink.character_table(&species, &[]);
        assert_eq!(sink.labels.borrow().as_slice(), ["A1"]);
    }
}
