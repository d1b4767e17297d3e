//! Property tests for realm classification and tetrad geometry

use hexad_core::{classify, classify_atom, Atom, Tetrad, REALM_COUNT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(value in 0u8..64) {
        let atom = Atom::new(value).unwrap();
        let first = classify_atom(atom);
        let second = classify(atom.count(), atom.value());
        prop_assert_eq!(first, second);
        prop_assert!(first.index() < REALM_COUNT);
    }

    #[test]
    fn classification_respects_complement(value in 0u8..64) {
        // Complement maps realms r -> 10 - r
        let atom = Atom::new(value).unwrap();
        let realm = classify_atom(atom).get();
        let mirrored = classify_atom(atom.complement()).get();
        prop_assert_eq!(realm + mirrored, 10);
    }

    #[test]
    fn tetrad_center_is_finite(value in 0u8..64) {
        let tetrad = Tetrad::new(Atom::new(value).unwrap());
        prop_assert!(tetrad.center.is_finite());
        prop_assert!(tetrad.center.length() <= 1.0);
        prop_assert_eq!(tetrad.edges.len(), tetrad.atom_count() as usize);
    }

    #[test]
    fn out_of_range_values_rejected(value in 64u8..=255) {
        prop_assert!(Atom::new(value).is_err());
    }
}
