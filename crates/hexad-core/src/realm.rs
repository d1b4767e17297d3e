//! Realm classification
//!
//! Realms partition the 64 atoms into 11 classes:
//! - 0, 1, 9, 10: all atoms of cardinality 0, 1, 5 and 6
//! - 2, 3: cardinality 2, split by the antipodal-pair set
//! - 4, 5, 6: cardinality 3, split by two complementary sets
//! - 7, 8: cardinality 4, split by the complements of the realm 3 set
//!
//! The membership sets are fixed lookup tables. They are not derived.

use std::fmt;

use crate::{Atom, HexadError, HexadResult};

/// Number of realms
pub const REALM_COUNT: usize = 11;

/// Cardinality 2 atoms of realm 3
pub const REALM3_VALUES: [u8; 3] = [33, 18, 12];

/// Cardinality 3 atoms of realm 4
pub const REALM4_VALUES: [u8; 4] = [11, 21, 38, 56];

/// Cardinality 3 atoms of realm 6 (complements of realm 4)
pub const REALM6_VALUES: [u8; 4] = [63 - 11, 63 - 21, 63 - 38, 63 - 56];

/// Cardinality 4 atoms of realm 7 (complements of realm 3)
pub const REALM7_VALUES: [u8; 3] = [63 - 33, 63 - 18, 63 - 12];

/// Realms whose members all fold onto the origin (antipodal face pairs)
pub const COLLAPSED_REALMS: [u8; 2] = [3, 7];

/// Color in RGB (0.0 - 1.0 range)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Scale every channel by `factor`
    pub fn scaled(&self, factor: f32) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }
}

/// Base color of each realm, indexed by realm id
pub const REALM_PALETTE: [Color; REALM_COUNT] = [
    Color::new(0.0, 0.0, 0.0), // black
    Color::new(1.0, 1.0, 1.0), // white
    Color::new(1.0, 0.0, 0.0), // red
    Color::new(0.0, 1.0, 1.0), // cyan
    Color::new(0.0, 0.0, 1.0), // blue
    Color::new(1.0, 0.0, 1.0), // magenta
    Color::new(0.0, 1.0, 0.0), // green
    Color::new(0.5, 0.8, 1.0), // sky
    Color::new(0.4, 0.0, 0.8), // purple
    Color::new(0.8, 0.4, 0.0), // orange
    Color::new(1.0, 1.0, 0.0), // gold
];

/// Realm identity (0..=10)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RealmId(u8);

impl RealmId {
    pub const EMPTY: RealmId = RealmId(0);
    pub const FULL: RealmId = RealmId(10);

    pub fn new(id: u8) -> HexadResult<Self> {
        if id as usize >= REALM_COUNT {
            return Err(HexadError::RealmOutOfRange(id));
        }
        Ok(RealmId(id))
    }

    /// All realms in id order
    pub fn all() -> impl ExactSizeIterator<Item = RealmId> {
        (0..REALM_COUNT as u8).map(RealmId)
    }

    /// All realms as an array indexed by id
    pub fn array() -> [RealmId; REALM_COUNT] {
        std::array::from_fn(|i| RealmId(i as u8))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn color(self) -> Color {
        REALM_PALETTE[self.index()]
    }
}

impl TryFrom<u8> for RealmId {
    type Error = HexadError;

    fn try_from(id: u8) -> HexadResult<Self> {
        RealmId::new(id)
    }
}

impl fmt::Debug for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Realm({})", self.0)
    }
}

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classify an atom by cardinality and value.
///
/// Total over any input: counts above 6 land in the last realm.
pub fn classify(count: u8, value: u8) -> RealmId {
    let id = match count {
        0 => 0,
        1 => 1,
        2 if REALM3_VALUES.contains(&value) => 3,
        2 => 2,
        3 if REALM4_VALUES.contains(&value) => 4,
        3 if REALM6_VALUES.contains(&value) => 6,
        3 => 5,
        4 if REALM7_VALUES.contains(&value) => 7,
        4 => 8,
        5 => 9,
        _ => 10,
    };
    RealmId(id)
}

/// Classify an atom
#[inline]
pub fn classify_atom(atom: Atom) -> RealmId {
    classify(atom.count(), atom.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AtomSpace;

    #[test]
    fn test_concrete_classifications() {
        assert_eq!(classify_atom(Atom::new(0).unwrap()).get(), 0);
        assert_eq!(classify_atom(Atom::new(63).unwrap()).get(), 10);
        assert_eq!(classify_atom(Atom::new(33).unwrap()).get(), 3);
        assert_eq!(classify_atom(Atom::new(34).unwrap()).get(), 2);
        assert_eq!(classify_atom(Atom::new(11).unwrap()).get(), 4);
        assert_eq!(classify_atom(Atom::new(52).unwrap()).get(), 6);
        assert_eq!(classify_atom(Atom::new(13).unwrap()).get(), 5);
        assert_eq!(classify_atom(Atom::new(45).unwrap()).get(), 7);
        assert_eq!(classify_atom(Atom::new(15).unwrap()).get(), 8);
    }

    #[test]
    fn test_derived_sets() {
        assert_eq!(REALM6_VALUES, [52, 42, 25, 7]);
        assert_eq!(REALM7_VALUES, [30, 45, 51]);
    }

    #[test]
    fn test_realm_sizes() {
        let mut sizes = [0usize; REALM_COUNT];
        for atom in AtomSpace::all() {
            sizes[classify_atom(atom).index()] += 1;
        }
        assert_eq!(sizes, [1, 6, 12, 3, 4, 12, 4, 3, 12, 6, 1]);
    }

    #[test]
    fn test_cardinality_partition() {
        for atom in AtomSpace::all() {
            let realm = classify_atom(atom).get();
            let allowed: &[u8] = match atom.count() {
                0 => &[0],
                1 => &[1],
                2 => &[2, 3],
                3 => &[4, 5, 6],
                4 => &[7, 8],
                5 => &[9],
                _ => &[10],
            };
            assert!(allowed.contains(&realm), "{:?} -> {}", atom, realm);
        }
    }

    #[test]
    fn test_realm_id_bounds() {
        assert!(RealmId::new(10).is_ok());
        assert_eq!(RealmId::new(11), Err(HexadError::RealmOutOfRange(11)));
        assert_eq!(RealmId::all().count(), REALM_COUNT);
        for (i, id) in RealmId::array().iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_palette_scaling() {
        let dim = RealmId::new(2).unwrap().color().scaled(0.35);
        assert!((dim.r - 0.35).abs() < 1e-6);
        assert_eq!(dim.g, 0.0);
    }
}
