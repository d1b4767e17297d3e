//! Atoms - the 64 subsets of a 6-element set
//!
//! An atom is a 6-bit value. Bit `i` set means position `i` is active.

use std::fmt;

use crate::{HexadError, HexadResult};

/// Number of positions in an atom
pub const ATOM_BITS: usize = 6;

/// Number of distinct atoms (2^6)
pub const ATOM_COUNT: usize = 1 << ATOM_BITS;

const ATOM_MASK: u8 = (ATOM_COUNT - 1) as u8;

/// One subset of the 6-element set
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Atom(u8);

impl Atom {
    /// The empty subset
    pub const EMPTY: Atom = Atom(0);

    /// The full subset
    pub const FULL: Atom = Atom(ATOM_MASK);

    /// Create an atom from its integer value (0..=63)
    pub fn new(value: u8) -> HexadResult<Self> {
        if value > ATOM_MASK {
            return Err(HexadError::AtomOutOfRange(value));
        }
        Ok(Atom(value))
    }

    /// Create an atom from a boolean tuple, position 0 first
    pub fn from_bits(bits: [bool; ATOM_BITS]) -> Self {
        let mut value = 0u8;
        for (i, on) in bits.into_iter().enumerate() {
            if on {
                value |= 1 << i;
            }
        }
        Atom(value)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Boolean tuple view, position 0 first
    pub fn bits(self) -> [bool; ATOM_BITS] {
        let mut bits = [false; ATOM_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = self.is_active(i);
        }
        bits
    }

    /// Number of active positions (0..=6)
    #[inline]
    pub fn count(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline]
    pub fn is_active(self, position: usize) -> bool {
        position < ATOM_BITS && self.0 & (1 << position) != 0
    }

    /// Active positions in ascending order
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..ATOM_BITS).filter(move |&i| self.is_active(i))
    }

    /// Number of positions active in both atoms
    #[inline]
    pub fn intersection_count(self, other: Atom) -> u8 {
        (self.0 & other.0).count_ones() as u8
    }

    /// Symmetric difference, as a raw value
    #[inline]
    pub fn xor(self, other: Atom) -> u8 {
        self.0 ^ other.0
    }

    /// The complementary subset (63 - value)
    #[inline]
    pub fn complement(self) -> Atom {
        Atom(ATOM_MASK - self.0)
    }
}

impl TryFrom<u8> for Atom {
    type Error = HexadError;

    fn try_from(value: u8) -> HexadResult<Self> {
        Atom::new(value)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({:06b})", self.0)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full space of 64 atoms
pub struct AtomSpace;

impl AtomSpace {
    /// All atoms in value order
    pub fn all() -> impl ExactSizeIterator<Item = Atom> {
        (0..ATOM_COUNT as u8).map(Atom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_space_is_complete() {
        let atoms: Vec<Atom> = AtomSpace::all().collect();
        assert_eq!(atoms.len(), 64);
        for (i, atom) in atoms.iter().enumerate() {
            assert_eq!(atom.value() as usize, i);
        }
    }

    #[test]
    fn test_atom_out_of_range() {
        assert!(Atom::new(63).is_ok());
        assert_eq!(Atom::new(64), Err(HexadError::AtomOutOfRange(64)));
    }

    #[test]
    fn test_atom_bits() {
        let atom = Atom::new(0b100010).unwrap();
        assert_eq!(atom.bits(), [false, true, false, false, false, true]);
        assert_eq!(Atom::from_bits(atom.bits()), atom);
        assert_eq!(atom.positions().collect::<Vec<_>>(), vec![1, 5]);
        assert_eq!(atom.count(), 2);
    }

    #[test]
    fn test_atom_intersection_and_xor() {
        let a = Atom::new(5).unwrap();
        let b = Atom::new(6).unwrap();
        assert_eq!(a.intersection_count(b), 1);
        assert_eq!(a.xor(b), 3);
        assert_eq!(Atom::EMPTY.complement(), Atom::FULL);
    }
}
