//! Hexad Core - The 6-cube as realms and lattices
//!
//! This crate holds everything about the 64 subsets of a 6-element set that
//! does not change while the picture turns:
//! - Atoms (the 64 subsets, as 6-bit values)
//! - Realms (11 symmetry classes, by cardinality and fixed value sets)
//! - Tetrads (per-atom geometry: center, wireframe, color)
//! - Lattices (same-realm adjacency graphs)
//!
//! All of it is computed once and read thereafter. Camera and per-frame
//! state live in `hexad-view`.

pub mod atom;
pub mod error;
pub mod lattice;
pub mod realm;
pub mod tetrad;

pub use atom::*;
pub use error::*;
pub use lattice::*;
pub use realm::*;
pub use tetrad::*;
