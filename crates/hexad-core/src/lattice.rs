//! Lattice - adjacency among the tetrads of one realm
//!
//! Most realms connect every pair of members except pairs whose centers are
//! antipodal (the segment would run through the origin). Realms 2 and 8
//! connect by overlap instead: pairs sharing exactly one (realm 2) or three
//! (realm 8) positions, unless their symmetric difference is an antipodal
//! face pair.

use glam::DVec3;
use tracing::debug;

use crate::{Atom, Color, RealmId, Tetrad, COLLAPSED_REALMS, REALM3_VALUES, REALM_COUNT};

/// Dimming applied to the realm color for lattice lines
pub const LATTICE_DIM: f32 = 0.35;

/// Undirected edge between two member indices, `a < b`
pub type LatticeEdge = (usize, usize);

/// Construction rules shared by all realms
#[derive(Debug, Clone)]
pub struct LatticeRules {
    /// Realms where antipodal pairs are still connected
    null_realms: [bool; REALM_COUNT],
    /// Lattice color = realm color * dim
    pub dim: f32,
}

impl Default for LatticeRules {
    // Crossing exclusion everywhere; realms with fewer than two members
    // have no pairs to exclude anyway
    fn default() -> Self {
        LatticeRules {
            null_realms: [false; REALM_COUNT],
            dim: LATTICE_DIM,
        }
    }
}

impl LatticeRules {
    /// Waive crossing exclusion in the collapsed realms, so their lattices
    /// show once the unfold layout spreads them apart
    pub fn unfolding() -> Self {
        let mut rules = LatticeRules::default();
        for id in COLLAPSED_REALMS {
            rules.null_realms[id as usize] = true;
        }
        rules
    }

    /// Rules with the given realms waiving crossing exclusion
    pub fn with_null_realms(mut self, realms: &[RealmId]) -> Self {
        self.null_realms = [false; REALM_COUNT];
        for realm in realms {
            self.null_realms[realm.index()] = true;
        }
        self
    }

    pub fn with_dim(mut self, dim: f32) -> Self {
        self.dim = dim;
        self
    }

    #[inline]
    pub fn is_null_realm(&self, realm: RealmId) -> bool {
        self.null_realms[realm.index()]
    }
}

/// Overlap rule of realms 2 and 8. `None` for realms without one.
pub fn overlap_adjacent(realm: RealmId, a: Atom, b: Atom) -> Option<bool> {
    let shared = match realm.get() {
        2 => 1,
        8 => 3,
        _ => return None,
    };
    Some(a.intersection_count(b) == shared && !REALM3_VALUES.contains(&a.xor(b)))
}

/// Whether the segment between two centers passes through the origin
#[inline]
pub fn crosses_origin(a: DVec3, b: DVec3) -> bool {
    a + b == DVec3::ZERO
}

/// Edge set of one realm
#[derive(Debug, Clone)]
pub struct Lattice {
    pub realm: RealmId,
    edges: Vec<LatticeEdge>,
    pub color: Color,
}

impl Lattice {
    /// Build the lattice over `members`, which must all belong to `realm`
    pub fn build(realm: RealmId, members: &[Tetrad], rules: &LatticeRules) -> Self {
        let waive_crossing = rules.is_null_realm(realm);
        let mut edges = Vec::new();

        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let (a, b) = (&members[i], &members[j]);

                if !waive_crossing && crosses_origin(a.center, b.center) {
                    continue;
                }

                let connected = overlap_adjacent(realm, a.atom, b.atom).unwrap_or(true);
                if connected {
                    edges.push((i, j));
                }
            }
        }

        debug!(
            realm = realm.get(),
            members = members.len(),
            edges = edges.len(),
            "lattice built"
        );

        Lattice {
            realm,
            edges,
            color: realm.color().scaled(rules.dim),
        }
    }

    pub fn edges(&self) -> &[LatticeEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check an undirected edge in either order
    pub fn contains(&self, i: usize, j: usize) -> bool {
        let key = if i < j { (i, j) } else { (j, i) };
        self.edges.contains(&key)
    }

    /// Members connected to `i`
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| match (a == i, b == i) {
                (true, _) => Some(b),
                (_, true) => Some(a),
                _ => None,
            })
            .collect()
    }

    pub fn degree(&self, i: usize) -> usize {
        self.edges.iter().filter(|&&(a, b)| a == i || b == i).count()
    }

    /// Line segments over per-member points. Edges past `points` are skipped.
    pub fn segments(&self, points: &[DVec3]) -> Vec<[DVec3; 2]> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| Some([*points.get(a)?, *points.get(b)?]))
            .collect()
    }
}
