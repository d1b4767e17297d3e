//! Scene - the 11 realms with their members, lattices and visibility
//!
//! Built once at startup. Only the visibility modes change afterward.

use glam::DVec3;
use hexad_core::{Lattice, LatticeRules, RealmId, Tetrad, Unfold, REALM_COUNT};
use tracing::{debug, info};

use crate::{Camera, LatticeGeometry, Marker, RealmGeometry};

/// How much of a realm is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibilityMode {
    Hidden,
    #[default]
    Points,
    PointsAndLattice,
}

impl VisibilityMode {
    /// Hidden -> Points -> PointsAndLattice -> Hidden
    pub fn next(self) -> Self {
        match self {
            VisibilityMode::Hidden => VisibilityMode::Points,
            VisibilityMode::Points => VisibilityMode::PointsAndLattice,
            VisibilityMode::PointsAndLattice => VisibilityMode::Hidden,
        }
    }

    #[inline]
    pub fn shows_points(self) -> bool {
        self != VisibilityMode::Hidden
    }

    #[inline]
    pub fn shows_lattice(self) -> bool {
        self == VisibilityMode::PointsAndLattice
    }
}

/// One realm: its members in value order, its lattice and how it is drawn
#[derive(Debug, Clone)]
pub struct RealmRecord {
    pub id: RealmId,
    pub tetrads: Vec<Tetrad>,
    pub lattice: Lattice,
    pub mode: VisibilityMode,
}

impl RealmRecord {
    /// Centers of the members under the current unfold layout
    pub fn centers(&self, unfold: &Unfold, spin: &[f64; 6]) -> Vec<DVec3> {
        self.tetrads
            .iter()
            .map(|t| t.unfolded_center(unfold, spin))
            .collect()
    }

    /// Geometry for this frame, `None` when hidden
    pub fn geometry(&self, camera: &Camera, unfold: &Unfold, marker_size: f64) -> Option<RealmGeometry> {
        if !self.mode.shows_points() {
            return None;
        }

        let centers = self.centers(unfold, &camera.spin());
        let markers = self
            .tetrads
            .iter()
            .zip(&centers)
            .map(|(tetrad, &center)| Marker::new(tetrad, center, camera, marker_size))
            .collect();

        let lattice = self.mode.shows_lattice().then(|| LatticeGeometry {
            color: self.lattice.color,
            segments: self.lattice.segments(&centers),
        });

        Some(RealmGeometry {
            id: self.id,
            color: self.id.color(),
            markers,
            lattice,
        })
    }
}

/// All realms, indexed by realm id
#[derive(Debug, Clone)]
pub struct Scene {
    realms: [RealmRecord; REALM_COUNT],
}

impl Scene {
    /// Classify all atoms and build every lattice
    pub fn build(rules: &LatticeRules) -> Self {
        let mut buckets: [Vec<Tetrad>; REALM_COUNT] = Default::default();
        for tetrad in Tetrad::all() {
            buckets[tetrad.realm.index()].push(tetrad);
        }

        let realms = RealmId::array().map(|id| {
            let tetrads = std::mem::take(&mut buckets[id.index()]);
            let lattice = Lattice::build(id, &tetrads, rules);
            debug!(realm = id.get(), members = tetrads.len(), "realm classified");
            RealmRecord {
                id,
                tetrads,
                lattice,
                mode: VisibilityMode::default(),
            }
        });

        Scene { realms }
    }

    pub fn realm(&self, id: RealmId) -> &RealmRecord {
        &self.realms[id.index()]
    }

    pub fn realms(&self) -> impl Iterator<Item = &RealmRecord> {
        self.realms.iter()
    }

    pub fn mode(&self, id: RealmId) -> VisibilityMode {
        self.realms[id.index()].mode
    }

    pub fn set_mode(&mut self, id: RealmId, mode: VisibilityMode) {
        self.realms[id.index()].mode = mode;
    }

    /// Advance a realm to its next visibility mode
    pub fn toggle(&mut self, id: RealmId) -> VisibilityMode {
        let record = &mut self.realms[id.index()];
        record.mode = record.mode.next();
        info!(realm = id.get(), mode = ?record.mode, "realm visibility toggled");
        record.mode
    }

    /// Number of tetrads over all realms
    pub fn tetrad_count(&self) -> usize {
        self.realms.iter().map(|r| r.tetrads.len()).sum()
    }

    /// Geometry of every visible realm, in realm order
    pub fn geometry(&self, camera: &Camera, unfold: &Unfold, marker_size: f64) -> Vec<RealmGeometry> {
        self.realms
            .iter()
            .filter_map(|r| r.geometry(camera, unfold, marker_size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::build(&LatticeRules::default())
    }

    fn camera() -> Camera {
        Camera::new(DVec3::new(1.0, 1.0, 0.0), DVec3::Y).unwrap()
    }

    fn realm(id: u8) -> RealmId {
        RealmId::new(id).unwrap()
    }

    #[test]
    fn test_scene_covers_all_atoms() {
        let scene = scene();
        assert_eq!(scene.tetrad_count(), 64);
        for record in scene.realms() {
            assert!(record.tetrads.iter().all(|t| t.realm == record.id));
            assert_eq!(record.lattice.realm, record.id);
        }
        assert_eq!(scene.realm(realm(3)).tetrads.len(), 3);
    }

    #[test]
    fn test_visibility_cycle() {
        let mut scene = scene();
        let id = realm(5);
        assert_eq!(scene.mode(id), VisibilityMode::Points);
        assert_eq!(scene.toggle(id), VisibilityMode::PointsAndLattice);
        assert_eq!(scene.toggle(id), VisibilityMode::Hidden);
        assert_eq!(scene.toggle(id), VisibilityMode::Points);
    }

    #[test]
    fn test_hidden_realm_emits_nothing() {
        let mut scene = scene();
        scene.set_mode(realm(2), VisibilityMode::Hidden);
        let geometry = scene.geometry(&camera(), &Unfold::default(), 0.1);
        assert_eq!(geometry.len(), 10);
        assert!(geometry.iter().all(|g| g.id != realm(2)));
    }

    #[test]
    fn test_points_mode_has_no_lattice() {
        let scene = scene();
        let geometry = scene.realm(realm(9)).geometry(&camera(), &Unfold::default(), 0.1).unwrap();
        assert_eq!(geometry.markers.len(), 6);
        assert!(geometry.lattice.is_none());
        assert_eq!(geometry.color, realm(9).color());
    }

    #[test]
    fn test_lattice_mode_uses_centers() {
        let mut scene = scene();
        scene.set_mode(realm(9), VisibilityMode::PointsAndLattice);
        let geometry = scene.realm(realm(9)).geometry(&camera(), &Unfold::default(), 0.1).unwrap();
        let lattice = geometry.lattice.unwrap();
        assert_eq!(lattice.segments.len(), scene.realm(realm(9)).lattice.len());
        assert_eq!(lattice.color, realm(9).color().scaled(0.35));

        let record = scene.realm(realm(9));
        let (a, b) = record.lattice.edges()[0];
        assert_eq!(lattice.segments[0], [record.tetrads[a].center, record.tetrads[b].center]);
    }
}
