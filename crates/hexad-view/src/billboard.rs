//! Billboard basis - camera-facing markers
//!
//! A marker is a flat quad centered on a tetrad and turned toward the camera.
//! Its wireframe connects the quad corners along the tetrad's template edges.

use glam::DVec3;
use hexad_core::Tetrad;
use tracing::trace;

use crate::Camera;

/// Up axis used when the camera's own up is unusable
pub const DEFAULT_UP: DVec3 = DVec3::Y;

/// View direction used when the camera sits on the marker
pub const DEFAULT_VIEW: DVec3 = DVec3::Z;

/// Camera-facing local frame at a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardBasis {
    /// Unit vector from the point toward the camera
    pub delta: DVec3,
    pub up: DVec3,
    pub right: DVec3,
}

impl BillboardBasis {
    /// Basis at `center` for a camera at `eye` with up vector `up`
    pub fn facing(eye: DVec3, up: DVec3, center: DVec3) -> Self {
        let delta = direction(eye - center).unwrap_or_else(|| {
            trace!(?center, "camera on marker, using default view");
            DEFAULT_VIEW
        });

        let local_up = reject(up, delta)
            .or_else(|| reject(DEFAULT_UP, delta))
            .or_else(|| reject(DVec3::X, delta))
            .unwrap_or(DEFAULT_UP);

        // Both inputs are unit and orthogonal
        let local_right = local_up.cross(delta).normalize();

        BillboardBasis {
            delta,
            up: local_up,
            right: local_right,
        }
    }

    pub fn for_camera(camera: &Camera, center: DVec3) -> Self {
        Self::facing(camera.position(), camera.up(), center)
    }

    /// Quad corners around `center`: up-right, up+right, -up-right, -up+right
    pub fn corners(&self, center: DVec3, scale: f64) -> [DVec3; 4] {
        let (u, r) = (self.up * scale, self.right * scale);
        [
            center + u - r,
            center + u + r,
            center - u - r,
            center - u + r,
        ]
    }
}

/// Shorter vectors than this count as no direction
const MIN_LENGTH: f64 = 1e-6;

fn direction(v: DVec3) -> Option<DVec3> {
    if v.length() < MIN_LENGTH {
        return None;
    }
    v.try_normalize()
}

/// Unit component of `v` orthogonal to unit `n`
fn reject(v: DVec3, n: DVec3) -> Option<DVec3> {
    direction(v - v.dot(n) * n)
}

/// Marker half-size for a tetrad: denser atoms draw smaller
#[inline]
pub fn marker_scale(size: f64, atom_count: u8) -> f64 {
    size / (atom_count as f64 + 1.0)
}

/// A tetrad's marker for one frame
#[derive(Debug, Clone)]
pub struct Marker {
    pub center: DVec3,
    pub corners: [DVec3; 4],
    /// Wireframe segments between corners
    pub wireframe: Vec<[DVec3; 2]>,
}

impl Marker {
    /// Build the marker of `tetrad` drawn at `center`
    pub fn new(tetrad: &Tetrad, center: DVec3, camera: &Camera, size: f64) -> Self {
        let basis = BillboardBasis::for_camera(camera, center);
        let corners = basis.corners(center, marker_scale(size, tetrad.atom_count()));
        let wireframe = tetrad
            .edges
            .iter()
            .map(|&[a, b]| [corners[a], corners[b]])
            .collect();

        Marker {
            center,
            corners,
            wireframe,
        }
    }
}
