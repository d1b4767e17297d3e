//! Frame geometry handed to the renderer
//!
//! Plain data only. The renderer draws markers as points, their wireframes
//! and lattice segments as lines, and applies `look_at` and `zoom` itself.

use hexad_core::{Color, RealmId};

use crate::{LookAt, Marker};

/// Lattice lines of one realm
#[derive(Debug, Clone)]
pub struct LatticeGeometry {
    /// Dimmed realm color
    pub color: Color,
    pub segments: Vec<[glam::DVec3; 2]>,
}

/// Everything drawn for one visible realm
#[derive(Debug, Clone)]
pub struct RealmGeometry {
    pub id: RealmId,
    pub color: Color,
    pub markers: Vec<Marker>,
    /// Present only in points+lattice mode
    pub lattice: Option<LatticeGeometry>,
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 640,
            height: 480,
        }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }
}

/// One frame's worth of geometry
#[derive(Debug, Clone)]
pub struct FrameGeometry {
    pub frame: u64,
    pub look_at: LookAt,
    pub zoom: f64,
    pub viewport: Viewport,
    pub realms: Vec<RealmGeometry>,
}

impl FrameGeometry {
    pub fn marker_count(&self) -> usize {
        self.realms.iter().map(|r| r.markers.len()).sum()
    }

    pub fn lattice_segment_count(&self) -> usize {
        self.realms
            .iter()
            .filter_map(|r| r.lattice.as_ref())
            .map(|l| l.segments.len())
            .sum()
    }

    pub fn wireframe_segment_count(&self) -> usize {
        self.realms
            .iter()
            .flat_map(|r| r.markers.iter())
            .map(|m| m.wireframe.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_aspect() {
        assert!((Viewport::default().aspect() - 4.0 / 3.0).abs() < 1e-12);
        let degenerate = Viewport {
            width: 10,
            height: 0,
        };
        assert_eq!(degenerate.aspect(), 10.0);
    }
}
