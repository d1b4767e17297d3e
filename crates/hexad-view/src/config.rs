//! Viewer configuration

use std::time::Duration;

use glam::DVec3;
use hexad_core::{HexadError, HexadResult, LatticeRules};

use crate::SPIN_RATE;

/// Viewer configuration
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// Delay between frames
    pub frame_delay: Duration,
    /// Marker half-size before the per-count shrink
    pub marker_size: f64,
    /// Slider change per frame while a slider key is held
    pub slider_rate: f64,
    /// Zoom factor per scroll step
    pub zoom_step: f64,
    /// Drag distance (pixels) per degree of idle spin left behind
    pub drag_damping: f64,
    /// Frames between camera renormalizations, 0 disables
    pub renormalize_every: u64,
    pub initial_position: DVec3,
    pub initial_up: DVec3,
    /// Idle spin before the first drag, degrees per frame
    pub initial_aspeed: f64,
    pub initial_moment: DVec3,
    /// Unfold spin phase per degree of rotation
    pub spin_rate: f64,
    pub lattice: LatticeRules,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            frame_delay: Duration::from_millis(10),
            marker_size: 0.1,
            slider_rate: 0.01,
            zoom_step: 1.1,
            drag_damping: 8.0,
            renormalize_every: 600,
            initial_position: DVec3::new(1.0, 1.0, 0.0),
            initial_up: DVec3::Y,
            initial_aspeed: 0.1,
            initial_moment: DVec3::Y,
            spin_rate: SPIN_RATE,
            lattice: LatticeRules::default(),
        }
    }
}

impl ViewerConfig {
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
        self
    }

    pub fn with_camera(mut self, position: DVec3, up: DVec3) -> Self {
        self.initial_position = position;
        self.initial_up = up;
        self
    }

    pub fn with_momentum(mut self, aspeed: f64, moment: DVec3) -> Self {
        self.initial_aspeed = aspeed;
        self.initial_moment = moment;
        self
    }

    pub fn with_lattice_rules(mut self, lattice: LatticeRules) -> Self {
        self.lattice = lattice;
        self
    }

    /// Reject settings the frame loop cannot run with
    pub fn validate(&self) -> HexadResult<()> {
        let positive = [
            ("marker_size", self.marker_size),
            ("zoom_step", self.zoom_step),
            ("drag_damping", self.drag_damping),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HexadError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let finite = [
            ("slider_rate", self.slider_rate),
            ("initial_aspeed", self.initial_aspeed),
            ("spin_rate", self.spin_rate),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(HexadError::InvalidConfig(format!("{} must be finite", name)));
            }
        }

        if !self.initial_moment.is_finite() {
            return Err(HexadError::InvalidConfig("initial_moment must be finite".into()));
        }
        if !self.lattice.dim.is_finite() || self.lattice.dim < 0.0 {
            return Err(HexadError::InvalidConfig(format!(
                "lattice dim must be non-negative, got {}",
                self.lattice.dim
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_delay, Duration::from_millis(10));
        assert_eq!(config.lattice.dim, 0.35);
    }

    #[test]
    fn test_invalid_marker_size() {
        let config = ViewerConfig::default().with_marker_size(0.0);
        match config.validate() {
            Err(HexadError::InvalidConfig(msg)) => assert!(msg.contains("marker_size")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_momentum() {
        let config = ViewerConfig::default().with_momentum(f64::NAN, DVec3::Y);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_lattice_dim() {
        let config = ViewerConfig::default().with_lattice_rules(LatticeRules::default().with_dim(-1.0));
        assert!(config.validate().is_err());
    }
}
