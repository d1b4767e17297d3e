//! Camera - orbit camera driven by incremental axis-angle rotations
//!
//! The camera always looks at the origin. Every rotation is applied to both
//! `position` and `up` through the same matrix, so their lengths and the
//! angle between them never change (up to floating-point drift, which
//! `renormalize` removes).
//!
//! Rotating the camera one way is the same as rotating the world the other
//! way: the stored vectors turn by `-theta` while the accumulated view
//! rotation turns by `+theta`.

use std::f64::consts::PI;

use glam::{DMat3, DVec3};
use hexad_core::{HexadError, HexadResult, ATOM_BITS};
use tracing::warn;

/// Spin phase advanced per degree of rotation
pub const SPIN_RATE: f64 = 0.1;

/// Spin phase wraps at this value
pub const SPIN_PERIOD: f64 = 16.0 * PI;

const MIN_LENGTH: f64 = 1e-9;

/// Counterclockwise rotation by `theta` radians about `axis`.
///
/// Built from the unit quaternion (cos θ/2, sin θ/2 · axis). Returns `None`
/// when the axis has no direction.
pub fn rotation_matrix(theta: f64, axis: DVec3) -> Option<DMat3> {
    let axis = axis.try_normalize()?;
    let half = theta / 2.0;
    let a = half.cos();
    let DVec3 { x: b, y: c, z: d } = axis * half.sin();

    let (aa, bb, cc, dd) = (a * a, b * b, c * c, d * d);
    let (bc, ad, ac, ab, bd, cd) = (b * c, a * d, a * c, a * b, b * d, c * d);

    Some(DMat3::from_cols(
        DVec3::new(aa + bb - cc - dd, 2.0 * (bc + ad), 2.0 * (bd - ac)),
        DVec3::new(2.0 * (bc - ad), aa + cc - bb - dd, 2.0 * (cd + ab)),
        DVec3::new(2.0 * (bd + ac), 2.0 * (cd - ab), aa + dd - bb - cc),
    ))
}

/// View parameters for a look-at transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    pub eye: DVec3,
    pub target: DVec3,
    pub up: DVec3,
}

/// Orbit camera
#[derive(Debug, Clone)]
pub struct Camera {
    position: DVec3,
    up: DVec3,
    /// Idle rotation axis
    moment: DVec3,
    /// Idle rotation speed, degrees per frame
    aspeed: f64,
    /// Accumulated visual rotation (inverse of what the stored vectors saw)
    view_rotation: DMat3,
    zoom: f64,
    spin_phase: f64,
    spin_rate: f64,
    radius: f64,
    up_length: f64,
}

impl Camera {
    /// Create a camera at `position` with the given up vector
    pub fn new(position: DVec3, up: DVec3) -> HexadResult<Self> {
        let radius = checked_length(position, "camera position")?;
        let up_length = checked_length(up, "camera up")?;

        Ok(Camera {
            position,
            up,
            moment: DVec3::Y,
            aspeed: 0.1,
            view_rotation: DMat3::IDENTITY,
            zoom: 1.0,
            spin_phase: 0.0,
            spin_rate: SPIN_RATE,
            radius,
            up_length,
        })
    }

    /// Set the idle angular momentum
    pub fn with_momentum(mut self, aspeed: f64, moment: DVec3) -> Self {
        self.set_momentum(aspeed, moment);
        self
    }

    pub fn with_spin_rate(mut self, spin_rate: f64) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    #[inline]
    pub fn up(&self) -> DVec3 {
        self.up
    }

    #[inline]
    pub fn moment(&self) -> DVec3 {
        self.moment
    }

    #[inline]
    pub fn aspeed(&self) -> f64 {
        self.aspeed
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn view_rotation(&self) -> DMat3 {
        self.view_rotation
    }

    #[inline]
    pub fn spin_phase(&self) -> f64 {
        self.spin_phase
    }

    /// Rotate by `theta` degrees about `axis`. A zero axis does nothing.
    pub fn rotate(&mut self, theta: f64, axis: DVec3) {
        if !theta.is_finite() {
            warn!(theta, "ignoring non-finite rotation angle");
            return;
        }
        let Some(stored) = rotation_matrix(-theta.to_radians(), axis) else {
            return;
        };

        self.position = stored * self.position;
        self.up = stored * self.up;
        self.view_rotation = self.view_rotation * stored.transpose();

        self.spin_phase = (self.spin_phase + self.spin_rate * theta).rem_euclid(SPIN_PERIOD);
    }

    /// One frame of idle spin from the residual momentum
    pub fn idle(&mut self) {
        self.rotate(self.aspeed, self.moment);
    }

    pub fn set_momentum(&mut self, aspeed: f64, moment: DVec3) {
        if !aspeed.is_finite() || !moment.is_finite() {
            warn!(aspeed, "ignoring non-finite momentum");
            return;
        }
        self.aspeed = aspeed;
        self.moment = moment;
    }

    /// Multiply the zoom factor. Stored vectors are unaffected.
    pub fn scale(&mut self, sigma: f64) {
        if !sigma.is_finite() || sigma <= 0.0 {
            warn!(sigma, "ignoring invalid zoom factor");
            return;
        }
        self.zoom *= sigma;
    }

    /// Screen-right direction, falling back to an axis orthogonal to `up`
    /// when the camera sits on its own up line.
    pub fn right(&self) -> DVec3 {
        self.up
            .cross(-self.position)
            .try_normalize()
            .unwrap_or_else(|| {
                self.up
                    .try_normalize()
                    .map(|up| up.any_orthonormal_vector())
                    .unwrap_or(DVec3::X)
            })
    }

    /// Look-at parameters: eye at the camera, target at the origin
    pub fn orient(&self) -> LookAt {
        LookAt {
            eye: self.position,
            target: DVec3::ZERO,
            up: self.up,
        }
    }

    /// Per-position weights for the unfold animation
    pub fn spin(&self) -> [f64; ATOM_BITS] {
        let theta = self.spin_phase;
        [
            (theta + PI / 3.0).sin(),
            (2.0 * theta + 2.0 * PI / 3.0).sin(),
            (3.0 * theta + PI).sin(),
            0.0,
            0.0,
            0.0,
        ]
    }

    /// Restore the construction-time lengths of `position` and `up`
    pub fn renormalize(&mut self) {
        if let Some(dir) = self.position.try_normalize() {
            self.position = dir * self.radius;
        }
        if let Some(dir) = self.up.try_normalize() {
            self.up = dir * self.up_length;
        }
    }
}

fn checked_length(v: DVec3, what: &'static str) -> HexadResult<f64> {
    let length = v.length();
    if !length.is_finite() || length < MIN_LENGTH {
        return Err(HexadError::DegenerateVector(what));
    }
    Ok(length)
}
