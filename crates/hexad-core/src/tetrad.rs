//! Tetrad - the geometric form of an atom
//!
//! Each position of an atom is bound to one face of a cube (a unit basis
//! direction) and to one edge of a tetrahedral wireframe. A tetrad sits at
//! the mean of its active face directions.

use glam::DVec3;

use crate::{classify_atom, Atom, AtomSpace, Color, RealmId, ATOM_BITS, COLLAPSED_REALMS};

/// Keeps the empty atom's center finite
pub const CENTER_EPSILON: f64 = 0.001;

/// Cube face bound to each atom position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Up,
    Right,
    Left,
    Down,
    Back,
}

impl Face {
    /// All faces in position order
    pub fn all() -> &'static [Face; ATOM_BITS] {
        &[
            Face::Front,
            Face::Up,
            Face::Right,
            Face::Left,
            Face::Down,
            Face::Back,
        ]
    }

    /// Unit direction of the face
    pub fn direction(self) -> DVec3 {
        match self {
            Face::Front => DVec3::Z,
            Face::Up => DVec3::Y,
            Face::Right => DVec3::X,
            Face::Left => DVec3::NEG_X,
            Face::Down => DVec3::NEG_Y,
            Face::Back => DVec3::NEG_Z,
        }
    }

    /// The face on the other side of the cube
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Up => Face::Down,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Down => Face::Up,
            Face::Back => Face::Front,
        }
    }

    #[inline]
    pub fn position(self) -> usize {
        self as usize
    }
}

/// Wireframe edge per position, as pairs of marker corner indices (0..4)
pub const WIREFRAME_TEMPLATE: [[usize; 2]; ATOM_BITS] = [
    [0, 1],
    [0, 3],
    [1, 3],
    [0, 2],
    [1, 2],
    [2, 3],
];

/// Slider-driven blend between the folded and exploded layouts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Unfold {
    slider: f64,
}

impl Unfold {
    pub fn new(slider: f64) -> Self {
        let mut unfold = Unfold::default();
        unfold.set_slider(slider);
        unfold
    }

    #[inline]
    pub fn slider(&self) -> f64 {
        self.slider
    }

    /// Set the slider, clamped to [0, 1]. NaN is ignored.
    pub fn set_slider(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.slider = value.clamp(0.0, 1.0);
    }

    /// Move the slider by `delta`, clamped to [0, 1]
    pub fn nudge(&mut self, delta: f64) {
        self.set_slider(self.slider + delta);
    }

    /// 1.0 when folded, 0.0 when fully unfolded
    pub fn fold_scale(&self) -> f64 {
        ((std::f64::consts::PI * self.slider).cos() + 1.0) / 2.0
    }

    #[inline]
    pub fn is_folded(&self) -> bool {
        self.slider == 0.0
    }
}

/// Geometric and classified form of one atom
#[derive(Debug, Clone)]
pub struct Tetrad {
    pub atom: Atom,
    pub realm: RealmId,
    /// Sum of active face directions
    pub location: DVec3,
    pub center: DVec3,
    /// Wireframe edges of active positions
    pub edges: Vec<[usize; 2]>,
    pub color: Color,
}

impl Tetrad {
    pub fn new(atom: Atom) -> Self {
        let location: DVec3 = atom
            .positions()
            .map(|pos| Face::all()[pos].direction())
            .sum();
        let edges = atom.positions().map(|pos| WIREFRAME_TEMPLATE[pos]).collect();
        let realm = classify_atom(atom);

        Self {
            atom,
            realm,
            location,
            center: location / (atom.count() as f64 + CENTER_EPSILON),
            edges,
            color: realm.color(),
        }
    }

    /// All 64 tetrads in value order
    pub fn all() -> Vec<Tetrad> {
        AtomSpace::all().map(Tetrad::new).collect()
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.atom.value()
    }

    #[inline]
    pub fn atom_count(&self) -> u8 {
        self.atom.count()
    }

    /// Center under the unfold layout.
    ///
    /// Realms 3 and 7 fold onto the origin, so once the slider moves they
    /// spread along their faces weighted by `spin` instead of by cardinality.
    pub fn unfolded_center(&self, unfold: &Unfold, spin: &[f64; ATOM_BITS]) -> DVec3 {
        let count = self.atom_count() as f64;
        if self.atom_count() == 0 {
            return DVec3::ZERO;
        }

        let spread = COLLAPSED_REALMS.contains(&self.realm.get());
        if !spread || unfold.is_folded() {
            return self.location / (count.powf(unfold.fold_scale()) + CENTER_EPSILON);
        }

        let sign = if self.realm.get() == 3 { 1.0 } else { -1.0 };
        let weighted: DVec3 = self
            .atom
            .positions()
            .map(|pos| Face::all()[pos].direction() * spin[pos] * sign)
            .sum();

        weighted / (count + CENTER_EPSILON) * (1.0 - unfold.fold_scale())
    }
}
