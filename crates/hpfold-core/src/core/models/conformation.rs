use nalgebra::Point3;

/// Lattice positions of every residue of the chain, in sequence order.
///
/// The model does not check that consecutive positions are lattice neighbours or that the
/// walk is self-avoiding; those are guarantees of the simulation that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conformation {
    positions: Vec<Point3<f64>>,
}

impl Conformation {
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)` corners, or `None` for an empty chain.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }
}

impl From<Vec<Point3<f64>>> for Conformation {
    fn from(positions: Vec<Point3<f64>>) -> Self {
        Self::new(positions)
    }
}
