use nalgebra::Point3;

/// A nucleotide reduced to a single representative atom.
///
/// Residues are produced by the structure loader in file order, which is taken to be
/// sequence order. The residue name is kept exactly as it appears in the input file
/// (typically a one-letter base code such as `A`, `U`, `C` or `G`).
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub name: String,
    pub position: Point3<f64>,
}

impl Residue {
    pub fn new(name: impl Into<String>, position: Point3<f64>) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    #[inline]
    pub fn distance_to(&self, other: &Residue) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}
