use nalgebra::{Point3, Vector3};

/// Simulation box geometry.
///
/// Passed through the kernel calling contract for interface uniformity with
/// other interaction families; the Coulomb kernels themselves never read it.
/// The engine layer uses it to build minimum-image displacement vectors
/// before invoking a kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// No periodicity; displacements are used as-is.
    Open,
    /// Rectangular periodic box with the given side lengths.
    Cuboid { side_lengths: Vector3<f64> },
}

impl Boundary {
    /// Wraps a raw displacement to its minimum-image convention equivalent.
    pub fn min_image(&self, dr: Vector3<f64>) -> Vector3<f64> {
        match self {
            Boundary::Open => dr,
            Boundary::Cuboid { side_lengths } => Vector3::new(
                dr.x - side_lengths.x * (dr.x / side_lengths.x).round(),
                dr.y - side_lengths.y * (dr.y / side_lengths.y).round(),
                dr.z - side_lengths.z * (dr.z / side_lengths.z).round(),
            ),
        }
    }

    /// Minimum-image displacement from `coord_i` to `coord_j`.
    pub fn displacement(&self, coord_i: &Point3<f64>, coord_j: &Point3<f64>) -> Vector3<f64> {
        self.min_image(coord_j - coord_i)
    }
}
