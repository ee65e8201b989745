use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::value::Vector3;

/// Row-major 3x3 rotation matrix.
///
/// Assumed orthonormal with determinant +1 on input; never validated. The
/// fixed shape makes malformed sizes unrepresentable, and serde rejects
/// wrongly shaped stored data at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationMatrix(pub [[f64; 3]; 3]);

impl RotationMatrix {
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    pub fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Entry at (row, col).
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    pub fn row(&self, row: usize) -> [f64; 3] {
        self.0[row]
    }

    /// Column as a vector; columns are the rotated frame's axes, which is
    /// what axis-triad renderers draw.
    pub fn column(&self, col: usize) -> Vector3 {
        Vector3::new(self.0[0][col], self.0[1][col], self.0[2][col])
    }

    pub fn trace(&self) -> f64 {
        self.0[0][0] + self.0[1][1] + self.0[2][2]
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|v| v.is_finite())
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix3<f64>> for RotationMatrix {
    fn from(m: Matrix3<f64>) -> Self {
        Self([
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ])
    }
}

impl From<RotationMatrix> for Matrix3<f64> {
    fn from(m: RotationMatrix) -> Self {
        Matrix3::new(
            m.0[0][0], m.0[0][1], m.0[0][2], m.0[1][0], m.0[1][1], m.0[1][2], m.0[2][0], m.0[2][1],
            m.0[2][2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nalgebra_round_trip_preserves_entries() {
        let r = RotationMatrix::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let m: Matrix3<f64> = r.into();
        let back: RotationMatrix = m.into();
        assert_eq!(r, back);
    }

    #[test]
    fn columns_are_frame_axes() {
        let r = RotationMatrix::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(r.column(0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(r.column(1), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(r.column(2), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn trace_of_identity_is_three() {
        assert_eq!(RotationMatrix::identity().trace(), 3.0);
    }
}
