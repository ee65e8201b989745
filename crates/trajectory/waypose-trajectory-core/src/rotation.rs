//! Rotation-matrix <-> unit-quaternion conversion.
//!
//! The matrix-to-quaternion direction branches on the trace for numerical
//! stability: a positive trace uses the trace closed form, otherwise the
//! largest diagonal entry selects one of three equivalent extractions that
//! keep the square root well away from zero.

use crate::value::{Quaternion, RotationMatrix};

/// Which diagonal entry dominates when the trace is non-positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DominantDiagonal {
    X,
    Y,
    Z,
}

/// First-largest diagonal entry, matching argmax tie-breaking.
fn dominant_diagonal(r: &RotationMatrix) -> DominantDiagonal {
    let (xx, yy, zz) = (r.at(0, 0), r.at(1, 1), r.at(2, 2));
    if xx >= yy && xx >= zz {
        DominantDiagonal::X
    } else if yy >= zz {
        DominantDiagonal::Y
    } else {
        DominantDiagonal::Z
    }
}

/// Convert an orthonormal rotation matrix to a unit quaternion.
///
/// The result is renormalized before return, so it has unit norm even when
/// the input matrix carries small orthonormality error.
pub fn rotation_to_quaternion(r: &RotationMatrix) -> Quaternion {
    let trace = r.trace();
    let q = if trace > 0.0 {
        let s = 0.5 / (trace + 1.0).sqrt();
        Quaternion::new(
            (r.at(2, 1) - r.at(1, 2)) * s,
            (r.at(0, 2) - r.at(2, 0)) * s,
            (r.at(1, 0) - r.at(0, 1)) * s,
            0.25 / s,
        )
    } else {
        match dominant_diagonal(r) {
            DominantDiagonal::X => {
                let s = 2.0 * (1.0 + r.at(0, 0) - r.at(1, 1) - r.at(2, 2)).sqrt();
                Quaternion::new(
                    0.25 * s,
                    (r.at(0, 1) + r.at(1, 0)) / s,
                    (r.at(0, 2) + r.at(2, 0)) / s,
                    (r.at(2, 1) - r.at(1, 2)) / s,
                )
            }
            DominantDiagonal::Y => {
                let s = 2.0 * (1.0 + r.at(1, 1) - r.at(0, 0) - r.at(2, 2)).sqrt();
                Quaternion::new(
                    (r.at(0, 1) + r.at(1, 0)) / s,
                    0.25 * s,
                    (r.at(1, 2) + r.at(2, 1)) / s,
                    (r.at(0, 2) - r.at(2, 0)) / s,
                )
            }
            DominantDiagonal::Z => {
                let s = 2.0 * (1.0 + r.at(2, 2) - r.at(0, 0) - r.at(1, 1)).sqrt();
                Quaternion::new(
                    (r.at(0, 2) + r.at(2, 0)) / s,
                    (r.at(1, 2) + r.at(2, 1)) / s,
                    0.25 * s,
                    (r.at(1, 0) - r.at(0, 1)) / s,
                )
            }
        }
    };
    q.normalize()
}

/// Closed-form inverse of [`rotation_to_quaternion`]; assumes unit input.
pub fn quaternion_to_rotation(q: Quaternion) -> RotationMatrix {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    RotationMatrix::new([
        [
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y - 2.0 * z * w,
            2.0 * x * z + 2.0 * y * w,
        ],
        [
            2.0 * x * y + 2.0 * z * w,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z - 2.0 * x * w,
        ],
        [
            2.0 * x * z - 2.0 * y * w,
            2.0 * y * z + 2.0 * x * w,
            1.0 - 2.0 * x * x - 2.0 * y * y,
        ],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3 as NVector3};

    fn approx(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    fn assert_matrices_close(a: &RotationMatrix, b: &RotationMatrix, eps: f64) {
        for row in 0..3 {
            for col in 0..3 {
                approx(a.at(row, col), b.at(row, col), eps);
            }
        }
    }

    fn axis_angle(x: f64, y: f64, z: f64, angle: f64) -> RotationMatrix {
        let axis = nalgebra::Unit::new_normalize(NVector3::new(x, y, z));
        let m: Matrix3<f64> = Rotation3::from_axis_angle(&axis, angle).into_inner();
        m.into()
    }

    /// it should take the trace branch for the identity and small rotations
    #[test]
    fn trace_branch_identity_and_small_angles() {
        let q = rotation_to_quaternion(&RotationMatrix::identity());
        approx(q.x, 0.0, 1e-12);
        approx(q.y, 0.0, 1e-12);
        approx(q.z, 0.0, 1e-12);
        approx(q.w, 1.0, 1e-12);

        let r = axis_angle(1.0, 2.0, 3.0, 0.3);
        assert!(r.trace() > 0.0);
        let q = rotation_to_quaternion(&r);
        approx(q.length(), 1.0, 1e-9);
    }

    /// it should hit the X diagonal branch for a half-turn about x
    #[test]
    fn diagonal_branch_x() {
        let r = RotationMatrix::new([[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert!(r.trace() <= 0.0);
        let q = rotation_to_quaternion(&r);
        approx(q.x.abs(), 1.0, 1e-12);
        approx(q.y, 0.0, 1e-12);
        approx(q.z, 0.0, 1e-12);
        approx(q.w, 0.0, 1e-12);
    }

    /// it should hit the Y diagonal branch for a half-turn about y
    #[test]
    fn diagonal_branch_y() {
        let r = RotationMatrix::new([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
        let q = rotation_to_quaternion(&r);
        approx(q.y.abs(), 1.0, 1e-12);
        approx(q.x, 0.0, 1e-12);
        approx(q.z, 0.0, 1e-12);
        approx(q.w, 0.0, 1e-12);
    }

    /// it should hit the Z diagonal branch for a half-turn about z
    #[test]
    fn diagonal_branch_z() {
        let r = RotationMatrix::new([[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]);
        let q = rotation_to_quaternion(&r);
        approx(q.z.abs(), 1.0, 1e-12);
        approx(q.x, 0.0, 1e-12);
        approx(q.y, 0.0, 1e-12);
        approx(q.w, 0.0, 1e-12);
    }

    /// it should round-trip orthonormal matrices within 1e-6 elementwise
    #[test]
    fn round_trip_matches_input() {
        let cases = [
            RotationMatrix::identity(),
            axis_angle(0.0, 0.0, 1.0, 1.0),
            axis_angle(1.0, 0.0, 0.0, 2.5),
            axis_angle(1.0, -1.0, 0.5, 3.0),
            axis_angle(-2.0, 0.3, 0.9, 2.9),
        ];
        for r in cases {
            let q = rotation_to_quaternion(&r);
            approx(q.length(), 1.0, 1e-9);
            let back = quaternion_to_rotation(q);
            assert_matrices_close(&r, &back, 1e-6);
        }
    }

    /// it should agree with nalgebra's extraction up to quaternion sign
    #[test]
    fn matches_nalgebra_up_to_sign() {
        let r = axis_angle(0.2, -0.7, 1.3, 2.2);
        let ours = rotation_to_quaternion(&r);
        let theirs = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
            Matrix3::from(r),
        ));
        let sign = if ours.dot(&theirs.into()) < 0.0 {
            -1.0
        } else {
            1.0
        };
        approx(ours.x, sign * theirs.i, 1e-9);
        approx(ours.y, sign * theirs.j, 1e-9);
        approx(ours.z, sign * theirs.k, 1e-9);
        approx(ours.w, sign * theirs.w, 1e-9);
    }
}
