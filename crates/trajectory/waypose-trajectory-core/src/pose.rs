//! Immutable pose samples and the trajectory container.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::rotation::quaternion_to_rotation;
use crate::value::{Quaternion, RotationMatrix, Vector3};

/// One trajectory sample: where the body is, how it is oriented, and how
/// fast both are changing. Constructed complete, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3,
    /// Orientation as a unit quaternion (x, y, z, w).
    pub orientation: Quaternion,
    pub linear_velocity: Vector3,
    pub angular_velocity: Vector3,
    /// Euclidean norm of `linear_velocity`. Never normalized or clamped
    /// here; renderers do their own min/max mapping.
    pub speed: f64,
}

impl Pose {
    /// Orientation as a rotation matrix, for consumers drawing axis triads.
    pub fn rotation_matrix(&self) -> RotationMatrix {
        quaternion_to_rotation(self.orientation)
    }
}

/// Ordered pose samples in waypoint-then-sample-index order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub poses: Vec<Pose>,
}

impl Trajectory {
    pub fn new(poses: Vec<Pose>) -> Self {
        Self { poses }
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn get(&self, frame: usize) -> Option<&Pose> {
        self.poses.get(frame)
    }

    pub fn first(&self) -> Option<&Pose> {
        self.poses.first()
    }

    pub fn last(&self) -> Option<&Pose> {
        self.poses.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
        self.poses.iter()
    }
}

impl Index<usize> for Trajectory {
    type Output = Pose;

    fn index(&self, frame: usize) -> &Self::Output {
        &self.poses[frame]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Pose;
    type IntoIter = std::slice::Iter<'a, Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = Pose;
    type IntoIter = std::vec::IntoIter<Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_matrix_accessor_matches_identity() {
        let pose = Pose {
            position: Vector3::zero(),
            orientation: Quaternion::identity(),
            linear_velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            speed: 0.0,
        };
        assert_eq!(pose.rotation_matrix(), RotationMatrix::identity());
    }

    #[test]
    fn trajectory_indexing_and_iteration() {
        let mk = |x: f64| Pose {
            position: Vector3::new(x, 0.0, 0.0),
            orientation: Quaternion::identity(),
            linear_velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            speed: 0.0,
        };
        let trajectory = Trajectory::new(vec![mk(0.0), mk(1.0), mk(2.0)]);
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory[1].position.x, 1.0);
        assert_eq!(trajectory.first().unwrap().position.x, 0.0);
        assert_eq!(trajectory.last().unwrap().position.x, 2.0);
        let xs: Vec<f64> = trajectory.iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }
}
