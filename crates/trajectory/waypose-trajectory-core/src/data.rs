//! Waypoint path data model.

use serde::{Deserialize, Serialize};

use crate::error::TrajectoryError;
use crate::value::{RotationMatrix, Vector3};

/// One caller-supplied pose constraint along a path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Vector3,
    /// Orientation as a rotation matrix; assumed orthonormal with det +1.
    pub orientation: RotationMatrix,
}

impl Waypoint {
    pub fn new(position: Vector3, orientation: RotationMatrix) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Waypoint with the identity orientation.
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            orientation: RotationMatrix::identity(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}

/// A named, ordered waypoint sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaypointPath {
    pub name: String,
    pub waypoints: Vec<Waypoint>,
}

impl WaypointPath {
    pub fn new(name: impl Into<String>, waypoints: Vec<Waypoint>) -> Self {
        Self {
            name: name.into(),
            waypoints,
        }
    }

    /// Validate basic invariants (at least two waypoints, finite coordinates).
    pub fn validate_basic(&self) -> Result<(), TrajectoryError> {
        if self.waypoints.len() < 2 {
            return Err(TrajectoryError::TooFewWaypoints {
                count: self.waypoints.len(),
            });
        }
        for (index, waypoint) in self.waypoints.iter().enumerate() {
            if !waypoint.is_finite() {
                return Err(TrajectoryError::NonFiniteWaypoint { index });
            }
        }
        Ok(())
    }

    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_short_paths() {
        let path = WaypointPath::new("single", vec![Waypoint::from_position(Vector3::zero())]);
        assert!(matches!(
            path.validate_basic(),
            Err(TrajectoryError::TooFewWaypoints { count: 1 })
        ));
    }

    #[test]
    fn validate_flags_non_finite_coordinates() {
        let path = WaypointPath::new(
            "bad",
            vec![
                Waypoint::from_position(Vector3::zero()),
                Waypoint::from_position(Vector3::new(f64::NAN, 0.0, 0.0)),
            ],
        );
        assert!(matches!(
            path.validate_basic(),
            Err(TrajectoryError::NonFiniteWaypoint { index: 1 })
        ));
    }

    #[test]
    fn waypoint_serde_round_trip() {
        let waypoint = Waypoint::new(
            Vector3::new(1.0, -2.0, 3.0),
            RotationMatrix::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
        );
        let json = serde_json::to_string(&waypoint).unwrap();
        let back: Waypoint = serde_json::from_str(&json).unwrap();
        assert_eq!(waypoint, back);
    }
}
