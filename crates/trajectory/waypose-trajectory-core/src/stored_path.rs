use serde::Deserialize;

use crate::data::{Waypoint, WaypointPath};
use crate::error::TrajectoryError;
use crate::rotation::quaternion_to_rotation;
use crate::value::{Quaternion, RotationMatrix, Vector3};

/// Public API: parse StoredPath-style JSON (see fixtures/paths/*.json) into
/// the crate's canonical WaypointPath (data.rs).
///
/// Notes:
/// - Positions accept either `{ "x": .., "y": .., "z": .. }` objects or
///   `[x, y, z]` triples.
/// - Orientations accept a row-major 3x3 matrix or a quaternion object
///   `{ "x": .., "y": .., "z": .., "w": .. }`; quaternions are normalized
///   and converted to a rotation matrix.
/// - A missing orientation defaults to identity.
pub fn parse_stored_path_json(s: &str) -> Result<WaypointPath, TrajectoryError> {
    let sp: StoredPath = serde_json::from_str(s)?;

    let mut waypoints: Vec<Waypoint> = Vec::with_capacity(sp.waypoints.len());
    for sw in sp.waypoints {
        let position = to_position(&sw.position);
        let orientation = match sw.orientation {
            Some(raw) => to_orientation(&raw),
            None => RotationMatrix::identity(),
        };
        waypoints.push(Waypoint::new(position, orientation));
    }

    let path = WaypointPath::new(sp.name, waypoints);
    // Basic validation (at least two waypoints, finite coordinates).
    path.validate_basic()?;
    Ok(path)
}

fn to_position(p: &RawPosition) -> Vector3 {
    match p {
        RawPosition::Components { x, y, z } => Vector3::new(*x, *y, *z),
        RawPosition::Triple([x, y, z]) => Vector3::new(*x, *y, *z),
    }
}

fn to_orientation(o: &RawOrientation) -> RotationMatrix {
    match o {
        RawOrientation::Matrix(rows) => RotationMatrix::new(*rows),
        RawOrientation::Quaternion { x, y, z, w } => {
            quaternion_to_rotation(Quaternion::new(*x, *y, *z, *w).normalize())
        }
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredPath {
    pub name: String,
    pub waypoints: Vec<SpWaypoint>,
}

#[derive(Debug, Deserialize)]
struct SpWaypoint {
    pub position: RawPosition,
    #[serde(default)]
    pub orientation: Option<RawOrientation>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPosition {
    Components { x: f64, y: f64, z: f64 },
    Triple([f64; 3]),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOrientation {
    // Put more specific shapes BEFORE less specific to avoid untagged matching pitfalls.
    Matrix([[f64; 3]; 3]),
    Quaternion { x: f64, y: f64, z: f64, w: f64 },
}
