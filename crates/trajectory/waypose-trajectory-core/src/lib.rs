//! Waypose Trajectory Core (engine-agnostic)
//!
//! Turns an ordered sequence of SE(3) waypoints into a densely sampled
//! trajectory: Catmull-Rom positions, shortest-arc slerped orientations, a
//! logistic easing profile for time parametrization, and linear/angular
//! velocities per sample. Stored-path JSON parsing and a JSON export of
//! built trajectories round out the surface consumed by adapters.

pub mod builder;
pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod pose;
pub mod profile;
pub mod rotation;
pub mod stored_path;
pub mod value;

// Re-exports for consumers (adapters)
pub use builder::{
    build_trajectory, export_trajectory_json, TrajectoryBuilder, DEFAULT_DERIVATIVE_EPSILON,
};
pub use config::{AngularRateMode, BuildConfig, RateScheme};
pub use data::{Waypoint, WaypointPath};
pub use error::TrajectoryError;
pub use interp::{catmull_rom_derivative, catmull_rom_point, slerp, NEARLY_PARALLEL_DOT};
pub use pose::{Pose, Trajectory};
pub use profile::{EasingProfile, DEFAULT_HALF_WIDTH};
pub use rotation::{quaternion_to_rotation, rotation_to_quaternion};
pub use stored_path::parse_stored_path_json;
pub use value::{Quaternion, RotationMatrix, Vector3};
