//! Fixed-size value types for the trajectory data model.

pub mod quaternion;
pub mod rotation_matrix;
pub mod vector3;

pub use quaternion::Quaternion;
pub use rotation_matrix::RotationMatrix;
pub use vector3::Vector3;
