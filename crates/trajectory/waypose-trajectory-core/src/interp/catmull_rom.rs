//! Uniform cubic Catmull-Rom interpolation with an exact analytic derivative.
//!
//! Both functions are generic over any type `T` supporting basic arithmetic
//! with `f64` scalars, so scalar components and whole vectors flow through
//! the same code path. They are pure and stateless; boundary clamping (P0 =
//! P1, P3 = P2 at path ends) is the caller's concern.

use std::ops::{Add, Mul, Sub};

/// Compute a point on a uniform Catmull-Rom segment at parameter `t`.
///
/// # Parameters
/// - `prev_point`, `start_point`, `end_point`, `next_point`: four consecutive
///   points along the path. The segment interpolates between `start_point`
///   (t = 0) and `end_point` (t = 1); the outer two shape the tangents.
/// - `t`: parameter in [0, 1] along the segment.
///
/// # Formula
/// P(t) = 0.5 * (2 P1 + (-P0 + P2) t + (2 P0 - 5 P1 + 4 P2 - P3) t^2
///               + (-P0 + 3 P1 - 3 P2 + P3) t^3)
pub fn catmull_rom_point<T>(
    prev_point: T,
    start_point: T,
    end_point: T,
    next_point: T,
    t: f64,
) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    let t2 = t * t;
    let t3 = t2 * t;
    let c1 = end_point - prev_point;
    let c2 = prev_point * 2.0 - start_point * 5.0 + end_point * 4.0 - next_point;
    let c3 = start_point * 3.0 - prev_point - end_point * 3.0 + next_point;
    (start_point * 2.0 + c1 * t + c2 * t2 + c3 * t3) * 0.5
}

/// Exact derivative of [`catmull_rom_point`] with respect to `t`.
///
/// # Formula
/// P'(t) = 0.5 * ((-P0 + P2) + 2 (2 P0 - 5 P1 + 4 P2 - P3) t
///                + 3 (-P0 + 3 P1 - 3 P2 + P3) t^2)
pub fn catmull_rom_derivative<T>(
    prev_point: T,
    start_point: T,
    end_point: T,
    next_point: T,
    t: f64,
) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    let t2 = t * t;
    let c1 = end_point - prev_point;
    let c2 = prev_point * 2.0 - start_point * 5.0 + end_point * 4.0 - next_point;
    let c3 = start_point * 3.0 - prev_point - end_point * 3.0 + next_point;
    (c1 + c2 * (2.0 * t) + c3 * (3.0 * t2)) * 0.5
}
