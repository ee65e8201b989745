//! Spherical linear interpolation with shortest-arc correction.

use crate::value::Quaternion;

/// Above this dot product the arc is short enough that `acos` loses
/// precision; interpolation falls back to a normalized linear blend.
pub const NEARLY_PARALLEL_DOT: f64 = 0.99;

/// Interpolate between two unit quaternions along the shorter arc.
///
/// If dot(q0, q1) is negative, q1 is negated so the blend takes the short
/// way around the 4D unit sphere. Near-parallel inputs use a linear blend
/// followed by renormalization; everything else uses the great-circle
/// weights sin((1 - t) * omega) / sin(omega) and sin(t * omega) / sin(omega).
///
/// For t in [0, 1] the result has unit norm. Values of t outside that range
/// extrapolate with the same weights, which callers use to estimate the
/// orientation derivative near segment ends.
pub fn slerp(q0: Quaternion, mut q1: Quaternion, t: f64) -> Quaternion {
    let mut dot = q0.dot(&q1);
    if dot < 0.0 {
        q1 = -q1;
        dot = -dot;
    }
    if dot > NEARLY_PARALLEL_DOT {
        return (q0 * (1.0 - t) + q1 * t).normalize();
    }
    let omega = dot.acos();
    let sin_omega = omega.sin();
    let w0 = ((1.0 - t) * omega).sin() / sin_omega;
    let w1 = (t * omega).sin() / sin_omega;
    q0 * w0 + q1 * w1
}
