//! Trajectory construction: compose the easing profile, Catmull-Rom blend,
//! and slerp across a waypoint sequence into sampled poses with velocities.

use tracing::debug;

use crate::config::{AngularRateMode, BuildConfig, RateScheme};
use crate::data::Waypoint;
use crate::error::TrajectoryError;
use crate::interp::{catmull_rom_derivative, catmull_rom_point, slerp};
use crate::pose::{Pose, Trajectory};
use crate::profile::EasingProfile;
use crate::rotation::rotation_to_quaternion;
use crate::value::{Quaternion, Vector3};

/// Default perturbation for differentiating the slerped orientation.
pub const DEFAULT_DERIVATIVE_EPSILON: f64 = 1e-3;

/// Builds sampled trajectories from waypoint sequences.
///
/// Each consecutive waypoint pair forms a segment spanning unit time. The
/// easing profile supplies the per-segment progress values; positions come
/// from a Catmull-Rom blend over the four surrounding waypoints (clamped at
/// the path ends), orientations from shortest-arc slerp between the
/// segment's endpoint quaternions. Velocities are derived in a second pass
/// so every [`Pose`] is constructed complete and immutable.
#[derive(Clone, Debug, Default)]
pub struct TrajectoryBuilder {
    cfg: BuildConfig,
}

impl TrajectoryBuilder {
    pub fn new(cfg: BuildConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.cfg
    }

    /// Sample the whole path with `samples_per_segment` poses per segment.
    ///
    /// All validation happens before any sample is produced; on error
    /// nothing is returned. Segment samples concatenate in waypoint order,
    /// and the shared endpoint of two neighboring segments is emitted by
    /// both, so the output holds `(waypoints - 1) * samples_per_segment`
    /// poses.
    pub fn build(
        &self,
        waypoints: &[Waypoint],
        samples_per_segment: usize,
    ) -> Result<Trajectory, TrajectoryError> {
        if waypoints.len() < 2 {
            return Err(TrajectoryError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        // Also validates the easing domain.
        let alphas = self.cfg.profile.samples(samples_per_segment)?;
        let epsilon = resolve_epsilon(&self.cfg);

        let n = samples_per_segment;
        let dt = 1.0 / n as f64; // each segment spans unit time
        let rates = match self.cfg.rate_scheme {
            RateScheme::Analytic => analytic_rates(&self.cfg.profile, n),
            RateScheme::FiniteDifference => finite_difference_rates(&alphas, dt),
        };

        let segment_count = waypoints.len() - 1;
        debug!(
            "building trajectory: {} waypoints, {} samples/segment, {} poses",
            waypoints.len(),
            n,
            segment_count * n
        );

        let waypoint_quats: Vec<Quaternion> = waypoints
            .iter()
            .map(|w| rotation_to_quaternion(&w.orientation))
            .collect();

        let mut poses = Vec::with_capacity(segment_count * n);
        for segment in 0..segment_count {
            let (p0, p1, p2, p3) = segment_controls(waypoints, segment);
            let q1 = waypoint_quats[segment];
            let q2 = waypoint_quats[segment + 1];

            // First pass: kinematic samples along the eased progress grid.
            let positions: Vec<Vector3> = alphas
                .iter()
                .map(|&alpha| catmull_rom_point(p0, p1, p2, p3, alpha))
                .collect();
            let orientations: Vec<Quaternion> = alphas
                .iter()
                .map(|&alpha| slerp(q1, q2, alpha))
                .collect();
            let velocities: Vec<Vector3> = alphas
                .iter()
                .zip(&rates)
                .map(|(&alpha, &rate)| catmull_rom_derivative(p0, p1, p2, p3, alpha) * rate)
                .collect();

            // Second pass: angular rates, then complete immutable poses.
            let angular_rates: Vec<Vector3> = match self.cfg.angular_rate {
                AngularRateMode::QuaternionDerivative => alphas
                    .iter()
                    .zip(&rates)
                    .zip(&orientations)
                    .map(|((&alpha, &rate), &q)| quaternion_rate(q1, q2, q, alpha, rate, epsilon))
                    .collect(),
                AngularRateMode::Heading => heading_rates(&velocities, dt),
            };

            for i in 0..n {
                poses.push(Pose {
                    position: positions[i],
                    orientation: orientations[i],
                    linear_velocity: velocities[i],
                    angular_velocity: angular_rates[i],
                    speed: velocities[i].length(),
                });
            }
        }
        Ok(Trajectory::new(poses))
    }

    /// Sample one pose at normalized progress `u` in [0, 1] over the whole
    /// path.
    ///
    /// The fractional position maps to a segment and a local progress value,
    /// which then flows through the same easing/spline/slerp pipeline as
    /// [`TrajectoryBuilder::build`].
    pub fn sample_at(&self, waypoints: &[Waypoint], u: f64) -> Result<Pose, TrajectoryError> {
        if waypoints.len() < 2 {
            return Err(TrajectoryError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        self.cfg.profile.validate()?;
        let epsilon = resolve_epsilon(&self.cfg);

        let (segment, local) = locate_segment(waypoints.len() - 1, u);
        let (p0, p1, p2, p3) = segment_controls(waypoints, segment);
        let q1 = rotation_to_quaternion(&waypoints[segment].orientation);
        let q2 = rotation_to_quaternion(&waypoints[segment + 1].orientation);

        let alpha = self.cfg.profile.evaluate(local);
        let rate = match self.cfg.rate_scheme {
            RateScheme::Analytic => self.cfg.profile.derivative(local),
            RateScheme::FiniteDifference => {
                (self.cfg.profile.evaluate(local + epsilon)
                    - self.cfg.profile.evaluate(local - epsilon))
                    / (2.0 * epsilon)
            }
        };

        let position = catmull_rom_point(p0, p1, p2, p3, alpha);
        let orientation = slerp(q1, q2, alpha);
        let linear_velocity = catmull_rom_derivative(p0, p1, p2, p3, alpha) * rate;
        let angular_velocity = match self.cfg.angular_rate {
            AngularRateMode::QuaternionDerivative => {
                quaternion_rate(q1, q2, orientation, alpha, rate, epsilon)
            }
            AngularRateMode::Heading => {
                // Heading drops the rate scale, so the easing evaluation is
                // enough to differentiate the direction.
                let heading = |lu: f64| {
                    catmull_rom_derivative(p0, p1, p2, p3, self.cfg.profile.evaluate(lu))
                        .normalize()
                };
                let dh = (heading(local + epsilon) - heading(local - epsilon))
                    * (1.0 / (2.0 * epsilon));
                linear_velocity.normalize().cross(&dh)
            }
        };

        Ok(Pose {
            position,
            orientation,
            linear_velocity,
            angular_velocity,
            speed: linear_velocity.length(),
        })
    }
}

/// Build with the default configuration.
pub fn build_trajectory(
    waypoints: &[Waypoint],
    samples_per_segment: usize,
) -> Result<Trajectory, TrajectoryError> {
    TrajectoryBuilder::default().build(waypoints, samples_per_segment)
}

/// Export a trajectory as `serde_json::Value` (stable schema for consumers).
pub fn export_trajectory_json(trajectory: &Trajectory) -> serde_json::Value {
    serde_json::to_value(trajectory).unwrap_or(serde_json::Value::Null)
}

fn resolve_epsilon(cfg: &BuildConfig) -> f64 {
    cfg.derivative_epsilon
        .filter(|eps| eps.is_finite() && *eps > 0.0)
        .unwrap_or(DEFAULT_DERIVATIVE_EPSILON)
}

/// Control points for `segment`, clamped to the segment endpoints at the
/// path ends (no implicit loop closure).
fn segment_controls(waypoints: &[Waypoint], segment: usize) -> (Vector3, Vector3, Vector3, Vector3) {
    let p1 = waypoints[segment].position;
    let p2 = waypoints[segment + 1].position;
    let p0 = if segment == 0 {
        p1
    } else {
        waypoints[segment - 1].position
    };
    let p3 = if segment + 2 >= waypoints.len() {
        p2
    } else {
        waypoints[segment + 2].position
    };
    (p0, p1, p2, p3)
}

/// Map whole-path progress in [0, 1] to (segment index, local progress).
fn locate_segment(segment_count: usize, u: f64) -> (usize, f64) {
    let scaled = u.clamp(0.0, 1.0) * segment_count as f64;
    let segment = (scaled.floor() as usize).min(segment_count - 1);
    (segment, scaled - segment as f64)
}

fn analytic_rates(profile: &EasingProfile, n: usize) -> Vec<f64> {
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| profile.derivative(i as f64 / denom))
        .collect()
}

/// Centered differences over the alpha grid; one-sided at the ends.
fn finite_difference_rates(alphas: &[f64], dt: f64) -> Vec<f64> {
    let n = alphas.len();
    (0..n)
        .map(|i| {
            if i == 0 {
                (alphas[1] - alphas[0]) / dt
            } else if i == n - 1 {
                (alphas[n - 1] - alphas[n - 2]) / dt
            } else {
                (alphas[i + 1] - alphas[i - 1]) / (2.0 * dt)
            }
        })
        .collect()
}

/// Angular velocity from the quaternion derivative: w = 2 * dq/dt * conj(q),
/// with dq/dalpha estimated from slerp evaluated at alpha +- epsilon.
fn quaternion_rate(
    q1: Quaternion,
    q2: Quaternion,
    q: Quaternion,
    alpha: f64,
    rate: f64,
    epsilon: f64,
) -> Vector3 {
    let forward = slerp(q1, q2, alpha + epsilon);
    let backward = slerp(q1, q2, alpha - epsilon);
    let dq = (forward - backward) * (1.0 / (2.0 * epsilon));
    let spin = dq * q.conjugate();
    spin.vector() * (2.0 * rate)
}

/// Heading-based angular velocity: cross the unit heading with its rate of
/// change, using the same difference stencil as the alpha grid.
fn heading_rates(velocities: &[Vector3], dt: f64) -> Vec<Vector3> {
    let n = velocities.len();
    let headings: Vec<Vector3> = velocities.iter().map(|v| v.normalize()).collect();
    (0..n)
        .map(|i| {
            let dh = if i == 0 {
                (headings[1] - headings[0]) * (1.0 / dt)
            } else if i == n - 1 {
                (headings[n - 1] - headings[n - 2]) * (1.0 / dt)
            } else {
                (headings[i + 1] - headings[i - 1]) * (1.0 / (2.0 * dt))
            };
            headings[i].cross(&dh)
        })
        .collect()
}
