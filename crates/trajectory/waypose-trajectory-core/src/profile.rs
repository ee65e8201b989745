//! Logistic easing profile reparametrizing uniform progress.

use serde::{Deserialize, Serialize};

use crate::error::TrajectoryError;

/// Default half-width of the logistic domain (evaluated over [-6, 6]).
pub const DEFAULT_HALF_WIDTH: f64 = 6.0;

/// Ease-in/ease-out timing curve built from a logistic function.
///
/// The curve is evaluated over the symmetric domain `[-half_width,
/// half_width]` and min-max normalized so progress starts at exactly 0 and
/// ends at exactly 1. Larger half-widths concentrate motion in the middle of
/// a segment; smaller ones approach a constant-rate ramp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EasingProfile {
    pub half_width: f64,
}

impl Default for EasingProfile {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_HALF_WIDTH,
        }
    }
}

impl EasingProfile {
    pub fn new(half_width: f64) -> Self {
        Self { half_width }
    }

    /// Reject non-finite or non-positive domains before any evaluation.
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(TrajectoryError::InvalidProfileDomain {
                half_width: self.half_width,
            });
        }
        Ok(())
    }

    /// Eased progress at normalized position `u` (0 at segment start, 1 at
    /// the end).
    pub fn evaluate(&self, u: f64) -> f64 {
        let a = self.half_width;
        let lo = sigmoid(-a);
        let hi = sigmoid(a);
        (sigmoid(-a + 2.0 * a * u) - lo) / (hi - lo)
    }

    /// Analytic derivative of [`EasingProfile::evaluate`] with respect to `u`.
    pub fn derivative(&self, u: f64) -> f64 {
        let a = self.half_width;
        let lo = sigmoid(-a);
        let hi = sigmoid(a);
        let s = sigmoid(-a + 2.0 * a * u);
        s * (1.0 - s) * 2.0 * a / (hi - lo)
    }

    /// Eased progress grid for `n` samples across one segment.
    ///
    /// The first entry is exactly 0, the last exactly 1, and the sequence is
    /// strictly increasing in between. `n < 2` leaves the normalization
    /// undefined and is rejected before any computation.
    pub fn samples(&self, n: usize) -> Result<Vec<f64>, TrajectoryError> {
        self.validate()?;
        if n < 2 {
            return Err(TrajectoryError::TooFewSamples { requested: n });
        }
        let denom = (n - 1) as f64;
        Ok((0..n).map(|i| self.evaluate(i as f64 / denom)).collect())
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
