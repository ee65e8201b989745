//! Build-time configuration for trajectory sampling.

use serde::{Deserialize, Serialize};

use crate::profile::EasingProfile;

/// How the angular-velocity vector is derived at each sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngularRateMode {
    /// Differentiate the slerped orientation and apply w = 2 * dq/dt * conj(q).
    #[default]
    QuaternionDerivative,
    /// Cross the unit heading with its rate of change; cheaper,
    /// position-derived, blind to roll about the heading axis.
    Heading,
}

/// Where d(alpha)/dt comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateScheme {
    /// Closed-form derivative of the easing profile.
    #[default]
    Analytic,
    /// Centered differences over the sampled alpha grid, one-sided at the
    /// segment ends, with dt = 1/n.
    FiniteDifference,
}

/// Configuration for trajectory builds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Easing profile shaping per-segment progress.
    pub profile: EasingProfile,
    /// Angular-velocity derivation mode.
    pub angular_rate: AngularRateMode,
    /// d(alpha)/dt derivation scheme.
    pub rate_scheme: RateScheme,
    /// Optional override for the perturbation used when differentiating the
    /// slerped orientation.
    pub derivative_epsilon: Option<f64>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            profile: EasingProfile::default(),
            angular_rate: AngularRateMode::default(),
            rate_scheme: RateScheme::default(),
            derivative_epsilon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serde_round_trip() {
        let cfg = BuildConfig {
            profile: EasingProfile::new(3.5),
            angular_rate: AngularRateMode::Heading,
            rate_scheme: RateScheme::FiniteDifference,
            derivative_epsilon: Some(1e-4),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: BuildConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn defaults_select_quaternion_mode_and_analytic_rates() {
        let cfg = BuildConfig::default();
        assert_eq!(cfg.angular_rate, AngularRateMode::QuaternionDerivative);
        assert_eq!(cfg.rate_scheme, RateScheme::Analytic);
        assert_eq!(cfg.profile.half_width, crate::profile::DEFAULT_HALF_WIDTH);
        assert!(cfg.derivative_epsilon.is_none());
    }
}
