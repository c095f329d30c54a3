//! Speed profiles for variable-speed path traversal
//!
//! A profile maps normalized elapsed time to an instantaneous speed and is
//! normalized so that integrating it over the traversal duration yields the
//! path length exactly. The default dampened-quintic profile accelerates
//! smoothly from rest, cruises, and decelerates smoothly to rest.

use serde::{Deserialize, Serialize};

/// Stateless selector among named speed-shaping profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedProfile {
    /// Constant speed over the whole traversal.
    Linear,
    /// Derivative of the quintic smootherstep: 30 x^2 (1-x)^2.
    /// Zero speed at both ends, peak of 1.875x the mean in the middle.
    #[default]
    DampenedQuintic,
}

impl SpeedProfile {
    /// Normalized profile shape at normalized time x in [0, 1].
    ///
    /// The integral of the shape over [0, 1] is exactly 1 for every variant.
    pub fn shape(self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        match self {
            SpeedProfile::Linear => 1.0,
            SpeedProfile::DampenedQuintic => {
                let d = 1.0 - x;
                30.0 * x * x * d * d
            }
        }
    }

    /// Instantaneous speed (length units per second) at elapsed time `time`,
    /// for a traversal of the given duration and path length.
    pub fn scaled_value(self, time: f64, duration: f64, length: f64) -> f64 {
        if duration <= 0.0 {
            return 0.0;
        }
        (length / duration) * self.shape(time / duration)
    }
}
