//! Navigation settings
//!
//! Tunables that the original design read from a process-wide module
//! singleton; here they are a plain value passed into `Path::new` so a
//! traversal is fully determined by its inputs.

use serde::{Deserialize, Serialize};

/// Externally configurable navigation tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationSettings {
    /// Divisor applied to `ln(path length)` when deriving a traversal
    /// duration. Larger values produce shorter (faster) traversals.
    pub speed_scale: f64,

    /// Simpson's-rule subdivision count per `traverse` call. Too few samples
    /// of the non-linear speed profile produce visible juddering.
    pub integration_resolution: u32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            speed_scale: 5.0,
            integration_resolution: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = NavigationSettings::default();
        assert!((s.speed_scale - 5.0).abs() < 1e-12);
        assert_eq!(s.integration_resolution, 100);
    }

    #[test]
    fn test_serde_round_trip() {
        let s = NavigationSettings {
            speed_scale: 2.5,
            integration_resolution: 64,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: NavigationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
