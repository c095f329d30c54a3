//! Stateful path traversal
//!
//! A [`Path`] composes one curve, one rotation interpolator, and one speed
//! profile, and owns the progress state for a single navigation. The render
//! loop calls [`Path::traverse`] once per frame with the frame delta and
//! receives the camera pose for that instant. A path is created per
//! navigation request and discarded once [`Path::has_reached_end`] is true
//! (or the navigation is aborted by dropping it).

use glam::DVec3;
use log::{debug, warn};

use crate::curve::{Curve, CurveKind};
use crate::error::{NavigationError, NavigationResult};
use crate::interpolation::simpsons_rule;
use crate::rotation::RotationInterpolator;
use crate::settings::NavigationSettings;
use crate::speed::SpeedProfile;
use crate::waypoint::{Pose, Waypoint};

/// Floor for the derived traversal duration, in seconds.
///
/// The logarithmic duration law goes non-positive for path lengths <= 1;
/// very short hops still get a perceptible, non-instant traversal.
pub const MIN_DURATION: f64 = 0.5;

/// A single camera traversal between two waypoints.
#[derive(Debug)]
pub struct Path {
    start: Waypoint,
    end: Waypoint,
    curve: Curve,
    rotation: RotationInterpolator,
    speed: SpeedProfile,
    settings: NavigationSettings,
    duration: f64,
    progressed_time: f64,
    traveled_distance: f64,
}

impl Path {
    /// Create a path of the given curve kind between two waypoints.
    ///
    /// The rotation interpolator is paired per curve kind: chord-like curves
    /// blend the endpoint orientations, the zoom-out overview keeps the
    /// camera aimed at the bodies it travels between. When no duration is
    /// supplied it is derived as `ln(length) / speed_scale`, floored at
    /// [`MIN_DURATION`]: path lengths span many orders of magnitude, and the
    /// logarithm keeps perceived speed proportionate to scale.
    ///
    /// Fails on degenerate geometry, a non-positive explicit duration, or an
    /// unusable speed scale; these are configuration errors and the caller
    /// must not continue with the navigation.
    pub fn new(
        start: Waypoint,
        end: Waypoint,
        kind: CurveKind,
        duration: Option<f64>,
        settings: NavigationSettings,
    ) -> NavigationResult<Self> {
        let curve = Curve::new(kind, &start, &end)?;

        let rotation = match kind {
            CurveKind::Linear | CurveKind::AvoidCollision => {
                RotationInterpolator::eased_slerp(start.rotation(), end.rotation())
            }
            CurveKind::ZoomOutOverview => RotationInterpolator::look_at(
                start.rotation(),
                end.rotation(),
                start.node().position,
                end.node().position,
            ),
        };

        let duration = match duration {
            Some(value) if value.is_finite() && value > 0.0 => value,
            Some(value) => return Err(NavigationError::InvalidDuration { value }),
            None => {
                let scale = settings.speed_scale;
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(NavigationError::InvalidSpeedScale { value: scale });
                }
                let derived = curve.length().ln() / scale;
                if derived < MIN_DURATION {
                    debug!(
                        "derived duration {derived:.3}s below floor, clamping to {MIN_DURATION}s"
                    );
                    MIN_DURATION
                } else {
                    derived
                }
            }
        };

        debug!(
            "created {} path '{}' -> '{}': length {:.3e}, duration {:.2}s",
            kind,
            start.identifier(),
            end.identifier(),
            curve.length(),
            duration
        );

        Ok(Self {
            start,
            end,
            curve,
            rotation,
            speed: SpeedProfile::default(),
            settings,
            duration,
            progressed_time: 0.0,
            traveled_distance: 0.0,
        })
    }

    /// Advance the traversal by a frame delta (seconds) and return the pose.
    ///
    /// The displacement is the definite integral of the speed profile over
    /// the elapsed interval, evaluated by Simpson's rule with the configured
    /// resolution; a single Euler step of the non-linear profile would show
    /// up as juddering acceleration. Progress is monotonically non-decreasing.
    /// Past completion the end pose is held; callers should check
    /// [`Path::has_reached_end`] and stop advancing.
    pub fn traverse(&mut self, dt: f64) -> Pose {
        let dt = if dt < 0.0 {
            warn!("negative frame delta {dt}, treating as 0");
            0.0
        } else {
            dt
        };

        let displacement = simpsons_rule(
            self.progressed_time,
            self.progressed_time + dt,
            self.settings.integration_resolution,
            |t| self.speed_at(t),
        );

        self.progressed_time += dt;
        self.traveled_distance += displacement;

        // The profile is normalized to integrate to the full length over the
        // duration; integration error must not leave the traversal a hair
        // short of completion once the duration has fully elapsed.
        if self.progressed_time >= self.duration {
            self.traveled_distance = self.traveled_distance.max(self.curve.length());
        }

        self.pose_at(self.traveled_distance)
    }

    /// The scene node the camera pose should currently be anchored to.
    ///
    /// Switches from the start node to the end node at the midpoint of the
    /// traversal, away from either endpoint so the reference frame never
    /// oscillates while the camera is close to a body.
    pub fn current_anchor(&self) -> &str {
        let past_halfway = self.traveled_fraction() >= 0.5;
        if past_halfway {
            self.end.identifier()
        } else {
            self.start.identifier()
        }
    }

    /// True once the traveled distance covers the whole curve.
    pub fn has_reached_end(&self) -> bool {
        self.traveled_fraction() >= 1.0
    }

    pub fn start_point(&self) -> &Waypoint {
        &self.start
    }

    pub fn end_point(&self) -> &Waypoint {
        &self.end
    }

    /// Traversal duration in seconds, fixed at construction.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Arc length of the underlying curve.
    pub fn path_length(&self) -> f64 {
        self.curve.length()
    }

    /// Control polyline of the underlying curve, for diagnostics and UI.
    pub fn control_points(&self) -> &[DVec3] {
        self.curve.points()
    }

    /// Seconds of traversal consumed so far.
    pub fn progressed_time(&self) -> f64 {
        self.progressed_time
    }

    /// Arc length consumed so far.
    pub fn traveled_distance(&self) -> f64 {
        self.traveled_distance
    }

    fn traveled_fraction(&self) -> f64 {
        // Curve length is > 0 by construction
        self.traveled_distance / self.curve.length()
    }

    fn speed_at(&self, time: f64) -> f64 {
        self.speed
            .scaled_value(time, self.duration, self.curve.length())
    }

    fn pose_at(&self, distance: f64) -> Pose {
        let u = (distance / self.curve.length()).clamp(0.0, 1.0);
        Pose::new(
            self.curve.position_at(u),
            self.rotation.interpolate(u, &self.curve),
        )
    }
}
