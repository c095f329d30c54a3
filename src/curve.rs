//! Parametric spatial curves between two waypoints
//!
//! A [`Curve`] maps a normalized arc-length fraction u in [0, 1] to a world
//! position. Variants form a closed set selected per navigation scenario:
//! a straight chord, a spline that detours around the endpoint bodies, and a
//! spline that pulls out to an overview height before descending again.
//!
//! Spline variants are arc-length parameterized: a cumulative-length table is
//! sampled once at construction and `position_at` inverts traveled fraction
//! back into the spline parameter, so equal steps in u cover equal distance.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, NavigationResult};
use crate::interpolation::{cubic_hermite, lerp};
use crate::waypoint::Waypoint;

/// Below this chord length a path has no usable geometry and is rejected.
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Samples per spline segment for the arc-length table.
const SAMPLES_PER_SEGMENT: usize = 128;

/// Detour clearance as a multiple of a node's bounding radius.
const AVOID_MARGIN: f64 = 3.0;

/// Overview lift distance as a fraction of the chord length.
const ZOOM_OUT_FACTOR: f64 = 0.4;

/// Curve-type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    Linear,
    AvoidCollision,
    ZoomOutOverview,
}

impl FromStr for CurveKind {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(CurveKind::Linear),
            "avoidcollision" | "avoid_collision" => Ok(CurveKind::AvoidCollision),
            "zoomoutoverview" | "zoom_out_overview" => Ok(CurveKind::ZoomOutOverview),
            _ => Err(NavigationError::unknown_curve_kind(s)),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Linear => "Linear",
            CurveKind::AvoidCollision => "AvoidCollision",
            CurveKind::ZoomOutOverview => "ZoomOutOverview",
        };
        f.write_str(name)
    }
}

/// Straight chord between two positions.
#[derive(Debug, Clone)]
pub struct LinearCurve {
    points: [DVec3; 2],
    length: f64,
}

impl LinearCurve {
    fn new(start: DVec3, end: DVec3) -> Self {
        Self {
            points: [start, end],
            length: (end - start).length(),
        }
    }

    fn position_at(&self, u: f64) -> DVec3 {
        // Endpoints returned exactly; any interpolation error here shows up
        // as a visible snap at path start or end.
        if u <= 0.0 {
            return self.points[0];
        }
        if u >= 1.0 {
            return self.points[1];
        }
        self.points[0].lerp(self.points[1], u)
    }
}

/// Catmull-Rom spline through a control polyline, arc-length parameterized.
#[derive(Debug, Clone)]
pub struct SplineCurve {
    control_points: Vec<DVec3>,
    /// Cumulative arc length at each of the uniformly spaced samples;
    /// `cumulative[0] == 0`, last entry equals the total length.
    cumulative: Vec<f64>,
    length: f64,
}

impl SplineCurve {
    fn new(control_points: Vec<DVec3>) -> Self {
        debug_assert!(control_points.len() >= 2);
        let samples = (control_points.len() - 1) * SAMPLES_PER_SEGMENT;

        let mut cumulative = Vec::with_capacity(samples + 1);
        cumulative.push(0.0);
        let mut previous = control_points[0];
        let mut total = 0.0;
        for i in 1..=samples {
            let t = i as f64 / samples as f64;
            let point = Self::eval(&control_points, t);
            total += (point - previous).length();
            cumulative.push(total);
            previous = point;
        }

        Self {
            control_points,
            cumulative,
            length: total,
        }
    }

    /// Evaluate the spline at raw parameter t in [0, 1] (not arc-length).
    /// Neighbor control points are clamped at the ends, matching the
    /// boundary handling of keyframe interpolation.
    fn eval(control_points: &[DVec3], t: f64) -> DVec3 {
        let segments = control_points.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * segments as f64;
        let mut index = scaled as usize;
        if index >= segments {
            index = segments - 1;
        }
        let local = scaled - index as f64;

        let p1 = control_points[index];
        let p2 = control_points[index + 1];
        let p0 = if index > 0 { control_points[index - 1] } else { p1 };
        let p3 = if index + 2 <= segments {
            control_points[index + 2]
        } else {
            p2
        };

        cubic_hermite(p0, p1, p2, p3, local)
    }

    fn position_at(&self, u: f64) -> DVec3 {
        if u <= 0.0 {
            return self.control_points[0];
        }
        if u >= 1.0 {
            return self.control_points[self.control_points.len() - 1];
        }

        // Invert arc length: find the sample bracketing the target distance,
        // interpolate the raw parameter within it, then evaluate the spline.
        let target = u * self.length;
        let i = self.cumulative.partition_point(|&c| c < target).max(1);
        let lo = self.cumulative[i - 1];
        let hi = self.cumulative[i];
        let frac = if hi > lo { (target - lo) / (hi - lo) } else { 0.0 };
        let samples = self.cumulative.len() - 1;
        let t_lo = (i - 1) as f64 / samples as f64;
        let t_hi = i as f64 / samples as f64;
        let t = lerp(t_lo, t_hi, frac);

        Self::eval(&self.control_points, t)
    }
}

/// A parametric spatial curve between a start and end waypoint.
#[derive(Debug, Clone)]
pub enum Curve {
    Linear(LinearCurve),
    AvoidCollision(SplineCurve),
    ZoomOutOverview(SplineCurve),
}

impl Curve {
    /// Build the curve variant selected by `kind` between two waypoints.
    ///
    /// Rejects near-coincident waypoints: a zero-length path would divide by
    /// zero on every frame, so it must not exist in the first place.
    pub fn new(kind: CurveKind, start: &Waypoint, end: &Waypoint) -> NavigationResult<Self> {
        let chord = (end.position() - start.position()).length();
        if chord < DEGENERATE_LENGTH {
            return Err(NavigationError::DegeneratePath { length: chord });
        }

        let curve = match kind {
            CurveKind::Linear => Curve::Linear(LinearCurve::new(start.position(), end.position())),
            CurveKind::AvoidCollision => {
                Curve::AvoidCollision(SplineCurve::new(avoid_collision_controls(start, end)))
            }
            CurveKind::ZoomOutOverview => {
                Curve::ZoomOutOverview(SplineCurve::new(zoom_out_controls(start, end)))
            }
        };
        Ok(curve)
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Linear(_) => CurveKind::Linear,
            Curve::AvoidCollision(_) => CurveKind::AvoidCollision,
            Curve::ZoomOutOverview(_) => CurveKind::ZoomOutOverview,
        }
    }

    /// Total arc length, cached at construction. Always > 0.
    pub fn length(&self) -> f64 {
        match self {
            Curve::Linear(c) => c.length,
            Curve::AvoidCollision(c) | Curve::ZoomOutOverview(c) => c.length,
        }
    }

    /// World position at arc-length fraction u in [0, 1].
    ///
    /// `position_at(0)` is exactly the start position and `position_at(1)`
    /// exactly the end position; u outside [0, 1] clamps to the endpoints.
    pub fn position_at(&self, u: f64) -> DVec3 {
        match self {
            Curve::Linear(c) => c.position_at(u),
            Curve::AvoidCollision(c) | Curve::ZoomOutOverview(c) => c.position_at(u),
        }
    }

    /// Control polyline, for diagnostics and visualization only.
    pub fn points(&self) -> &[DVec3] {
        match self {
            Curve::Linear(c) => &c.points,
            Curve::AvoidCollision(c) | Curve::ZoomOutOverview(c) => &c.control_points,
        }
    }
}

/// A unit vector perpendicular to `direction`.
fn perpendicular_to(direction: DVec3) -> DVec3 {
    let axis = if direction.x.abs() < 0.9 {
        DVec3::X
    } else {
        DVec3::Y
    };
    direction.cross(axis).normalize()
}

/// Control points for a curve that routes around the endpoint bodies.
///
/// If the straight chord passes within a clearance margin of an anchor
/// node's bounding sphere, a detour point is inserted, displaced radially
/// away from the node center. Endpoint neighborhoods are excluded: a camera
/// sitting on a body's surface is supposed to be near it.
fn avoid_collision_controls(start: &Waypoint, end: &Waypoint) -> Vec<DVec3> {
    let a = start.position();
    let b = end.position();
    let chord = b - a;
    let chord_length = chord.length();
    let direction = chord / chord_length;

    let mut nodes = vec![start.node()];
    if end.identifier() != start.identifier() {
        nodes.push(end.node());
    }

    let mut detours: Vec<(f64, DVec3)> = Vec::new();
    for node in nodes {
        let margin = node.radius * AVOID_MARGIN;
        if margin <= 0.0 {
            continue;
        }

        let along = (node.position - a).dot(direction).clamp(0.0, chord_length);
        // Only the chord interior obstructs; intrusions at the very ends are
        // the endpoints themselves sitting close to their anchor.
        if along < 0.01 * chord_length || along > 0.99 * chord_length {
            continue;
        }

        let closest = a + direction * along;
        let offset = closest - node.position;
        let distance = offset.length();
        if distance >= margin {
            continue;
        }

        let outward = if distance > DEGENERATE_LENGTH {
            offset / distance
        } else {
            // Chord passes through the node center; any perpendicular works.
            perpendicular_to(direction)
        };
        debug!(
            "inserting collision detour around '{}' at chord fraction {:.3}",
            node.identifier,
            along / chord_length
        );
        detours.push((along, node.position + outward * margin));
    }
    detours.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut controls = Vec::with_capacity(detours.len() + 2);
    controls.push(a);
    controls.extend(detours.into_iter().map(|(_, p)| p));
    controls.push(b);
    controls
}

/// Control points for a curve that zooms out of the start body, travels at
/// overview height, and descends into the end body.
fn zoom_out_controls(start: &Waypoint, end: &Waypoint) -> Vec<DVec3> {
    let a = start.position();
    let b = end.position();
    let chord_length = (b - a).length();
    let direction = (b - a) / chord_length;

    let lift = |wp: &Waypoint| -> DVec3 {
        let radial = wp.position() - wp.node().position;
        let outward = radial
            .try_normalize()
            .unwrap_or_else(|| perpendicular_to(direction));
        wp.position() + outward * (ZOOM_OUT_FACTOR * chord_length + wp.node().radius)
    };

    vec![a, lift(start), lift(end), b]
}
