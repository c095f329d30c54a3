//! Orientation interpolation along a path
//!
//! Two models, forming a closed set paired with the curve variants:
//! an eased slerp between the endpoint orientations, and a look-at model
//! that keeps the camera aimed at a gaze target sweeping from the start
//! body to the end body ("pan outward, then back in").
//!
//! Camera convention is right-handed, Y-up, -Z forward. The look-at model
//! borrows the curve from the owning `Path` on every call, so it can never
//! outlive the geometry it reads.

use glam::{DMat3, DQuat, DVec3};

use crate::curve::Curve;
use crate::interpolation::smootherstep;

/// Traversal fraction at which the gaze target starts leaving the start node.
const GAZE_BLEND_START: f64 = 0.2;
/// Traversal fraction at which the gaze target has settled on the end node.
const GAZE_BLEND_END: f64 = 0.8;

/// Orientation model for one path traversal.
#[derive(Debug, Clone)]
pub enum RotationInterpolator {
    /// Spherical interpolation between two orientations with a quintic-eased
    /// parameter, so angular velocity eases in and out together with the
    /// linear speed profile.
    EasedSlerp { start: DQuat, end: DQuat },

    /// Keeps the camera's forward axis aimed at a target blended from the
    /// start node to the end node along the traversal. The eased slerp of
    /// the endpoint orientations supplies the up vector, keeping roll
    /// continuous.
    LookAt {
        start: DQuat,
        end: DQuat,
        start_node_position: DVec3,
        end_node_position: DVec3,
    },
}

impl RotationInterpolator {
    pub fn eased_slerp(start: DQuat, end: DQuat) -> Self {
        RotationInterpolator::EasedSlerp {
            start: start.normalize(),
            end: end.normalize(),
        }
    }

    pub fn look_at(
        start: DQuat,
        end: DQuat,
        start_node_position: DVec3,
        end_node_position: DVec3,
    ) -> Self {
        RotationInterpolator::LookAt {
            start: start.normalize(),
            end: end.normalize(),
            start_node_position,
            end_node_position,
        }
    }

    /// Orientation at arc-length fraction u in [0, 1] (clamped).
    pub fn interpolate(&self, u: f64, curve: &Curve) -> DQuat {
        let u = u.clamp(0.0, 1.0);
        match self {
            RotationInterpolator::EasedSlerp { start, end } => start.slerp(*end, smootherstep(u)),
            RotationInterpolator::LookAt {
                start,
                end,
                start_node_position,
                end_node_position,
            } => {
                let eased = start.slerp(*end, smootherstep(u));
                let position = curve.position_at(u);

                // Hold the start body, sweep to the end body, hold again.
                let blend =
                    smootherstep((u - GAZE_BLEND_START) / (GAZE_BLEND_END - GAZE_BLEND_START));
                let target = start_node_position.lerp(*end_node_position, blend);

                let up = eased * DVec3::Y;
                look_rotation(target - position, up).unwrap_or(eased)
            }
        }
    }
}

/// Orientation whose -Z axis points along `forward` with `up` as the up hint.
///
/// Returns None when the forward direction vanishes or is colinear with up;
/// callers fall back to the blended endpoint orientation in that case.
fn look_rotation(forward: DVec3, up: DVec3) -> Option<DQuat> {
    let z = (-forward).try_normalize()?;
    let x = up.cross(z).try_normalize()?;
    let y = z.cross(x);
    Some(DQuat::from_mat3(&DMat3::from_cols(x, y, z)))
}
