//! Camera poses and waypoints
//!
//! A [`Pose`] is a world-space position plus a unit-quaternion orientation.
//! A [`Waypoint`] anchors a pose to a scene node, snapshotting the node's
//! world position and bounding radius at construction time.

use glam::{DQuat, DVec3};

use crate::error::NavigationResult;
use crate::scene::{NodeInfo, SceneQuery};

/// A camera pose: position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Pose {
    /// Create a pose. The rotation is re-normalized so the orientation
    /// invariant holds regardless of accumulated floating-point drift.
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self {
            position,
            rotation: rotation.normalize(),
        }
    }
}

/// An immutable snapshot of a pose anchored to a named scene node.
///
/// Waypoints are copied into the `Path` that uses them, never shared.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pose: Pose,
    node: NodeInfo,
}

impl Waypoint {
    /// Construct from a pose and an already-captured node snapshot.
    pub fn new(pose: Pose, node: NodeInfo) -> Self {
        Self { pose, node }
    }

    /// Construct by resolving the node through the scene query, capturing
    /// its world position and radius at this instant.
    pub fn capture(
        pose: Pose,
        scene: &dyn SceneQuery,
        node_identifier: &str,
    ) -> NavigationResult<Self> {
        let node = NodeInfo::capture(scene, node_identifier)?;
        Ok(Self { pose, node })
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> DVec3 {
        self.pose.position
    }

    pub fn rotation(&self) -> DQuat {
        self.pose.rotation
    }

    pub fn node(&self) -> &NodeInfo {
        &self.node
    }

    pub fn identifier(&self) -> &str {
        &self.node.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tests::TestScene;

    #[test]
    fn test_pose_normalizes_rotation() {
        let raw = DQuat::from_xyzw(0.0, 2.0, 0.0, 0.0);
        let pose = Pose::new(DVec3::ZERO, raw);

        assert!((pose.rotation.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_waypoint_capture_snapshots_node() {
        let scene = TestScene::new().with_node("mars", DVec3::new(5.0, 0.0, 0.0), 3.4e6);
        let pose = Pose::new(DVec3::new(5.0, 1e7, 0.0), DQuat::IDENTITY);

        let wp = Waypoint::capture(pose, &scene, "mars").unwrap();

        assert_eq!(wp.identifier(), "mars");
        assert!((wp.node().position.x - 5.0).abs() < 1e-12);
        assert!((wp.node().radius - 3.4e6).abs() < 1e-6);
        assert!((wp.position().y - 1e7).abs() < 1e-12);
    }

    #[test]
    fn test_waypoint_capture_unknown_node() {
        let scene = TestScene::new();
        let pose = Pose::new(DVec3::ZERO, DQuat::IDENTITY);

        assert!(Waypoint::capture(pose, &scene, "nowhere").is_err());
    }
}
