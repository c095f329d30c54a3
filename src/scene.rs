//! Narrow query interface to the externally-owned scene graph
//!
//! The navigation kernel never mutates scene state; it reads node world
//! positions and bounding radii through [`SceneQuery`] when a waypoint is
//! constructed, and snapshots them into a [`NodeInfo`]. The snapshot keeps
//! the per-frame traversal free of collaborator calls.

use glam::DVec3;

use crate::error::{NavigationError, NavigationResult};

/// Read-only access to scene-graph node state.
///
/// Implemented by the owning application over its node registry. Positions
/// are world-space, double precision; scales range from meters to light-years.
pub trait SceneQuery {
    /// Current world position of the node, or None if the identifier is unknown.
    fn node_position(&self, identifier: &str) -> Option<DVec3>;

    /// Bounding-sphere radius of the node, or None if the identifier is unknown.
    fn node_radius(&self, identifier: &str) -> Option<f64>;
}

/// Snapshot of a scene node taken when a waypoint is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    /// Scene-graph identifier of the node.
    pub identifier: String,
    /// World position of the node at capture time.
    pub position: DVec3,
    /// Bounding-sphere radius, used by collision-aware curve shaping.
    pub radius: f64,
}

impl NodeInfo {
    pub fn new(identifier: impl Into<String>, position: DVec3, radius: f64) -> Self {
        Self {
            identifier: identifier.into(),
            position,
            radius,
        }
    }

    /// Capture a node snapshot through the scene query.
    pub fn capture(scene: &dyn SceneQuery, identifier: &str) -> NavigationResult<Self> {
        let position = scene
            .node_position(identifier)
            .ok_or_else(|| NavigationError::unknown_node(identifier))?;
        let radius = scene.node_radius(identifier).unwrap_or(0.0);
        Ok(Self::new(identifier, position, radius))
    }
}
