//! astronav: camera path navigation for large-scale 3D scenes
//!
//! Computes and traverses smooth camera trajectories between two named
//! viewpoints in scenes whose distances span many orders of magnitude
//! (meters to light-years). The unit of work is a [`Path`]: one curve, one
//! rotation interpolator, and one speed profile, advanced once per frame by
//! the owning render loop:
//!
//! ```
//! use astronav::{CurveKind, NavigationSettings, Path, Pose, Waypoint};
//! use astronav::scene::NodeInfo;
//! use glam::{DQuat, DVec3};
//!
//! let start = Waypoint::new(
//!     Pose::new(DVec3::ZERO, DQuat::IDENTITY),
//!     NodeInfo::new("earth", DVec3::ZERO, 0.0),
//! );
//! let end = Waypoint::new(
//!     Pose::new(DVec3::new(1000.0, 0.0, 0.0), DQuat::IDENTITY),
//!     NodeInfo::new("moon", DVec3::new(1000.0, 0.0, 0.0), 0.0),
//! );
//!
//! let mut path = Path::new(
//!     start,
//!     end,
//!     CurveKind::Linear,
//!     Some(10.0),
//!     NavigationSettings::default(),
//! )?;
//!
//! while !path.has_reached_end() {
//!     let pose = path.traverse(1.0 / 60.0);
//!     // hand pose to the camera, express it relative to path.current_anchor()
//! }
//! # Ok::<(), astronav::NavigationError>(())
//! ```
//!
//! Single-threaded and call-driven: nothing here blocks, locks, or spawns.
//! Scene-graph state is only read, through the narrow [`scene::SceneQuery`]
//! interface, and is snapshotted into waypoints at construction time.

pub mod curve;
pub mod error;
pub mod interpolation;
pub mod path;
pub mod rotation;
pub mod scene;
pub mod settings;
pub mod speed;
pub mod waypoint;

pub use curve::{Curve, CurveKind};
pub use error::{NavigationError, NavigationResult};
pub use path::{Path, MIN_DURATION};
pub use rotation::RotationInterpolator;
pub use scene::SceneQuery;
pub use settings::NavigationSettings;
pub use speed::SpeedProfile;
pub use waypoint::{Pose, Waypoint};
