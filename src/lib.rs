//! Spatialwin - surface-click window anchoring for immersive scenes
//!
//! A user inside a 3D/AR scene clicks a point on a room surface and the
//! currently selected floating UI window detaches from its tiled layout and
//! re-anchors onto that surface, facing outward from it. This crate is the
//! core of that interaction:
//!
//! - [`anchor`] turns a pointer-surface hit into an outward-facing placement
//! - [`registry`] is the single source of truth for window transforms,
//!   display flags, and selection
//! - [`interact`] wires the two together as one synchronous click command
//! - [`layout`] arranges windows still subject to the automatic tiled layout
//!   and computes follow-camera poses
//! - [`widgets`] holds the content logic for the stock clock/stopwatch/
//!   pomodoro widgets
//! - [`session`] loads and saves the scene-start window roster and scripted
//!   pointer sessions
//!
//! Rendering, asset loading, and AR session entry live in an external
//! collaborator that reads the registry every frame; nothing here touches a
//! GPU or an OS window.

pub mod anchor;
pub mod interact;
pub mod layout;
pub mod registry;
pub mod session;
pub mod widgets;

pub use anchor::{AnchorResolver, GeometryError, Placement, SurfaceHit};
pub use interact::{PlaceError, PlaceOutcome, SurfacePlacer};
pub use registry::{DisplayFlags, PlacementState, RegistryError, Window, WindowId, WindowRegistry};
