//! Window registry
//!
//! Single source of truth for every spatial window in the session: transform,
//! display flags, placement state, and the current selection. All placement
//! mutations go through here; the rendering collaborator only ever reads.
//!
//! The registry is an explicit value passed to whoever needs it, not a
//! process-wide singleton. Windows are created once at scene start and live
//! for the whole session; there is no removal.

use crate::anchor::Placement;
use glam::{Quat, Vec3};
use std::fmt;

// ========================================================================
// WindowId
// ========================================================================

/// Unique window identifier, assigned at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ========================================================================
// Display flags
// ========================================================================

/// Per-window policy toggles consumed by the rendering collaborator.
///
/// The core never touches these except for `disable_tiling`, which a manual
/// placement forces on (see [`WindowRegistry::apply_placement`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayFlags {
    /// Window tracks the viewer camera instead of staying world-anchored.
    pub follow_camera: bool,
    /// Window is exempt from the automatic tiled layout.
    pub disable_tiling: bool,
    /// Suppress the backing panel behind the widget.
    pub disable_background: bool,
}

/// Partial flag update: only `Some` fields are written, the rest keep their
/// current values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagsPatch {
    pub follow_camera: Option<bool>,
    pub disable_tiling: Option<bool>,
    pub disable_background: Option<bool>,
}

// ========================================================================
// Window
// ========================================================================

/// Placement lifecycle of a window. `Tiled` windows are subject to the
/// automatic layout; the first manual placement moves a window to
/// `ManuallyPlaced`, permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    Tiled,
    ManuallyPlaced,
}

/// One spatial UI window. `C` is the widget content the window displays;
/// the registry stores it without ever interpreting it.
#[derive(Debug)]
pub struct Window<C> {
    id: WindowId,
    title: String,
    position: Vec3,
    rotation: Quat,
    flags: DisplayFlags,
    state: PlacementState,
    content: C,
}

impl<C> Window<C> {
    pub fn id(&self) -> &WindowId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Pin the window: it is now manually placed and the tiled layout may
    /// never move it again.
    fn promote_to_manually_placed(&mut self) {
        self.state = PlacementState::ManuallyPlaced;
        self.flags.disable_tiling = true;
    }

    fn is_pinned(&self) -> bool {
        self.state == PlacementState::ManuallyPlaced || self.flags.disable_tiling
    }
}

// ========================================================================
// Errors
// ========================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("window id \"{0}\" already registered")]
    DuplicateId(WindowId),
    #[error("no window with id \"{0}\"")]
    UnknownWindow(WindowId),
}

// ========================================================================
// WindowRegistry
// ========================================================================

/// Registry of all windows plus the current selection.
///
/// Iteration order is creation order, so layout passes and reports are
/// deterministic. Lookups are linear; a session holds a handful of windows.
#[derive(Debug, Default)]
pub struct WindowRegistry<C> {
    windows: Vec<Window<C>>,
    selected: Option<WindowId>,
}

impl<C> WindowRegistry<C> {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            selected: None,
        }
    }

    /// Register a new window in the `Tiled` state with identity rotation.
    /// Fails with [`RegistryError::DuplicateId`] and leaves the registry
    /// unchanged if the id is already taken.
    pub fn create_window(
        &mut self,
        id: impl Into<WindowId>,
        title: impl Into<String>,
        position: Vec3,
        flags: DisplayFlags,
        content: C,
    ) -> Result<&Window<C>, RegistryError> {
        let id = id.into();
        if self.index_of(&id).is_some() {
            return Err(RegistryError::DuplicateId(id));
        }
        log::debug!("registered window \"{id}\"");
        let index = self.windows.len();
        self.windows.push(Window {
            id,
            title: title.into(),
            position,
            rotation: Quat::IDENTITY,
            flags,
            state: PlacementState::Tiled,
            content,
        });
        Ok(&self.windows[index])
    }

    pub fn get(&self, id: &WindowId) -> Option<&Window<C>> {
        self.index_of(id).map(|index| &self.windows[index])
    }

    /// All windows, in creation order. This is the read surface the renderer
    /// walks every frame.
    pub fn windows(&self) -> &[Window<C>] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn selected(&self) -> Option<&WindowId> {
        self.selected.as_ref()
    }

    /// Mark a window as the selection target for the next surface click.
    /// Fails with [`RegistryError::UnknownWindow`] and keeps the previous
    /// selection if the id does not exist.
    pub fn set_selected(&mut self, id: &WindowId) -> Result<(), RegistryError> {
        if self.index_of(id).is_none() {
            return Err(RegistryError::UnknownWindow(id.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Atomically overwrite a window's transform with a manual placement.
    ///
    /// This also promotes the window: its state becomes `ManuallyPlaced` and
    /// `disable_tiling` is forced on, so the automatic layout never reclaims
    /// a window the user has pinned to a surface. The promotion is part of
    /// the contract, not an incidental write.
    pub fn apply_placement(
        &mut self,
        id: &WindowId,
        placement: Placement,
    ) -> Result<(), RegistryError> {
        let window = self.window_mut(id)?;
        window.position = placement.position;
        window.rotation = placement.rotation;
        window.promote_to_manually_placed();
        log::debug!(
            "window \"{id}\" manually placed at ({:.3}, {:.3}, {:.3})",
            placement.position.x,
            placement.position.y,
            placement.position.z
        );
        Ok(())
    }

    /// Merge a partial flag update into a window's flags. Fields left `None`
    /// are untouched.
    pub fn update_flags(&mut self, id: &WindowId, patch: FlagsPatch) -> Result<(), RegistryError> {
        let window = self.window_mut(id)?;
        if let Some(follow_camera) = patch.follow_camera {
            window.flags.follow_camera = follow_camera;
        }
        if let Some(disable_tiling) = patch.disable_tiling {
            window.flags.disable_tiling = disable_tiling;
        }
        if let Some(disable_background) = patch.disable_background {
            window.flags.disable_background = disable_background;
        }
        Ok(())
    }

    /// Transform write used by the automatic layout. Does not promote, and
    /// silently refuses to move a window that is manually placed or flagged
    /// `disable_tiling` so the layout can never undo a pin.
    pub fn set_tiled_transform(
        &mut self,
        id: &WindowId,
        position: Vec3,
        rotation: Quat,
    ) -> Result<(), RegistryError> {
        let window = self.window_mut(id)?;
        if window.is_pinned() {
            return Ok(());
        }
        window.position = position;
        window.rotation = rotation;
        Ok(())
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|window| &window.id == id)
    }

    fn window_mut(&mut self, id: &WindowId) -> Result<&mut Window<C>, RegistryError> {
        match self.index_of(id) {
            Some(index) => Ok(&mut self.windows[index]),
            None => Err(RegistryError::UnknownWindow(id.clone())),
        }
    }
}
