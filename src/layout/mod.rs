//! Automatic window layout
//!
//! Windows that nobody has pinned to a surface sit in a tiled grid in front
//! of the viewer. The tiler only ever writes through
//! [`WindowRegistry::set_tiled_transform`], so a manually placed window is
//! out of its reach for good. Follow-camera windows get their pose computed
//! here too; the renderer applies it every frame for windows whose
//! `follow_camera` flag is set.

use crate::anchor::{outward_rotation, Placement};
use crate::registry::{PlacementState, RegistryError, WindowId, WindowRegistry};
use glam::{Quat, Vec3};

/// Grid arrangement for windows still subject to tiling.
///
/// `origin` is the center of the first row, `forward` the direction from the
/// viewer toward the grid plane. Tiles face back along `forward` and fill
/// rows left to right in window creation order.
#[derive(Debug, Clone, Copy)]
pub struct TilingLayout {
    pub origin: Vec3,
    pub forward: Vec3,
    pub columns: usize,
    pub spacing: f32,
    pub row_height: f32,
}

impl Default for TilingLayout {
    fn default() -> Self {
        Self {
            origin: Vec3::new(0.0, 1.6, -2.5),
            forward: Vec3::NEG_Z,
            columns: 3,
            spacing: 1.4,
            row_height: 1.1,
        }
    }
}

impl TilingLayout {
    /// Re-tile every eligible window (state `Tiled`, tiling not disabled).
    /// Returns how many windows were arranged.
    pub fn arrange<C>(&self, registry: &mut WindowRegistry<C>) -> Result<usize, RegistryError> {
        let columns = self.columns.max(1);
        let facing = -normalized_forward(self.forward);
        let rotation = outward_rotation(facing);
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;

        let ids: Vec<WindowId> = registry
            .windows()
            .iter()
            .filter(|window| {
                window.state() == PlacementState::Tiled && !window.flags().disable_tiling
            })
            .map(|window| window.id().clone())
            .collect();

        for (slot, id) in ids.iter().enumerate() {
            let column = slot % columns;
            let row = slot / columns;
            let x = (column as f32 - (columns as f32 - 1.0) * 0.5) * self.spacing;
            let y = -(row as f32) * self.row_height;
            let position = self.origin + right * x + up * y;
            registry.set_tiled_transform(id, position, rotation)?;
        }
        if !ids.is_empty() {
            log::debug!("tiled {} window(s)", ids.len());
        }
        Ok(ids.len())
    }
}

/// Pose for a follow-camera window: held `distance` in front of the camera
/// and facing it.
pub fn follow_placement(camera_position: Vec3, camera_rotation: Quat, distance: f32) -> Placement {
    let view_dir = camera_rotation * Vec3::NEG_Z;
    Placement {
        position: camera_position + view_dir * distance,
        rotation: outward_rotation(-view_dir),
    }
}

fn normalized_forward(forward: Vec3) -> Vec3 {
    if forward.length_squared() <= 1e-10 {
        Vec3::NEG_Z
    } else {
        forward.normalize()
    }
}
