//! Click-to-place pipeline
//!
//! One surface click is one synchronous command: resolve the hit into a
//! placement, then commit it against whichever window is currently selected.
//! Everything completes inside the caller's event-handler invocation; there
//! is nothing to await and no retry. A failed click leaves all prior state
//! untouched and the user simply clicks again.

use crate::anchor::{AnchorResolver, GeometryError, Placement, SurfaceHit};
use crate::registry::{RegistryError, WindowId, WindowRegistry};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaceError {
    #[error("invalid hit geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("placement rejected: {0}")]
    Registry(#[from] RegistryError),
}

/// Result of a surface click that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOutcome {
    /// The selected window was re-anchored onto the clicked surface.
    Placed { id: WindowId, placement: Placement },
    /// Nothing was selected; the click had no effect.
    NoSelection,
}

/// Dispatches surface clicks against a registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfacePlacer {
    resolver: AnchorResolver,
}

impl SurfacePlacer {
    pub fn new(resolver: AnchorResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &AnchorResolver {
        &self.resolver
    }

    /// Re-anchor the currently selected window onto the clicked surface.
    ///
    /// With no selection this is a silent no-op reported as
    /// [`PlaceOutcome::NoSelection`]. Resolution failures surface before any
    /// registry write, so the window keeps its previous transform.
    pub fn place_selected<C>(
        &self,
        registry: &mut WindowRegistry<C>,
        hit: &SurfaceHit,
    ) -> Result<PlaceOutcome, PlaceError> {
        let Some(id) = registry.selected().cloned() else {
            log::debug!("surface click ignored: no window selected");
            return Ok(PlaceOutcome::NoSelection);
        };
        let placement = self.resolver.resolve(hit)?;
        registry.apply_placement(&id, placement)?;
        log::info!(
            "anchored window \"{id}\" at ({:.3}, {:.3}, {:.3})",
            placement.position.x,
            placement.position.y,
            placement.position.z
        );
        Ok(PlaceOutcome::Placed { id, placement })
    }
}
