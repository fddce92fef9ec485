//! Spatialwin session replay driver
//!
//! Headless demo of the anchoring core: load a session roster (or the stock
//! three-widget one), tile the windows, select one, replay the scripted
//! surface clicks through the placement pipeline, and report where every
//! window ended up. Rendering lives in an external collaborator; this binary
//! exercises everything underneath it.

use glam::{Mat4, Vec3};
use spatialwin::layout::TilingLayout;
use spatialwin::session::{self, ScriptedClick};
use spatialwin::{PlaceOutcome, SurfacePlacer, WindowRegistry};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("🚀 Spatialwin - surface anchoring replay");

    let mut layout = match std::env::args().nth(1) {
        Some(path) => session::load_session_from_file(Path::new(&path))
            .expect("Failed to load session file"),
        None => session::default_layout(),
    };
    if layout.clicks.is_empty() {
        // Stock click on the back wall so a bare run still shows a placement.
        layout.clicks.push(ScriptedClick {
            point: Vec3::new(0.5, 2.0, -7.0),
            normal: Vec3::Z,
            object_transform: Mat4::IDENTITY,
        });
    }

    let mut registry = WindowRegistry::new();
    session::spawn_windows(&mut registry, &layout).expect("Failed to spawn roster windows");
    TilingLayout::default()
        .arrange(&mut registry)
        .expect("Failed to tile windows");

    if let Some(first_id) = registry.windows().first().map(|window| window.id().clone()) {
        registry
            .set_selected(&first_id)
            .expect("Failed to select window");
        log::info!("selected window \"{first_id}\"");
    }

    let placer = SurfacePlacer::default();
    for (index, click) in layout.clicks.iter().enumerate() {
        match placer.place_selected(&mut registry, &click.to_hit()) {
            Ok(PlaceOutcome::Placed { id, .. }) => {
                log::info!("click {index}: window \"{id}\" re-anchored");
            }
            Ok(PlaceOutcome::NoSelection) => {
                log::info!("click {index}: nothing selected, ignored");
            }
            Err(err) => {
                log::warn!("click {index}: {err}");
            }
        }
    }

    for window in registry.windows() {
        let position = window.position();
        log::info!(
            "window \"{}\" ({}) [{:?}] at ({:.3}, {:.3}, {:.3})",
            window.id(),
            window.content().kind_name(),
            window.state(),
            position.x,
            position.y,
            position.z
        );
    }

    log::info!("👋 Session complete");
}
