//! Session roster and persistence
//!
//! A session starts from a roster: one entry per widget window, created once
//! at scene start. Rosters (plus optional scripted pointer clicks for
//! headless replay) round-trip as pretty JSON.

use crate::anchor::SurfaceHit;
use crate::registry::{DisplayFlags, RegistryError, WindowRegistry};
use crate::widgets::{ClockWidget, PomodoroWidget, StopwatchWidget, WidgetContent};
use glam::{Mat4, Vec3};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Which stock widget a roster window displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Clock,
    Stopwatch,
    Pomodoro,
}

/// One window to create at scene start.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WindowSpec {
    pub id: String,
    pub title: String,
    pub widget: WidgetKind,
    pub position: Vec3,
    #[serde(default)]
    pub flags: DisplayFlags,
    /// Clock-only: render without seconds. Ignored by the other widgets.
    #[serde(default)]
    pub disable_seconds: bool,
}

/// A recorded pointer click against room geometry, replayable headless.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct ScriptedClick {
    pub point: Vec3,
    pub normal: Vec3,
    #[serde(default = "identity_transform")]
    pub object_transform: Mat4,
}

impl ScriptedClick {
    pub fn to_hit(&self) -> SurfaceHit {
        SurfaceHit {
            point: self.point,
            normal: self.normal,
            object_transform: self.object_transform,
        }
    }
}

fn identity_transform() -> Mat4 {
    Mat4::IDENTITY
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SessionLayout {
    pub windows: Vec<WindowSpec>,
    #[serde(default)]
    pub clicks: Vec<ScriptedClick>,
}

pub fn save_session_to_file(layout: &SessionLayout, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(layout)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_session_from_file(path: &Path) -> Result<SessionLayout> {
    let json = std::fs::read_to_string(path)?;
    let layout: SessionLayout = serde_json::from_str(&json)?;
    Ok(layout)
}

/// Register every roster window. Fails fast on a duplicate id; windows
/// created before the failure stay registered.
pub fn spawn_windows(
    registry: &mut WindowRegistry<WidgetContent>,
    layout: &SessionLayout,
) -> std::result::Result<usize, RegistryError> {
    for spec in &layout.windows {
        let content = match spec.widget {
            WidgetKind::Clock => WidgetContent::Clock(ClockWidget::new(spec.disable_seconds)),
            WidgetKind::Stopwatch => WidgetContent::Stopwatch(StopwatchWidget::new()),
            WidgetKind::Pomodoro => WidgetContent::Pomodoro(PomodoroWidget::default()),
        };
        registry.create_window(
            spec.id.as_str(),
            spec.title.as_str(),
            spec.position,
            spec.flags,
            content,
        )?;
    }
    log::info!("spawned {} window(s) from roster", layout.windows.len());
    Ok(layout.windows.len())
}

/// The stock three-widget roster: a clock, a stopwatch, and a pomodoro
/// timer floating in front of the viewer.
pub fn default_layout() -> SessionLayout {
    let flags = DisplayFlags {
        follow_camera: true,
        disable_tiling: true,
        disable_background: false,
    };
    SessionLayout {
        windows: vec![
            WindowSpec {
                id: "clock".to_string(),
                title: "Clock".to_string(),
                widget: WidgetKind::Clock,
                position: Vec3::new(0.705, 5.389, -6.841),
                flags,
                disable_seconds: true,
            },
            WindowSpec {
                id: "stopwatch".to_string(),
                title: "Stop Watch".to_string(),
                widget: WidgetKind::Stopwatch,
                position: Vec3::new(-0.705, 3.289, -6.841),
                flags,
                disable_seconds: false,
            },
            WindowSpec {
                id: "pomodoro".to_string(),
                title: "Pomodoro Timer".to_string(),
                widget: WidgetKind::Pomodoro,
                position: Vec3::new(1.905, 3.289, -6.841),
                flags,
                disable_seconds: false,
            },
        ],
        clicks: Vec::new(),
    }
}
