//! Tunable values of the editor.
//!
//! `EditorConfig` holds everything that may be changed at runtime. The `const` values are the
//! defaults used when no config file is present.

use std::path::Path;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::store::Point;

/// Logical canvas width in pixels.
pub const VIEWPORT_WIDTH: f64 = 640.0;
/// Logical canvas height in pixels.
pub const VIEWPORT_HEIGHT: f64 = 480.0;
/// A right click selects a control point closer than this many pixels.
pub const SELECTION_RADIUS: f64 = 10.0;
/// Radius of the circle drawn around every control point.
pub const MARKER_RADIUS: f64 = 10.0;
/// The highlighted control point gets a second circle this much larger.
pub const HIGHLIGHT_EXTRA_RADIUS: f64 = 3.0;
/// Curve points evaluated per frame.
pub const SAMPLE_COUNT: usize = 2000;

/// Size of the canvas, equal to the window's pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Convert a cursor position reported by the window (y grows downwards) into the canvas
    /// convention used by the editor (y grows upwards from the bottom edge).
    pub fn window_to_canvas(&self, x: f64, y: f64) -> Point {
        Point::new(x, self.height - y)
    }

    /// Inverse of [`Viewport::window_to_canvas`]
    pub fn canvas_to_window(&self, point: &Point) -> (f64, f64) {
        (point.x, self.height - point.y)
    }
}

/// Runtime configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas size
    pub viewport: Viewport,
    /// Hit test radius for right clicks
    pub selection_radius: f64,
    /// Radius of control point markers
    pub marker_radius: f64,
    /// Extra radius of the highlighted marker
    pub highlight_extra_radius: f64,
    /// Curve points per frame
    pub sample_count: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            viewport: Viewport::default(),
            selection_radius: SELECTION_RADIUS,
            marker_radius: MARKER_RADIUS,
            highlight_extra_radius: HIGHLIGHT_EXTRA_RADIUS,
            sample_count: SAMPLE_COUNT,
        }
    }
}

impl EditorConfig {
    /// Parse a config from TOML, missing keys fall back to their defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: EditorConfig = toml::from_str(content).context("invalid editor config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, failing if it can't be read or parsed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        log::info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Load a config file, using the defaults if it is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Write the config as TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Reject values the editor can't work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.sample_count > 0, "sample_count must be positive");
        ensure!(
            self.selection_radius > 0.0,
            "selection_radius must be positive, got {}",
            self.selection_radius
        );
        ensure!(
            self.marker_radius > 0.0 && self.highlight_extra_radius >= 0.0,
            "marker radii must be positive"
        );
        ensure!(
            self.viewport.width > 0.0 && self.viewport.height > 0.0,
            "viewport must not be empty, got {}x{}",
            self.viewport.width,
            self.viewport.height
        );
        Ok(())
    }

    /// The per frame part of the config
    pub fn frame_settings(&self) -> FrameSettings {
        FrameSettings {
            sample_count: self.sample_count,
            marker_radius: self.marker_radius,
            highlight_extra_radius: self.highlight_extra_radius,
        }
    }
}

/// Values needed to assemble a [`FrameRenderPlan`](crate::frame::FrameRenderPlan)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSettings {
    /// Curve points per frame
    pub sample_count: usize,
    /// Radius of control point markers
    pub marker_radius: f64,
    /// Extra radius of the highlighted marker
    pub highlight_extra_radius: f64,
}

impl Default for FrameSettings {
    fn default() -> Self {
        EditorConfig::default().frame_settings()
    }
}
