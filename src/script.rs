//! Recorded input, replayed by the `bezedit` binary in place of a live window.
//!
//! Scripts are TOML files with one `[[events]]` table per input event. Positions are given the way
//! a window reports the cursor, with y growing downwards:
//!
//! ```toml
//! [[events]]
//! kind = "left_click"
//! x = 100.0
//! y = 380.0
//!
//! [[events]]
//! kind = "right_click"
//! x = 102.0
//! y = 378.0
//!
//! [[events]]
//! kind = "delete"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::Viewport;
use crate::controller::InputEvent;

/// One recorded event in window coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Left mouse button press
    LeftClick {
        /// Cursor x
        x: f64,
        /// Cursor y, from the top of the window
        y: f64,
    },
    /// Right mouse button press
    RightClick {
        /// Cursor x
        x: f64,
        /// Cursor y, from the top of the window
        y: f64,
    },
    /// Delete key press
    Delete,
}

impl ScriptEvent {
    /// Convert into an editor event in canvas coordinates
    pub fn to_input(self, viewport: &Viewport) -> InputEvent {
        match self {
            ScriptEvent::LeftClick { x, y } => {
                InputEvent::LeftClick(viewport.window_to_canvas(x, y))
            }
            ScriptEvent::RightClick { x, y } => {
                InputEvent::RightClick(viewport.window_to_canvas(x, y))
            }
            ScriptEvent::Delete => InputEvent::DeleteKeyPressed,
        }
    }
}

/// A sequence of recorded events
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    /// Events in the order they happened
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl EventScript {
    /// Parse a script from TOML
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid event script")
    }

    /// Read and parse a script file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event script {}", path.display()))?;
        let script = Self::parse(&content)
            .with_context(|| format!("failed to load event script {}", path.display()))?;
        log::info!("Loaded {} events from {}", script.events.len(), path.display());
        Ok(script)
    }

    /// All events converted to canvas coordinates
    pub fn input_events<'a>(
        &'a self,
        viewport: &'a Viewport,
    ) -> impl Iterator<Item = InputEvent> + 'a {
        self.events.iter().map(move |event| event.to_input(viewport))
    }
}
