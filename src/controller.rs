//! Turns pointer and key events into changes of the control points and the selection.

use crate::config::{EditorConfig, FrameSettings, SELECTION_RADIUS};
use crate::error::EditError;
use crate::frame::FrameRenderPlan;
use crate::selection::Selection;
use crate::store::{ControlPointStore, Point};

/// Input understood by the editor.
///
/// Positions are already in canvas space, see [`Viewport::window_to_canvas`].
///
/// [`Viewport::window_to_canvas`]: crate::config::Viewport::window_to_canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Left mouse button pressed
    LeftClick(Point),
    /// Right mouse button pressed
    RightClick(Point),
    /// Delete key pressed
    DeleteKeyPressed,
}

/// What handling an [`InputEvent`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// A new point was added at this index
    Appended(usize),
    /// The highlighted point was moved
    Moved {
        /// Index of the moved point
        index: usize,
        /// Its old position
        from: Point,
        /// Its new position
        to: Point,
    },
    /// A point got highlighted
    Selected(usize),
    /// The highlight was dropped without touching any point
    Deselected(usize),
    /// The highlighted point was removed
    Deleted {
        /// Index the point had
        index: usize,
        /// The removed point
        point: Point,
    },
    /// Nothing changed
    Ignored,
}

impl Transition {
    /// `true` if the control points or the selection changed
    pub fn changed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

/// Index of the first point, in store order, closer than `radius` to `cursor`.
///
/// This is deliberately not the *nearest* point: with overlapping markers an earlier point wins
/// even if a later one is closer.
pub fn hit_test(points: &[Point], cursor: &Point, radius: f64) -> Option<usize> {
    let radius_squared = radius * radius;
    points
        .iter()
        .position(|q| (q - cursor).norm_squared() < radius_squared)
}

/// The editor's state: control points plus selection.
///
/// Both are only ever changed together through [`InteractionController::handle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorContext {
    store: ControlPointStore,
    selection: Selection,
}

impl EditorContext {
    /// Start with the given points and nothing selected
    pub fn with_points(store: ControlPointStore) -> Self {
        EditorContext {
            store,
            selection: Selection::Idle,
        }
    }

    /// The control points
    pub fn store(&self) -> &ControlPointStore {
        &self.store
    }

    /// The selection
    pub fn selection(&self) -> Selection {
        self.selection.current()
    }
}

/// Applies input events to an [`EditorContext`] and builds frames from it.
pub struct InteractionController {
    context: EditorContext,
    selection_radius: f64,
    needs_redraw: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        InteractionController::new(SELECTION_RADIUS)
    }
}

impl InteractionController {
    /// Create a controller with no points and the given hit test radius
    pub fn new(selection_radius: f64) -> Self {
        InteractionController::with_context(EditorContext::default(), selection_radius)
    }

    /// Create a controller for existing state
    pub fn with_context(context: EditorContext, selection_radius: f64) -> Self {
        InteractionController {
            context,
            selection_radius,
            needs_redraw: true,
        }
    }

    /// Create a controller using the config's hit test radius
    pub fn from_config(config: &EditorConfig) -> Self {
        InteractionController::new(config.selection_radius)
    }

    /// Current state
    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    /// The control points
    pub fn store(&self) -> &ControlPointStore {
        self.context.store()
    }

    /// The selection
    pub fn selection(&self) -> Selection {
        self.context.selection()
    }

    /// `true` if something changed since the last [`InteractionController::frame`]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Apply a single event.
    ///
    /// On error neither the points nor the selection are changed.
    pub fn handle(&mut self, event: InputEvent) -> Result<Transition, EditError> {
        let EditorContext { store, selection } = &mut self.context;

        let transition = match (selection.current(), event) {
            (Selection::Idle, InputEvent::LeftClick(p)) => Transition::Appended(store.append(p)),
            (Selection::Selected(index), InputEvent::LeftClick(p)) => {
                let from = store.replace(index, p)?;
                selection.clear();
                Transition::Moved { index, from, to: p }
            }
            (Selection::Idle, InputEvent::RightClick(p)) => {
                match hit_test(store.as_slice(), &p, self.selection_radius) {
                    Some(index) => {
                        selection.select(index);
                        Transition::Selected(index)
                    }
                    None => Transition::Ignored,
                }
            }
            (Selection::Selected(index), InputEvent::RightClick(_)) => {
                selection.clear();
                Transition::Deselected(index)
            }
            (Selection::Selected(index), InputEvent::DeleteKeyPressed) => {
                let point = store.remove(index)?;
                selection.clear();
                Transition::Deleted { index, point }
            }
            (Selection::Idle, InputEvent::DeleteKeyPressed) => Transition::Ignored,
        };

        if transition.changed() {
            log::debug!("{:?} -> {:?}", event, transition);
            self.needs_redraw = true;
        }
        Ok(transition)
    }

    /// Build the plan for the next frame from the current state.
    ///
    /// The curve is always evaluated from scratch.
    pub fn frame(&mut self, settings: &FrameSettings) -> FrameRenderPlan {
        self.needs_redraw = false;
        FrameRenderPlan::build(
            self.context.store.as_slice(),
            self.context.selection,
            settings,
        )
    }
}
