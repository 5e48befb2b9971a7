//! Which control point, if any, is highlighted for moving or deleting.

/// Edit selection of the editor.
///
/// `Selected(index)` always refers to an existing control point. Keeping that true is the job of
/// the [`InteractionController`](crate::controller::InteractionController), which changes the
/// store and the selection together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing is highlighted
    #[default]
    Idle,

    /// The control point at this index is highlighted
    Selected(usize),
}

impl Selection {
    /// Highlight the point at `index`
    pub fn select(&mut self, index: usize) {
        *self = Selection::Selected(index);
    }

    /// Drop the highlight
    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }

    /// Current state
    pub fn current(&self) -> Selection {
        *self
    }

    /// Index of the highlighted point
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Idle => None,
            Selection::Selected(index) => Some(*index),
        }
    }

    /// `true` if nothing is highlighted
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}
