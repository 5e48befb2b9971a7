//! Errors raised when editing the control points.

use thiserror::Error;

/// Failure of a [`ControlPointStore`](crate::store::ControlPointStore) mutation.
///
/// The [`InteractionController`](crate::controller::InteractionController) only ever targets the
/// selected index, so this only shows up when the store is driven directly with a bad index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// An index outside of `0..len` was passed to `replace` or `remove`
    #[error("control point index {index} is out of range for {len} points")]
    Index {
        /// The offending index
        index: usize,
        /// Number of control points at the time of the call
        len: usize,
    },
}
