//! The ordered list of control points, which is the single source of truth for the curve's shape.

use nalgebra::Vector2;

use crate::error::EditError;

/// A position in window pixel space, y measured from the bottom of the window.
pub type Point = Vector2<f64>;

/// Ordered control points.
///
/// Insertion order matters: it defines the control polygon and therefore the curve's
/// parametrization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPointStore {
    points: Vec<Point>,
}

impl ControlPointStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point after all existing ones and return its index
    pub fn append(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Overwrite the point at `index` and return the point it replaced
    pub fn replace(&mut self, index: usize, point: Point) -> Result<Point, EditError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(EditError::Index { index, len })?;
        Ok(std::mem::replace(slot, point))
    }

    /// Remove the point at `index`, shifting all later points down by one.
    pub fn remove(&mut self, index: usize) -> Result<Point, EditError> {
        if index >= self.points.len() {
            return Err(EditError::Index {
                index,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(index))
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if there are no control points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point at `index`
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// View all points in order
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over all points in order
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for ControlPointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        ControlPointStore {
            points: iter.into_iter().collect(),
        }
    }
}
