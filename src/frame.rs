//! Everything a rendering backend needs to draw one frame.

use crate::config::FrameSettings;
use crate::curve::CurveSample;
use crate::selection::Selection;
use crate::store::Point;

/// Circle drawn around a control point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// The control point
    pub center: Point,
    /// Radius of the regular circle
    pub radius: f64,
    /// Radius of the additional, larger circle if this point is highlighted
    pub highlight_radius: Option<f64>,
}

impl Marker {
    /// `true` if this marker belongs to the selected control point
    pub fn is_highlighted(&self) -> bool {
        self.highlight_radius.is_some()
    }
}

/// Read-only data for a single rendered frame.
///
/// It is built from scratch for every frame and dropped once the backend has drawn it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameRenderPlan {
    /// Curve points, drawn as individual dots
    pub curve: CurveSample,
    /// One marker per control point, in store order
    pub markers: Vec<Marker>,
    /// Index of the highlighted marker
    pub highlighted: Option<usize>,
}

impl FrameRenderPlan {
    /// Evaluate the curve and lay out the markers for the current state.
    pub fn build(points: &[Point], selection: Selection, settings: &FrameSettings) -> Self {
        let curve = CurveSample::evaluate(points, settings.sample_count);
        let highlighted = selection.index();
        let highlight_radius = settings.marker_radius + settings.highlight_extra_radius;

        let markers = points
            .iter()
            .enumerate()
            .map(|(i, &center)| Marker {
                center,
                radius: settings.marker_radius,
                highlight_radius: (highlighted == Some(i)).then_some(highlight_radius),
            })
            .collect();

        log::trace!(
            "Frame: {} curve points, {} markers, highlight {:?}",
            curve.len(),
            points.len(),
            highlighted
        );

        FrameRenderPlan {
            curve,
            markers,
            highlighted,
        }
    }
}
