//! De Casteljau evaluation of the curve defined by the control points.
//!
//! The curve is rebuilt from scratch every frame, so everything in here is a pure function of the
//! control points.

use nalgebra::{RealField, Vector2};
use smallvec::SmallVec;

use crate::store::Point;

/// Control point counts up to this are reduced without a heap allocation.
const INLINE_POINTS: usize = 8;

/// Get the point on the curve at position `t`.
///
/// Every step blends each pair of neighbours into `p[i] * t + p[i + 1] * (1 - t)` until a single
/// point is left. Note the weighting: `t = 0` yields the *last* control point and `t -> 1`
/// approaches the first one.
///
/// Returns `None` for an empty slice. A single control point is returned as is for every `t`.
pub fn castlejau_eval<T: RealField>(points: &[Vector2<T>], t: T) -> Option<Vector2<T>> {
    let t_inv = T::one() - t.clone();

    let mut buffer: SmallVec<[Vector2<T>; INLINE_POINTS]> = points.iter().cloned().collect();
    for len in (2..=buffer.len()).rev() {
        // castlejau step, the last slot becomes dead afterwards
        for i in 0..(len - 1) {
            let blended = &buffer[i] * t.clone() + &buffer[i + 1] * t_inv.clone();
            buffer[i] = blended;
        }
    }

    buffer.into_iter().next()
}

/// Evaluate the curve at `sample_count` parameters spread uniformly over `[0, 1)`.
///
/// The `k`-th sample is taken at `t = k / sample_count`, so `t = 1` itself is never evaluated.
/// No control points or a `sample_count` of zero produce no samples.
///
/// Each sample costs `O(n²)` for `n` control points.
pub fn sample_curve<T: RealField>(points: &[Vector2<T>], sample_count: usize) -> Vec<Vector2<T>> {
    if points.is_empty() {
        return Vec::new();
    }

    let count = sample_count as f64;
    (0..sample_count)
        .filter_map(|k| castlejau_eval(points, nalgebra::convert::<f64, T>(k as f64 / count)))
        .collect()
}

/// Points approximating the curve for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveSample(pub Vec<Point>);

impl CurveSample {
    /// Sample the curve through `points`, see [`sample_curve`]
    pub fn evaluate(points: &[Point], sample_count: usize) -> Self {
        CurveSample(sample_curve(points, sample_count))
    }

    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if nothing was sampled
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the sampled points in parameter order
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.0.iter()
    }
}
