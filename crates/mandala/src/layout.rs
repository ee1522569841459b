//! Point Layout Engine: evenly spaced points on a circle.
//!
//! Model
//! - Point `i` of `n` sits at angle `θ(i) = π − 2π·i/n`, i.e. index 0 is the
//!   leftmost point and indices advance by `2π/n` in decreasing angle.
//! - The phase and direction are part of the rendered contract; do not
//!   normalize them.

use std::f64::consts::PI;
use std::ops::Index;

use nalgebra::Vector2;

/// Ordered, immutable set of points on the main circle.
///
/// `len()` equals the point count it was built for, or 0 when that count was
/// non-positive. A new point count produces a new `PointSet`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Vector2<f64>>,
}

impl PointSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn get(&self, i: usize) -> Option<Vector2<f64>> {
        self.points.get(i).copied()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.points
    }
    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.points.iter()
    }
}

impl Index<usize> for PointSet {
    type Output = Vector2<f64>;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Vector2<f64>;
    type IntoIter = std::slice::Iter<'a, Vector2<f64>>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Angle of point `i` out of `n` (`n > 0`).
#[inline]
pub fn angle_of(i: usize, n: usize) -> f64 {
    PI - 2.0 * PI * (i as f64) / (n as f64)
}

/// Place `point_count` points on the circle `(center, radius)`.
///
/// Non-positive counts yield an empty set; this is not an error.
pub fn layout(point_count: i32, center: Vector2<f64>, radius: f64) -> PointSet {
    let Ok(n) = usize::try_from(point_count) else {
        return PointSet::default();
    };
    let points = (0..n)
        .map(|i| {
            let th = angle_of(i, n);
            Vector2::new(center.x + radius * th.cos(), center.y + radius * th.sin())
        })
        .collect();
    PointSet { points }
}
