//! Connection Rule Engine: one chord per point, `i → (i · target) mod N`.
//!
//! The remainder is Euclidean, so negative targets still land in `[0, N)`.
//! Sign guards on `target` belong to the parameter policy (`params::Guard`),
//! not to this rule.

use nalgebra::Vector2;

use crate::layout::PointSet;

/// Line segment between two points of a `PointSet`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chord {
    pub from: usize,
    pub to: usize,
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Chord {
    /// `(from, to)` index pair, independent of where the points are drawn.
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.from, self.to)
    }
    /// Degenerate chord (a point connected to itself).
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// End index of the chord leaving point `i`. Requires `n > 0`.
///
/// Computed in 128-bit: `i · target` is exact for any `usize` index and `i64` target.
#[inline]
pub fn wrap_index(i: usize, target: i64, n: usize) -> usize {
    debug_assert!(n > 0);
    let prod = i as i128 * i128::from(target);
    // rem_euclid with a positive modulus is always in [0, n).
    prod.rem_euclid(n as i128) as usize
}

/// All chords for `points` under `target`. Empty input gives no chords.
pub fn connections(points: &PointSet, target: i64) -> Vec<Chord> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let j = wrap_index(i, target, n);
            Chord {
                from: i,
                to: j,
                start: points[i],
                end: points[j],
            }
        })
        .collect()
}
