//! Render pass: viewport + resolved parameters → drawable `Scene`.
//!
//! The `PointSet` is memoized by `(point_count, viewport)`. Changing only the
//! target reuses the cached set; changing either key builds a new one and
//! replaces the old `Rc` wholesale.

use std::rc::Rc;

use crate::connect::{connections, Chord};
use crate::layout::{layout, PointSet};
use crate::params::{ConnectionParameters, Resolved};
use crate::viewport::{Circle, Viewport};

/// Everything the rendering collaborator draws for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub boundary: Circle,
    pub dots: Rc<PointSet>,
    pub dot_radius: f64,
    pub chords: Vec<Chord>,
}

impl Scene {
    /// Index pairs of all chords, for comparing patterns across resizes.
    pub fn chord_indices(&self) -> Vec<(usize, usize)> {
        self.chords.iter().map(Chord::indices).collect()
    }
}

#[derive(Clone, Debug)]
struct CachedPoints {
    point_count: i32,
    viewport: Viewport,
    points: Rc<PointSet>,
}

#[derive(Clone, Debug)]
pub struct Renderer {
    viewport: Viewport,
    cache: Option<CachedPoints>,
    regenerations: u64,
}

impl Renderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cache: None,
            regenerations: 0,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Host resize. The cached point set is invalidated lazily on next render.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Number of times a `PointSet` has been built.
    #[inline]
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    /// Point set for `point_count` in the current viewport, from cache if valid.
    pub fn points(&mut self, point_count: i32) -> Rc<PointSet> {
        if let Some(c) = &self.cache {
            if c.point_count == point_count && c.viewport == self.viewport {
                return Rc::clone(&c.points);
            }
        }
        let boundary = self.viewport.boundary();
        let points = Rc::new(layout(point_count, boundary.center, boundary.radius));
        self.regenerations += 1;
        tracing::debug!(
            point_count,
            width = self.viewport.width,
            height = self.viewport.height,
            regenerations = self.regenerations,
            "point_set_regenerated"
        );
        self.cache = Some(CachedPoints {
            point_count,
            viewport: self.viewport,
            points: Rc::clone(&points),
        });
        points
    }

    pub fn render(&mut self, resolved: &Resolved) -> Scene {
        let dots = self.points(resolved.point_count);
        let chords = if resolved.draws_chords() {
            connections(&dots, resolved.target)
        } else {
            Vec::new()
        };
        Scene {
            boundary: self.viewport.boundary(),
            dot_radius: self.viewport.dot_radius(),
            dots,
            chords,
        }
    }

    #[inline]
    pub fn render_params(&mut self, params: &ConnectionParameters) -> Scene {
        self.render(&params.resolve())
    }
}
