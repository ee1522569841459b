//! Viewport dimensions and the quantities derived from them.
//!
//! - Usable area: size minus padding on each axis (never negative).
//! - Center: middle of the usable area, offset by the left/top padding.
//! - Base radius: `RADIUS_FRACTION · min(usable w, usable h)`.
//! - Dot radius: `DOT_FRACTION · base radius`.

use nalgebra::Vector2;

use crate::cfg::{DOT_FRACTION, RADIUS_FRACTION};

/// Padding in pixels on each side of the drawing region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    /// Same padding on all four sides.
    #[inline]
    pub fn uniform(p: f64) -> Self {
        Self {
            left: p,
            right: p,
            top: p,
            bottom: p,
        }
    }
}

/// Circle descriptor handed to the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

/// Drawing region as reported by the host on layout/resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }
    #[inline]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
    #[inline]
    pub fn usable_width(&self) -> f64 {
        (self.width - self.padding.left - self.padding.right).max(0.0)
    }
    #[inline]
    pub fn usable_height(&self) -> f64 {
        (self.height - self.padding.top - self.padding.bottom).max(0.0)
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            self.padding.left + self.usable_width() / 2.0,
            self.padding.top + self.usable_height() / 2.0,
        )
    }
    #[inline]
    pub fn base_radius(&self) -> f64 {
        self.usable_width().min(self.usable_height()) * RADIUS_FRACTION
    }
    #[inline]
    pub fn dot_radius(&self) -> f64 {
        DOT_FRACTION * self.base_radius()
    }
    /// Outer boundary circle.
    #[inline]
    pub fn boundary(&self) -> Circle {
        Circle {
            center: self.center(),
            radius: self.base_radius(),
        }
    }
}
