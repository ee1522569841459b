//! Fixed constants shared by the parameter policies and the viewport.
//!
//! Policy
//! - Defaults mirror the initial slider positions of the reference UI.
//! - Proportions are fractions of the usable viewport; changing them changes
//!   rendered output, so they are not configurable.

/// Initial point count of the direct variant.
pub const BASE_DEFAULT: i32 = 10;
/// Initial multiplier of the direct variant.
pub const MULTIPLIER_DEFAULT: i32 = 2;

/// Initial day of the date-derived variant.
pub const DAY_DEFAULT: i32 = 2;
/// Initial month of the date-derived variant.
pub const MONTH_DEFAULT: i32 = 10;
/// Initial age of the date-derived variant.
pub const AGE_DEFAULT: i32 = 20;

/// Lower bound (inclusive) of the cosmetic point-count range.
pub const NUM_POINTS_MIN_VALUE: i32 = 20;
/// Upper bound (exclusive) of the cosmetic point-count range.
pub const NUM_POINTS_MAX_VALUE: i32 = 60;

/// Point count used by the date variants when no age is set.
pub const NUM_POINTS_FALLBACK: i32 = (NUM_POINTS_MIN_VALUE + NUM_POINTS_MAX_VALUE) / 2;

/// Base radius as a fraction of `min(usable width, usable height)`.
pub const RADIUS_FRACTION: f64 = 0.40;
/// Dot radius as a fraction of the base radius.
pub const DOT_FRACTION: f64 = 0.03;

/// Tolerance used by tests comparing coordinates.
#[cfg(test)]
pub(crate) const COORD_EPS: f64 = 1e-9;
