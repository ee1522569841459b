//! Parameter resolution: UI integers → `(point_count, target, guard)`.
//!
//! Policies
//! - `Direct`: point count and multiplier straight from the sliders. Chords are
//!   skipped when the multiplier is non-positive (the "dots only" state).
//! - `Date`: point count = age (midpoint fallback), target = day × month.
//!   No sign guard.
//! - `HashedDate`: as `Date`, with the age hash-remapped into the cosmetic
//!   point-count range.
//!
//! The guards differ between variants on purpose; each policy keeps its own.

use crate::cfg::{
    AGE_DEFAULT, BASE_DEFAULT, DAY_DEFAULT, MONTH_DEFAULT, MULTIPLIER_DEFAULT, NUM_POINTS_FALLBACK,
    NUM_POINTS_MAX_VALUE, NUM_POINTS_MIN_VALUE,
};
use crate::hash::hash_remap;

/// Sliders of the direct variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectParams {
    pub base: i32,
    pub multiplier: i32,
}

impl Default for DirectParams {
    fn default() -> Self {
        Self {
            base: BASE_DEFAULT,
            multiplier: MULTIPLIER_DEFAULT,
        }
    }
}

/// Sliders of the date-derived variants. `age = None` means unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateParams {
    pub day: i32,
    pub month: i32,
    pub age: Option<i32>,
}

impl Default for DateParams {
    fn default() -> Self {
        Self {
            day: DAY_DEFAULT,
            month: MONTH_DEFAULT,
            age: Some(AGE_DEFAULT),
        }
    }
}

impl DateParams {
    /// Raw product; the connection rule reduces it modulo N.
    #[inline]
    pub fn target(&self) -> i64 {
        i64::from(self.day) * i64::from(self.month)
    }
}

/// Current parameter values held by the UI collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionParameters {
    Direct(DirectParams),
    Date(DateParams),
    HashedDate(DateParams),
}

impl Default for ConnectionParameters {
    fn default() -> Self {
        ConnectionParameters::Direct(DirectParams::default())
    }
}

/// When chords are drawn for a resolved target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Skip all chords if `target <= 0` (dots are still drawn).
    SkipNonPositive,
    /// Draw chords whenever points exist.
    Unguarded,
}

/// Input to one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub point_count: i32,
    pub target: i64,
    pub guard: Guard,
}

impl Resolved {
    /// Whether chords should be emitted. Checked on `target` only.
    #[inline]
    pub fn draws_chords(&self) -> bool {
        match self.guard {
            Guard::SkipNonPositive => self.target > 0,
            Guard::Unguarded => true,
        }
    }
}

impl ConnectionParameters {
    pub fn resolve(&self) -> Resolved {
        match *self {
            ConnectionParameters::Direct(p) => Resolved {
                point_count: p.base,
                target: i64::from(p.multiplier),
                guard: Guard::SkipNonPositive,
            },
            ConnectionParameters::Date(p) => Resolved {
                point_count: p.age.unwrap_or(NUM_POINTS_FALLBACK),
                target: p.target(),
                guard: Guard::Unguarded,
            },
            ConnectionParameters::HashedDate(p) => Resolved {
                point_count: p
                    .age
                    .and_then(|a| hash_remap(a, NUM_POINTS_MIN_VALUE, NUM_POINTS_MAX_VALUE))
                    .unwrap_or(NUM_POINTS_FALLBACK),
                target: p.target(),
                guard: Guard::Unguarded,
            },
        }
    }

    /// Short variant name for logs and provenance.
    pub fn variant_name(&self) -> &'static str {
        match self {
            ConnectionParameters::Direct(_) => "direct",
            ConnectionParameters::Date(_) => "date",
            ConnectionParameters::HashedDate(_) => "hashed_date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_defaults() {
        let r = ConnectionParameters::default().resolve();
        assert_eq!(r.point_count, 10);
        assert_eq!(r.target, 2);
        assert_eq!(r.guard, Guard::SkipNonPositive);
        assert!(r.draws_chords());
    }

    #[test]
    fn direct_guard_on_target_only() {
        let zero = ConnectionParameters::Direct(DirectParams {
            base: 10,
            multiplier: 0,
        })
        .resolve();
        assert!(!zero.draws_chords());
        let neg = ConnectionParameters::Direct(DirectParams {
            base: 10,
            multiplier: -3,
        })
        .resolve();
        assert!(!neg.draws_chords());
    }

    #[test]
    fn date_defaults_and_product() {
        let r = ConnectionParameters::Date(DateParams::default()).resolve();
        assert_eq!(r.point_count, 20);
        assert_eq!(r.target, 20);
        assert_eq!(r.guard, Guard::Unguarded);
    }

    #[test]
    fn date_without_age_uses_midpoint() {
        let r = ConnectionParameters::Date(DateParams {
            age: None,
            ..DateParams::default()
        })
        .resolve();
        assert_eq!(r.point_count, 40);
    }

    #[test]
    fn date_variant_is_unguarded() {
        let r = ConnectionParameters::Date(DateParams {
            day: 0,
            month: 12,
            age: Some(30),
        })
        .resolve();
        assert_eq!(r.target, 0);
        assert!(r.draws_chords());
    }

    #[test]
    fn hashed_date_remaps_age() {
        let r = ConnectionParameters::HashedDate(DateParams {
            day: 3,
            month: 4,
            age: Some(37),
        })
        .resolve();
        assert_eq!(r.point_count, 43);
        assert_eq!(r.target, 12);
        let unset = ConnectionParameters::HashedDate(DateParams {
            age: None,
            ..DateParams::default()
        })
        .resolve();
        assert_eq!(unset.point_count, NUM_POINTS_FALLBACK);
    }
}
