//! Mandala pattern geometry.
//!
//! A circle of `N` evenly spaced points, each connected to the point with
//! index `(i · target) mod N`. The host UI owns the sliders; this crate turns
//! the integers it supplies into a drawable `Scene`.
//!
//! Layout
//! - `layout`: point placement on the circle (pure).
//! - `connect`: the modulo-N connection rule (pure).
//! - `params`, `hash`: mapping from UI integers to `(point_count, target)`.
//! - `viewport`, `scene`: viewport-derived dimensions and the memoizing renderer.
//! - `store`: observable parameter store passed to UI consumers.
//! - `svg`: serialization of a rendered scene.

pub mod cfg;
pub mod connect;
pub mod hash;
pub mod layout;
pub mod params;
pub mod scene;
pub mod store;
pub mod svg;
pub mod viewport;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::connect::{connections, wrap_index, Chord};
    pub use crate::hash::hash_remap;
    pub use crate::layout::{layout, PointSet};
    pub use crate::params::{ConnectionParameters, DateParams, DirectParams, Guard, Resolved};
    pub use crate::scene::{Renderer, Scene};
    pub use crate::store::{ParamStore, SubscriptionId};
    pub use crate::viewport::{Circle, Padding, Viewport};
    pub use nalgebra::Vector2 as Vec2;
}
