//! Nell–Hammer pseudocylindrical map projection.
//!
//! Provides the forward (geographic → planar) and inverse (planar →
//! geographic) transforms for the sphere-only Nell–Hammer projection,
//! together with a small name-based registry and a degrees↔radians
//! dispatch pipeline around the [`proj::Projection`] trait.

pub mod error;
pub mod proj;

pub use error::ProjError;
pub use proj::ellipsoid::Ellipsoid;
pub use proj::nell_hammer::NellHammer;
pub use proj::Projection;
