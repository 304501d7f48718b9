//! Name-based projection registration and lookup.
//!
//! Mirrors the registration step of the reference catalogue: each projection
//! is known by a short id plus a descriptive title and classification tag,
//! and instantiation configures the shared figure record (forcing sphere
//! mode for sphere-only projections) before handing back the trait object.

use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::nell_hammer::NellHammer;
use crate::proj::Projection;

/// Registered identity of a projection.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionId {
    /// Short lookup key, e.g. "nell_h".
    pub id: &'static str,
    /// Descriptive title, e.g. "Nell-Hammer".
    pub title: &'static str,
    /// Classification tag, e.g. "PCyl, Sph".
    pub tag: &'static str,
}

pub const REGISTERED: &[ProjectionId] = &[ProjectionId {
    id: "nell_h",
    title: "Nell-Hammer",
    tag: "PCyl, Sph",
}];

/// Look up the registered identity for `id`.
pub fn find(id: &str) -> Option<&'static ProjectionId> {
    REGISTERED.iter().find(|p| p.id == id)
}

/// Instantiate the projection registered under `id` on the given figure.
///
/// Sphere-only projections force eccentricity-squared to zero during setup,
/// so an ellipsoidal `figure` is accepted and reduced to its sphere.
pub fn projection(id: &str, figure: Ellipsoid) -> Result<Box<dyn Projection>, ProjError> {
    let entry = find(id).ok_or_else(|| ProjError::UnknownProjection(id.to_string()))?;
    if !(figure.a.is_finite() && figure.a > 0.0) {
        return Err(ProjError::InvalidParameter(format!(
            "radius must be finite and positive, got {}",
            figure.a
        )));
    }
    match entry.id {
        "nell_h" => Ok(Box::new(NellHammer::new(figure))),
        // A registered id without a constructor arm is a registration bug.
        other => Err(ProjError::UnknownProjection(other.to_string())),
    }
}
