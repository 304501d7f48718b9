//! Pipeline — degrees↔radians dispatch wrapper around a projection.
//!
//! Projections themselves work in radians; external callers usually hold
//! geographic coordinates in degrees. The pipeline owns the configured
//! projection, converts units at the boundary, and delegates forward and
//! inverse calls to the trait object.

use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::registry;
use crate::proj::Projection;

pub struct Pipeline {
    proj: Box<dyn Projection>,
}

impl Pipeline {
    /// Create a pipeline for the projection registered under `id`.
    pub fn new(id: &str, figure: Ellipsoid) -> Result<Self, ProjError> {
        let proj = registry::projection(id, figure)?;
        Ok(Self { proj })
    }

    /// Geographic (degrees) → planar.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> Result<(f64, f64), ProjError> {
        self.proj.forward(lon_deg.to_radians(), lat_deg.to_radians())
    }

    /// Planar → geographic (degrees).
    pub fn unproject(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let (lon, lat) = self.proj.inverse(x, y)?;
        Ok((lon.to_degrees(), lat.to_degrees()))
    }

    /// Batch geographic (degrees) → planar, in place.
    pub fn project_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            c.0 = c.0.to_radians();
            c.1 = c.1.to_radians();
        }
        self.proj.forward_batch(coords)
    }

    /// Batch planar → geographic (degrees), in place.
    pub fn unproject_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        self.proj.inverse_batch(coords)?;
        for c in coords.iter_mut() {
            c.0 = c.0.to_degrees();
            c.1 = c.1.to_degrees();
        }
        Ok(())
    }

    pub fn projection(&self) -> &dyn Projection {
        self.proj.as_ref()
    }
}
