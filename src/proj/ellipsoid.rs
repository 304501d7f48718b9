/// Reference figure parameters.
///
/// A sphere-only projection consumes the radius and the eccentricity flag;
/// the flattening-derived fields are kept so the same record can describe an
/// ellipsoidal figure handed in by a caller before sphere mode is forced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres, or 1.0 for the normalized unit sphere)
    pub a: f64,
    /// Flattening (dimensionless, 0 for a sphere)
    pub f: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let e2 = 2.0 * f - f * f;
        Self { a, f, e2 }
    }

    /// A perfect sphere of the given radius.
    pub const fn sphere(radius: f64) -> Self {
        Self::new(radius, 0.0)
    }

    /// The sphere sharing this figure's semi-major axis (e² forced to zero).
    pub const fn to_sphere(&self) -> Self {
        Self::sphere(self.a)
    }

    /// Get the first eccentricity (computed at runtime).
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    pub fn is_sphere(&self) -> bool {
        self.e2 == 0.0
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);

/// Unit sphere — the normalized figure of the reference formulation.
pub const UNIT_SPHERE: Ellipsoid = Ellipsoid::sphere(1.0);
