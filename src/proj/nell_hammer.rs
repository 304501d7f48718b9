//! Nell–Hammer pseudocylindrical projection (sphere only).
//!
//! forward: x = ½·a·λ·(1 + cos φ), y = 2·a·(φ − tan(φ/2))
//! inverse: λ from x once φ is known; φ by Newton–Raphson on the y-equation,
//! falling back to a pole clamp when the iteration fails to converge.

use std::f64::consts::FRAC_PI_2;

use crate::error::ProjError;
use crate::proj::ellipsoid::{Ellipsoid, UNIT_SPHERE};
use crate::proj::Projection;

/// Newton iteration budget for the inverse latitude solve.
const NITER: usize = 9;
/// Convergence threshold on the Newton increment.
const EPS: f64 = 1e-7;

pub struct NellHammer {
    sphere: Ellipsoid,
}

/// How the inverse latitude solve terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Solve {
    Converged,
    /// Iteration budget exhausted; latitude clamped to the nearest pole.
    PoleApproximation,
}

impl NellHammer {
    /// Create a Nell–Hammer projection on the sphere sharing `figure`'s
    /// semi-major axis. The projection is defined only for the sphere, so
    /// any eccentricity carried by `figure` is discarded.
    pub fn new(figure: Ellipsoid) -> Self {
        Self {
            sphere: figure.to_sphere(),
        }
    }

    /// Unit-sphere instance (a = 1), matching the reference formulation.
    pub fn unit() -> Self {
        Self {
            sphere: UNIT_SPHERE,
        }
    }

    /// Solve φ − tan(φ/2) = p for φ by Newton–Raphson, seeded at φ = 0.
    ///
    /// The Newton step divides by 1 − 0.5/cos²(φ/2), which shrinks toward
    /// zero as φ approaches a pole; targets beyond the reachable range of
    /// the y-equation therefore exhaust the budget instead of converging,
    /// and the estimate is clamped to the pole on the side of `p`.
    fn solve_phi(p: f64) -> (f64, Solve) {
        let mut phi = 0.0_f64;
        for _ in 0..NITER {
            let c = (0.5 * phi).cos();
            let v = (phi - (0.5 * phi).tan() - p) / (1.0 - 0.5 / (c * c));
            phi -= v;
            if v.abs() < EPS {
                return (phi, Solve::Converged);
            }
        }
        let pole = if p < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        (pole, Solve::PoleApproximation)
    }
}

impl Default for NellHammer {
    fn default() -> Self {
        Self::unit()
    }
}

impl Projection for NellHammer {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        let a = self.sphere.a;
        let x = 0.5 * a * lon * (1.0 + lat.cos());
        let y = 2.0 * a * (lat - (0.5 * lat).tan());
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let a = self.sphere.a;
        let p = 0.5 * y / a;
        let (lat, solve) = Self::solve_phi(p);
        let lon = match solve {
            Solve::Converged => 2.0 * x / (a * (1.0 + lat.cos())),
            // 1 + cos φ vanishes at the pole; λ = 2x/a is the limiting value.
            Solve::PoleApproximation => 2.0 * x / a,
        };
        Ok((lon, lat))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.sphere
    }
}
