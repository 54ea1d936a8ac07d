use serde::{Deserialize, Serialize};

use crate::DEFAULT_KEPLER_ITERATIONS;

/// The residual of Kepler's equation, `E - e·sin(E) - M`.
///
/// All angles are in radians. A perfect solution has a residual of zero.
#[inline]
pub fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * eccentric_anomaly.sin()) - mean_anomaly
}

/// The result of solving Kepler's equation for a given mean anomaly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// The eccentric anomaly, in radians.
    pub eccentric_anomaly: f64,

    /// The true anomaly, in radians.
    ///
    /// This is the angle between periapsis and the body as seen from the Sun.
    /// It lies in `(-π, π]`.
    pub true_anomaly: f64,

    /// The distance from the focus, in the same unit as the semi-major axis
    /// passed to the solver.
    pub radius: f64,
}

/// A solver for the elliptic Kepler equation `E = M + e·sin(E)`.
///
/// The solver uses plain fixed-point iteration seeded at `E₀ = M`.
/// Each iteration shrinks the error by roughly a factor of `e`, so
/// it converges quickly for planetary orbits but slows to a crawl
/// as the eccentricity approaches 1.
///
/// By default the solver runs exactly [`DEFAULT_KEPLER_ITERATIONS`]
/// iterations with no convergence check. Use
/// [`with_tolerance`][Self::with_tolerance] to stop early once the
/// update falls below a threshold, or
/// [`with_max_iterations`][Self::with_max_iterations] to trade precision
/// for cost.
///
/// # Near-parabolic orbits
/// The true anomaly is computed from `sqrt((1 + e) / (1 - e))`, which
/// blows up as `e → 1`. Eccentricities of 1 or more are outside this
/// solver's domain and give meaningless results.
///
/// # Example
/// ```
/// use solar_orbits::KeplerSolver;
///
/// let solver = KeplerSolver::default();
///
/// // A circular orbit is uniform motion: the true anomaly equals the mean anomaly.
/// let solution = solver.solve(90.0, 0.0, 1.0);
/// assert!((solution.true_anomaly - 90f64.to_radians()).abs() < 1e-12);
/// assert!((solution.radius - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeplerSolver {
    /// The maximum number of fixed-point iterations to run.
    pub max_iterations: u32,

    /// Stop iterating once `|E_{n+1} - E_n|` drops below this value, in radians.
    ///
    /// `None` runs every iteration.
    pub tolerance: Option<f64>,
}

impl KeplerSolver {
    /// Creates a solver that runs a fixed number of iterations.
    pub const fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            tolerance: None,
        }
    }

    /// Returns a copy of this solver with a different iteration count.
    #[must_use]
    pub const fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Returns a copy of this solver that stops early once converged.
    ///
    /// `tolerance` is in radians. The iteration count still caps the work.
    #[must_use]
    pub const fn with_tolerance(self, tolerance: f64) -> Self {
        Self {
            tolerance: Some(tolerance),
            ..self
        }
    }

    /// Gets the eccentric anomaly for a mean anomaly.
    ///
    /// Unlike [`solve`][Self::solve], `mean_anomaly` is in **radians**.
    /// The input is not wrapped, so a mean anomaly of `2π` gives an
    /// eccentric anomaly near `2π` rather than near zero.
    pub fn get_eccentric_anomaly(&self, mean_anomaly: f64, eccentricity: f64) -> f64 {
        let mut eccentric_anomaly = mean_anomaly;

        for _ in 0..self.max_iterations {
            let next = mean_anomaly + eccentricity * eccentric_anomaly.sin();
            let delta = (next - eccentric_anomaly).abs();
            eccentric_anomaly = next;

            if let Some(tolerance) = self.tolerance {
                if delta < tolerance {
                    break;
                }
            }
        }

        eccentric_anomaly
    }

    /// Gets the true anomaly, in radians, for an eccentric anomaly.
    ///
    /// `v = 2·atan(sqrt((1 + e) / (1 - e))·tan(E / 2))`
    pub fn get_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
        let factor = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
        2.0 * (factor * (eccentric_anomaly * 0.5).tan()).atan()
    }

    /// Solves Kepler's equation for a mean anomaly given in **degrees**.
    ///
    /// Returns the eccentric and true anomalies (radians) and the radius
    /// `a(1 - e²) / (1 + e·cos(v))`, in the unit of `semi_major_axis`.
    pub fn solve(
        &self,
        mean_anomaly: f64,
        eccentricity: f64,
        semi_major_axis: f64,
    ) -> KeplerSolution {
        let eccentric_anomaly = self.get_eccentric_anomaly(mean_anomaly.to_radians(), eccentricity);
        let true_anomaly = Self::get_true_anomaly(eccentric_anomaly, eccentricity);
        let radius = semi_major_axis * (1.0 - eccentricity * eccentricity)
            / (1.0 + eccentricity * true_anomaly.cos());

        KeplerSolution {
            eccentric_anomaly,
            true_anomaly,
            radius,
        }
    }
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self::new(DEFAULT_KEPLER_ITERATIONS)
    }
}
