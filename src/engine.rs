use chrono::{DateTime, Utc};
use glam::{DVec2, DVec3};

use crate::{Clock, KeplerSolution, KeplerSolver, OrbitTrait, DEFAULT_ORBIT_SEGMENTS};

/// Turns orbital elements into positions.
///
/// The engine pairs a [`KeplerSolver`] with a distance scale. The scale
/// converts physical kilometers into whatever unit the renderer works in,
/// and is applied to every coordinate the engine returns.
///
/// The engine holds no mutable state: all methods take `&self` and may be
/// called from any number of threads at once.
///
/// # Example
/// ```
/// use glam::DVec3;
/// use solar_orbits::{KeplerSolver, Orbit, PositionEngine};
///
/// // One display unit per million kilometers.
/// let engine = PositionEngine::new(KeplerSolver::default(), 1e-6);
/// let orbit = Orbit::new(150e6, 0.0, 0.0, 365.0);
///
/// let position = engine.position(&orbit, 90.0);
/// assert!((position - DVec3::new(0.0, 0.0, 150.0)).length() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionEngine {
    /// The solver used for Kepler's equation.
    pub solver: KeplerSolver,

    /// The factor applied to every kilometer distance before it is returned.
    pub distance_scale: f64,

    /// The segment count used by [`default_orbit_path`][Self::default_orbit_path].
    pub orbit_segments: usize,
}

impl PositionEngine {
    /// Creates a new position engine.
    pub fn new(solver: KeplerSolver, distance_scale: f64) -> Self {
        Self {
            solver,
            distance_scale,
            orbit_segments: DEFAULT_ORBIT_SEGMENTS,
        }
    }

    /// Returns a copy of this engine using a different orbit segment count.
    #[must_use]
    pub fn with_orbit_segments(self, orbit_segments: usize) -> Self {
        Self {
            orbit_segments,
            ..self
        }
    }

    /// Solves the orbit at a mean anomaly, in degrees.
    ///
    /// The returned radius is in kilometers, without the distance scale.
    pub fn solve(&self, orbit: &impl OrbitTrait, mean_anomaly: f64) -> KeplerSolution {
        self.solver.solve(
            mean_anomaly,
            orbit.get_eccentricity(),
            orbit.get_semi_major_axis(),
        )
    }

    /// Gets the scaled position within the orbital plane at a mean anomaly.
    ///
    /// The x axis points toward periapsis. Stationary bodies are at the origin.
    pub fn pqw_position(&self, orbit: &impl OrbitTrait, mean_anomaly: f64) -> DVec2 {
        if orbit.is_stationary() {
            return DVec2::ZERO;
        }

        let KeplerSolution {
            true_anomaly,
            radius,
            ..
        } = self.solve(orbit, mean_anomaly);
        let (sin_v, cos_v) = true_anomaly.sin_cos();

        DVec2::new(cos_v, sin_v) * (radius * self.distance_scale)
    }

    /// Gets the scaled 3D position of a body at a mean anomaly, in degrees.
    ///
    /// Stationary bodies (the Sun) always return the origin.
    ///
    /// Otherwise, the position in the orbital plane is `(r·cos(v), r·sin(v))`,
    /// which is then tilted by the inclination about the x axis:
    /// `x = r·cos(v)`, `y = r·sin(v)·sin(i)`, `z = r·sin(v)·cos(i)`.
    pub fn position(&self, orbit: &impl OrbitTrait, mean_anomaly: f64) -> DVec3 {
        if orbit.is_stationary() {
            return DVec3::ZERO;
        }

        orbit.transform_pqw_vector(self.pqw_position(orbit, mean_anomaly))
    }

    /// Gets the scaled 3D position of a body at an instant.
    ///
    /// The mean anomaly is derived from the days elapsed since J2000,
    /// assuming the body passed periapsis at that epoch.
    pub fn position_at_instant(&self, orbit: &impl OrbitTrait, instant: DateTime<Utc>) -> DVec3 {
        self.position(orbit, orbit.get_mean_anomaly_at_instant(instant))
    }

    /// Gets the scaled 3D position of a body at the clock's current instant.
    pub fn current_position(&self, orbit: &impl OrbitTrait, clock: &impl Clock) -> DVec3 {
        self.position_at_instant(orbit, clock.now())
    }

    /// Samples one full revolution into a closed polyline.
    ///
    /// Returns `segments + 1` points at mean anomalies `i / segments · 360°`,
    /// so the first point (0°) and the last point (360°) coincide.
    /// The result does not depend on time.
    ///
    /// A `segments` of zero returns the single point at 0°.
    /// A stationary body yields `segments + 1` copies of the origin.
    pub fn orbit_path(&self, orbit: &impl OrbitTrait, segments: usize) -> Vec<DVec3> {
        if segments == 0 {
            return vec![self.position(orbit, 0.0)];
        }

        let segments_f64 = segments as f64;

        (0..=segments)
            .map(|i| self.position(orbit, i as f64 / segments_f64 * 360.0))
            .collect()
    }

    /// Samples an orbit with this engine's configured segment count.
    pub fn default_orbit_path(&self, orbit: &impl OrbitTrait) -> Vec<DVec3> {
        self.orbit_path(orbit, self.orbit_segments)
    }
}

impl Default for PositionEngine {
    /// An engine with the default solver and no scaling (output in kilometers).
    fn default() -> Self {
        Self::new(KeplerSolver::default(), 1.0)
    }
}
