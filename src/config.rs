use serde::{Deserialize, Serialize};

use crate::{
    CelestialBody, KeplerSolver, PositionEngine, DEFAULT_KEPLER_ITERATIONS,
    DEFAULT_ORBIT_SEGMENTS,
};

/// Tunable parameters for turning physical data into display data.
///
/// Every field has a default, so a partial JSON object (or an empty one)
/// deserializes fine.
///
/// # Example
/// ```
/// use solar_orbits::EngineConfig;
///
/// let config: EngineConfig =
///     serde_json::from_str(r#"{ "distance_scale": 1e-7, "orbit_segments": 64 }"#).unwrap();
///
/// assert_eq!(config.orbit_segments, 64);
/// assert_eq!(config.kepler_iterations, 10);
///
/// let engine = config.engine();
/// assert_eq!(engine.distance_scale, 1e-7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The factor applied to orbital distances, in display units per kilometer.
    pub distance_scale: f64,

    /// The factor applied to body sizes, in display units per kilometer.
    pub size_scale: f64,

    /// The number of segments in generated orbit paths.
    pub orbit_segments: usize,

    /// The maximum number of Kepler solver iterations.
    pub kepler_iterations: u32,

    /// Optional early-exit tolerance for the Kepler solver, in radians.
    pub kepler_tolerance: Option<f64>,
}

impl EngineConfig {
    /// Builds the Kepler solver described by this configuration.
    pub fn solver(&self) -> KeplerSolver {
        let solver = KeplerSolver::new(self.kepler_iterations);

        match self.kepler_tolerance {
            Some(tolerance) => solver.with_tolerance(tolerance),
            None => solver,
        }
    }

    /// Builds a position engine from this configuration.
    pub fn engine(&self) -> PositionEngine {
        PositionEngine::new(self.solver(), self.distance_scale)
            .with_orbit_segments(self.orbit_segments)
    }

    /// The radius a body should be drawn with, in display units.
    pub fn display_radius(&self, body: &CelestialBody) -> f64 {
        body.radius() * self.size_scale
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            distance_scale: 1.0,
            size_scale: 1.0,
            orbit_segments: DEFAULT_ORBIT_SEGMENTS,
            kepler_iterations: DEFAULT_KEPLER_ITERATIONS,
            kepler_tolerance: None,
        }
    }
}
