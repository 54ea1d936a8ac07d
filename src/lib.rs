//! # Solar System Orbital Mechanics
//! This library crate contains the position engine behind a solar system
//! visualizer: it turns a table of orbital elements into 3D coordinates
//! at any instant, and samples whole orbits into closed polylines for display.
//!
//! Positions are computed with two-body Keplerian mechanics. Each body moves
//! along a fixed ellipse with the Sun at one focus, and its place on that
//! ellipse is found by solving Kepler's equation for the mean anomaly.
//! There are no time steps and no accumulated state, so asking for the same
//! instant twice always yields the same coordinate.
//!
//! Perturbations from other bodies are not modelled. Neither is precession:
//! every orbit's inclination is applied independently about the same axis.
//!
//! ## Getting started
//! This crate provides a handful of main types:
//! - [`CelestialBody`]: A body with its orbital elements and some
//!   pass-through display data (colour, diameter, physical properties).
//! - [`Orbit`]: Just the orbital elements, in a small `Copy` struct.
//! - [`KeplerSolver`]: Solves Kepler's equation for the true anomaly
//!   and orbital radius.
//! - [`PositionEngine`]: Combines a solver with a display distance scale
//!   to turn mean anomalies or instants into positions, and to generate
//!   orbit paths.
//! - [`Catalog`]: The read-only table of bodies a renderer iterates over.
//!
//! The [`body_presets`] module contains the built-in solar system, and the
//! [`adapter`] module converts records from the public
//! [Solar System OpenData](https://api.le-systeme-solaire.net) API into
//! [`CelestialBody`] values.
//!
//! ## Coordinate frame
//! The x/z axes span the reference orbital plane and y is the out-of-plane
//! deviation introduced by inclination. Periapsis of every orbit lies on the
//! positive x axis.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//!
//! use solar_orbits::{body_presets, PositionEngine};
//!
//! # fn main() {
//! let earth = body_presets::planets::earth();
//! let engine = PositionEngine::default();
//!
//! // At a mean anomaly of zero, Earth sits at perihelion on the x axis.
//! let position = engine.position(&earth, 0.0);
//! assert!((position - DVec3::new(147_101_680.0, 0.0, 0.0)).length() < 1.0);
//! # }
//! ```

#![warn(missing_docs)]

pub mod adapter;
mod body;
pub mod body_presets;
mod catalog;
mod clock;
mod config;
mod engine;
mod known_body;
mod orbit;
mod solvers;

pub use body::{CelestialBody, PhysicalProperties};
pub use catalog::{Catalog, CatalogError};
pub use clock::{
    days_since_j2000, j2000, Clock, FixedClock, ScaledClock, SystemClock, ANIMATION_DAYS_PER_SECOND,
};
pub use config::EngineConfig;
pub use engine::PositionEngine;
pub use known_body::{KnownBody, UnknownBodyError};
pub use orbit::Orbit;
pub use solvers::{keplers_equation, KeplerSolution, KeplerSolver};

use chrono::{DateTime, Utc};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// The J2000.0 epoch (2000-01-01T12:00:00 UTC) as milliseconds since the Unix epoch.
///
/// Mean anomalies derived from time are measured from this instant.
pub const J2000_UNIX_MILLIS: i64 = 946_728_000_000;

/// The number of milliseconds in one Earth day.
pub const DAY_MILLIS: f64 = 86_400_000.0;

/// The default number of fixed-point iterations used by the [`KeplerSolver`].
///
/// Ten iterations are plenty for planetary eccentricities: the error
/// shrinks by a factor of roughly `e` every iteration, so an orbit like
/// Mercury's (e ≈ 0.21) is solved to well below a microradian.
pub const DEFAULT_KEPLER_ITERATIONS: u32 = 10;

/// The default number of segments in a generated orbit path.
pub const DEFAULT_ORBIT_SEGMENTS: usize = 128;

/// A struct representing a 3x2 matrix.
///
/// This struct is used to store the transformation matrix
/// for tilting a 2D orbital-plane vector into 3D.
///
/// Namely, it is used in the [`transform_pqw_vector`][OrbitTrait::transform_pqw_vector]
/// method to apply an orbit's inclination to a position in its own plane.
///
/// Each element is named `eXY`, where `X` is the row and `Y` is the column.
///
/// # Example
/// ```
/// use glam::{DVec2, DVec3};
///
/// use solar_orbits::Matrix3x2;
///
/// let matrix = Matrix3x2 {
///    e11: 1.0, e12: 0.0,
///    e21: 0.0, e22: 0.0,
///    e31: 0.0, e32: 1.0,
/// };
///
/// let vec = DVec2::new(1.0, 2.0);
///
/// let result = matrix.dot_vec(vec);
///
/// assert_eq!(result, DVec3::new(1.0, 0.0, 2.0));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x2 {
    // Element XY
    pub e11: f64,
    pub e12: f64,
    pub e21: f64,
    pub e22: f64,
    pub e31: f64,
    pub e32: f64,
}

impl Matrix3x2 {
    /// Computes a dot product between this matrix and a 2D vector.
    ///
    /// # Example
    /// ```
    /// use glam::{DVec2, DVec3};
    ///
    /// use solar_orbits::Matrix3x2;
    ///
    /// let matrix = Matrix3x2 {
    ///     e11: 1.0, e12: 0.0,
    ///     e21: 0.0, e22: 1.0,
    ///     e31: 1.0, e32: 1.0,
    /// };
    ///
    /// let vec = DVec2::new(1.0, 2.0);
    ///
    /// let result = matrix.dot_vec(vec);
    ///
    /// assert_eq!(result, DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn dot_vec(&self, vec: DVec2) -> DVec3 {
        DVec3::new(
            vec.x * self.e11 + vec.y * self.e12,
            vec.x * self.e21 + vec.y * self.e22,
            vec.x * self.e31 + vec.y * self.e32,
        )
    }

    /// Builds the matrix that tilts the orbital plane about the x axis.
    ///
    /// The first column maps the periapsis direction onto x, and the second
    /// column maps the in-plane perpendicular direction onto
    /// `(0, sin(i), cos(i))`.
    ///
    /// `inclination` is in degrees.
    pub fn from_inclination(inclination: f64) -> Self {
        let (sin_i, cos_i) = inclination.to_radians().sin_cos();

        Self {
            e11: 1.0,
            e12: 0.0,
            e21: 0.0,
            e22: sin_i,
            e31: 0.0,
            e32: cos_i,
        }
    }
}

/// A trait that defines the orbital elements a position can be computed from.
///
/// [`Orbit`] and [`CelestialBody`] both implement this trait, so anything
/// in the [`PositionEngine`] works with either of them.
///
/// # Units
/// - Distances (semi-major axis, periapsis, ...) are in kilometers.
/// - Angles taken or returned by this trait are in **degrees**,
///   except where a method says otherwise.
/// - Orbital periods are in Earth days.
///
/// # Example
/// ```
/// use solar_orbits::{Orbit, OrbitTrait};
///
/// fn describe(orbit: &impl OrbitTrait) -> String {
///     format!("{} km to {} km", orbit.get_periapsis(), orbit.get_apoapsis())
/// }
///
/// let orbit = Orbit::new(100.0, 0.5, 0.0, 10.0);
/// assert_eq!(describe(&orbit), "50 km to 150 km");
/// ```
pub trait OrbitTrait {
    /// Gets the semi-major axis of the orbit, in kilometers.
    ///
    /// This is also the distance from the Sun listed in body tables.
    fn get_semi_major_axis(&self) -> f64;

    /// Gets the eccentricity of the orbit.
    ///
    /// Only closed orbits are supported, so this is expected to be in `[0, 1)`.
    /// Values of 1 or more make the Kepler solution meaningless.
    fn get_eccentricity(&self) -> f64;

    /// Gets the inclination of the orbital plane, in degrees.
    fn get_inclination(&self) -> f64;

    /// Gets the sidereal orbital period, in Earth days.
    ///
    /// A period of zero means the body does not orbit anything.
    fn get_orbital_period(&self) -> f64;

    /// Whether the body stays fixed at the origin.
    ///
    /// Stationary bodies are placed at `(0, 0, 0)` no matter what
    /// their other elements say.
    fn is_stationary(&self) -> bool;

    /// Gets the periapsis of the orbit, in kilometers.
    ///
    /// This is the closest distance to the Sun, `a(1 - e)`.
    fn get_periapsis(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 - self.get_eccentricity())
    }

    /// Gets the apoapsis of the orbit, in kilometers.
    ///
    /// This is the furthest distance from the Sun, `a(1 + e)`.
    fn get_apoapsis(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 + self.get_eccentricity())
    }

    /// Gets the semi-latus rectum of the orbit, in kilometers.
    ///
    /// The semi-latus rectum is the radius at a true anomaly of 90°,
    /// `a(1 - e²)`.
    fn get_semi_latus_rectum(&self) -> f64 {
        let eccentricity = self.get_eccentricity();
        self.get_semi_major_axis() * (1.0 - eccentricity * eccentricity)
    }

    /// Gets the mean motion of the orbit, in degrees per day.
    ///
    /// Stationary bodies, and bodies without a positive period, have a
    /// mean motion of zero.
    fn get_mean_motion(&self) -> f64 {
        let period = self.get_orbital_period();
        if self.is_stationary() || period.is_nan() || period <= 0.0 {
            return 0.0;
        }

        360.0 / period
    }

    /// Gets the mean anomaly a given number of days after the J2000 epoch.
    ///
    /// The result is wrapped into `[0, 360)` degrees, including for
    /// negative day counts.
    fn get_mean_anomaly_at_days(&self, days_since_epoch: f64) -> f64 {
        let mean_anomaly = (self.get_mean_motion() * days_since_epoch).rem_euclid(360.0);

        // rem_euclid rounds tiny negative inputs up to exactly 360
        if mean_anomaly >= 360.0 {
            0.0
        } else {
            mean_anomaly
        }
    }

    /// Gets the mean anomaly at a given instant, in degrees.
    ///
    /// See [`get_mean_anomaly_at_days`][OrbitTrait::get_mean_anomaly_at_days].
    fn get_mean_anomaly_at_instant(&self, instant: DateTime<Utc>) -> f64 {
        self.get_mean_anomaly_at_days(days_since_j2000(instant))
    }

    /// Gets the distance from the Sun at a given true anomaly, in kilometers.
    ///
    /// Unlike most methods on this trait, `true_anomaly` is in **radians**,
    /// matching [`KeplerSolution::true_anomaly`].
    fn get_radius_at_true_anomaly(&self, true_anomaly: f64) -> f64 {
        self.get_semi_latus_rectum() / (1.0 + self.get_eccentricity() * true_anomaly.cos())
    }

    /// Gets the matrix that tilts orbital-plane coordinates into 3D.
    ///
    /// See [`Matrix3x2::from_inclination`].
    fn get_transformation_matrix(&self) -> Matrix3x2 {
        Matrix3x2::from_inclination(self.get_inclination())
    }

    /// Tilts a 2D vector in the orbital plane into a 3D vector.
    ///
    /// The vector's x component points toward periapsis. The result
    /// keeps x, and distributes the y component between the output's
    /// y (out of plane) and z (in the reference plane) axes.
    ///
    /// # Example
    /// ```
    /// use glam::{DVec2, DVec3};
    /// use solar_orbits::{Orbit, OrbitTrait};
    ///
    /// let flat = Orbit::new(1.0, 0.0, 0.0, 1.0);
    /// assert_eq!(
    ///     flat.transform_pqw_vector(DVec2::new(1.0, 2.0)),
    ///     DVec3::new(1.0, 0.0, 2.0),
    /// );
    /// ```
    fn transform_pqw_vector(&self, position: DVec2) -> DVec3 {
        self.get_transformation_matrix().dot_vec(position)
    }
}

#[cfg(test)]
mod tests;
