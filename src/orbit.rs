use serde::{Deserialize, Serialize};

use crate::OrbitTrait;

/// A minimal struct holding only the orbital elements of a body.
///
/// This is what the [`PositionEngine`][crate::PositionEngine] actually
/// needs. It is `Copy`, so renderers can keep one per body without
/// cloning names and display data around.
///
/// # Example
/// ```
/// use solar_orbits::{Orbit, OrbitTrait};
///
/// let mars = Orbit::new(
///     // Semi-major axis, in kilometers
///     227_900_000.0,
///
///     // Eccentricity
///     0.0934,
///
///     // Inclination, in degrees
///     1.85,
///
///     // Orbital period, in days
///     687.0,
/// );
///
/// assert!(!mars.is_stationary());
/// assert!(Orbit::stationary().is_stationary());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// The semi-major axis of the orbit, in kilometers.
    pub semi_major_axis: f64,

    /// The eccentricity of the orbit, in `[0, 1)`.
    ///
    /// See more: <https://en.wikipedia.org/wiki/Orbital_eccentricity>
    pub eccentricity: f64,

    /// The inclination of the orbit, in degrees.
    ///
    /// In simple terms, it tells you how "tilted" the orbit is
    /// relative to the reference plane.
    pub inclination: f64,

    /// The sidereal orbital period, in Earth days.
    ///
    /// A period that is not positive (including NaN) marks the orbit
    /// as stationary.
    pub orbital_period: f64,
}

impl Orbit {
    /// Creates a new orbit from its elements.
    ///
    /// An orbital period of zero (or less) marks the orbit as stationary.
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        orbital_period: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            orbital_period,
        }
    }

    /// Creates an orbit that stays fixed at the origin.
    pub const fn stationary() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl OrbitTrait for Orbit {
    fn get_semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    fn get_eccentricity(&self) -> f64 {
        self.eccentricity
    }

    fn get_inclination(&self) -> f64 {
        self.inclination
    }

    fn get_orbital_period(&self) -> f64 {
        self.orbital_period
    }

    fn is_stationary(&self) -> bool {
        self.orbital_period.is_nan() || self.orbital_period <= 0.0
    }
}

impl Default for Orbit {
    /// Creates a unit circular orbit with a period of one day.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }
}
