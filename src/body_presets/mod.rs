//! This module contains presets for the bodies of the solar system.
//!
//! Distances are semi-major axes in kilometers, periods are sidereal
//! periods in Earth days, and inclinations come from [`KnownBody`][crate::KnownBody].

pub mod planets;
pub mod stars;

use crate::CelestialBody;

/// Returns the built-in solar system: the Sun followed by the eight planets,
/// in order of distance.
///
/// # Example
/// ```
/// use solar_orbits::body_presets::solar_system;
///
/// let bodies = solar_system();
/// assert_eq!(bodies.len(), 9);
/// assert_eq!(bodies[0].name(), "Sun");
/// assert_eq!(bodies[8].name(), "Neptune");
/// ```
pub fn solar_system() -> Vec<CelestialBody> {
    vec![
        stars::the_sun(),
        planets::mercury(),
        planets::venus(),
        planets::earth(),
        planets::mars(),
        planets::jupiter(),
        planets::saturn(),
        planets::uranus(),
        planets::neptune(),
    ]
}
