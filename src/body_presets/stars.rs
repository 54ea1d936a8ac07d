//! This module contains presets for stars.
//!
//! "A star is a luminous spheroid of plasma held together by self-gravity."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Star)

use crate::{CelestialBody, KnownBody, PhysicalProperties};

/// Returns the Sun.
///
/// The Sun is stationary and always sits at the origin.
pub fn the_sun() -> CelestialBody {
    CelestialBody::stationary(KnownBody::Sun.name(), 1_392_700.0).with_physical(
        PhysicalProperties {
            gravity: Some(274.0),
            avg_temp: Some(5778.0),
            mass: Some(1.989e30),
            density: Some(1.41),
            axial_tilt: Some(7.25),
            sidereal_rotation: Some(609.12),
            ..Default::default()
        },
    )
}
