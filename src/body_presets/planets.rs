//! This module contains presets for the planets of the solar system.
//!
//! "A planet is a large, rounded astronomical body that is generally
//! required to be in orbit around a star, stellar remnant, or brown dwarf,
//! and is not one itself."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Planet)

use crate::{CelestialBody, KnownBody, PhysicalProperties};

struct PlanetData {
    diameter: f64,
    semi_major_axis: f64,
    orbital_period: f64,
    eccentricity: f64,
    gravity: f64,
    mass: f64,
    axial_tilt: f64,
}

fn planet(known: KnownBody, data: PlanetData) -> CelestialBody {
    let PlanetData {
        diameter,
        semi_major_axis,
        orbital_period,
        eccentricity,
        gravity,
        mass,
        axial_tilt,
    } = data;

    CelestialBody::new(
        known.name(),
        diameter,
        semi_major_axis,
        orbital_period,
        eccentricity,
        known.inclination(),
    )
    .with_physical(PhysicalProperties {
        gravity: Some(gravity),
        mass: Some(mass),
        axial_tilt: Some(axial_tilt),
        perihelion: Some(semi_major_axis * (1.0 - eccentricity)),
        aphelion: Some(semi_major_axis * (1.0 + eccentricity)),
        ..Default::default()
    })
}

/// Returns Mercury, the closest planet to the Sun.
pub fn mercury() -> CelestialBody {
    planet(
        KnownBody::Mercury,
        PlanetData {
            diameter: 4_879.0,
            semi_major_axis: 57_900_000.0,
            orbital_period: 88.0,
            eccentricity: 0.2056,
            gravity: 3.7,
            mass: 3.301e23,
            axial_tilt: 0.034,
        },
    )
}

/// Returns Venus, the second planet from the Sun.
pub fn venus() -> CelestialBody {
    planet(
        KnownBody::Venus,
        PlanetData {
            diameter: 12_104.0,
            semi_major_axis: 108_200_000.0,
            orbital_period: 225.0,
            eccentricity: 0.0068,
            gravity: 8.87,
            mass: 4.867e24,
            axial_tilt: 177.36,
        },
    )
}

/// Returns Earth, the third planet from the Sun.
pub fn earth() -> CelestialBody {
    planet(
        KnownBody::Earth,
        PlanetData {
            diameter: 12_742.0,
            semi_major_axis: 149_600_000.0,
            orbital_period: 365.0,
            eccentricity: 0.0167,
            gravity: 9.8,
            mass: 5.972e24,
            axial_tilt: 23.44,
        },
    )
}

/// Returns Mars, the fourth planet from the Sun.
pub fn mars() -> CelestialBody {
    planet(
        KnownBody::Mars,
        PlanetData {
            diameter: 6_779.0,
            semi_major_axis: 227_900_000.0,
            orbital_period: 687.0,
            eccentricity: 0.0934,
            gravity: 3.71,
            mass: 6.417e23,
            axial_tilt: 25.19,
        },
    )
}

/// Returns Jupiter, the fifth planet from the Sun.
pub fn jupiter() -> CelestialBody {
    planet(
        KnownBody::Jupiter,
        PlanetData {
            diameter: 139_820.0,
            semi_major_axis: 778_500_000.0,
            orbital_period: 4_333.0,
            eccentricity: 0.0489,
            gravity: 24.79,
            mass: 1.898e27,
            axial_tilt: 3.13,
        },
    )
}

/// Returns Saturn, the sixth planet from the Sun.
pub fn saturn() -> CelestialBody {
    planet(
        KnownBody::Saturn,
        PlanetData {
            diameter: 116_460.0,
            semi_major_axis: 1_434_000_000.0,
            orbital_period: 10_759.0,
            eccentricity: 0.0565,
            gravity: 10.44,
            mass: 5.683e26,
            axial_tilt: 26.73,
        },
    )
}

/// Returns Uranus, the seventh planet from the Sun.
pub fn uranus() -> CelestialBody {
    planet(
        KnownBody::Uranus,
        PlanetData {
            diameter: 50_724.0,
            semi_major_axis: 2_871_000_000.0,
            orbital_period: 30_687.0,
            eccentricity: 0.0457,
            gravity: 8.87,
            mass: 8.681e25,
            axial_tilt: 97.77,
        },
    )
}

/// Returns Neptune, the eighth planet from the Sun.
pub fn neptune() -> CelestialBody {
    planet(
        KnownBody::Neptune,
        PlanetData {
            diameter: 49_244.0,
            semi_major_axis: 4_495_000_000.0,
            orbital_period: 60_190.0,
            eccentricity: 0.0113,
            gravity: 11.15,
            mass: 1.024e26,
            axial_tilt: 28.32,
        },
    )
}
