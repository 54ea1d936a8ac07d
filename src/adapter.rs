//! Conversion of external body records into [`CelestialBody`] values.
//!
//! The records follow the schema of the
//! [Solar System OpenData](https://api.le-systeme-solaire.net) `bodies`
//! endpoint. Fetching them is up to the caller; this module only parses
//! and normalizes what was fetched.
//!
//! Normalization never fails on a single record. Missing or unusable
//! values fall back to neutral defaults:
//! - a missing or non-positive sidereal period becomes `0`, which makes
//!   the body stationary instead of dividing by zero later,
//! - a missing or out-of-range eccentricity becomes `0` (a circular orbit),
//! - inclination comes from [`KnownBody`], and unknown bodies get `0°`.
//!
//! The Sun is always normalized into a stationary body at the origin,
//! whatever the record says about its orbit.
//!
//! # Example
//! ```
//! use solar_orbits::{adapter, OrbitTrait};
//!
//! let json = r#"{ "bodies": [
//!     { "englishName": "Sun", "isPlanet": false, "meanRadius": 695508 },
//!     { "englishName": "Earth", "isPlanet": true, "meanRadius": 6371,
//!       "semimajorAxis": 149598023, "eccentricity": 0.0167, "sideralOrbit": 365.256 },
//!     { "englishName": "Moon", "isPlanet": false, "meanRadius": 1737 }
//! ] }"#;
//!
//! let catalog = adapter::catalog_from_response(json).unwrap();
//! assert_eq!(catalog.len(), 2);
//!
//! let earth = catalog.get("Earth").unwrap();
//! assert_eq!(earth.diameter, 12742.0);
//! assert!(catalog.get("Sun").unwrap().is_stationary());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Catalog, CatalogError, CelestialBody, KnownBody, PhysicalProperties};

/// The endpoint the records are usually fetched from.
pub const BODIES_ENDPOINT: &str = "https://api.le-systeme-solaire.net/rest/bodies/";

/// A number given as a mantissa and a power of ten.
///
/// The API uses this for values too large for plain JSON numbers,
/// such as masses and volumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaledValue {
    /// The mantissa.
    pub value: f64,

    /// The power of ten.
    pub exponent: i32,
}

impl ScaledValue {
    /// The plain value, `value · 10^exponent`.
    pub fn get(&self) -> f64 {
        self.value * 10f64.powi(self.exponent)
    }
}

/// A mass, in kilograms, as given by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalMass {
    /// The mantissa.
    pub mass_value: f64,
    /// The power of ten.
    pub mass_exponent: i32,
}

/// A volume, in cubic kilometers, as given by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalVolume {
    /// The mantissa.
    pub vol_value: f64,
    /// The power of ten.
    pub vol_exponent: i32,
}

impl From<ExternalMass> for ScaledValue {
    fn from(mass: ExternalMass) -> Self {
        ScaledValue {
            value: mass.mass_value,
            exponent: mass.mass_exponent,
        }
    }
}

impl From<ExternalVolume> for ScaledValue {
    fn from(volume: ExternalVolume) -> Self {
        ScaledValue {
            value: volume.vol_value,
            exponent: volume.vol_exponent,
        }
    }
}

/// A body record as returned by the API.
///
/// Every field is optional. Fields the API sends but this struct does not
/// list are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalBody {
    /// The API's identifier, usually the French name in lowercase.
    pub id: String,
    /// The French name.
    pub name: String,
    /// The English name. Preferred over `name` for display and lookups.
    pub english_name: String,
    /// Whether the API classifies the body as a planet.
    pub is_planet: bool,
    /// Surface gravity, in m/s².
    pub gravity: Option<f64>,
    /// Mean radius, in kilometers.
    pub mean_radius: Option<f64>,
    /// Semi-major axis, in kilometers.
    pub semimajor_axis: Option<f64>,
    /// Perihelion, in kilometers.
    pub perihelion: Option<f64>,
    /// Aphelion, in kilometers.
    pub aphelion: Option<f64>,
    /// Orbital eccentricity.
    pub eccentricity: Option<f64>,
    /// Orbital inclination, in degrees. Not used for positioning.
    pub inclination: Option<f64>,
    /// Sidereal orbital period, in days.
    pub sideral_orbit: Option<f64>,
    /// Sidereal rotation period, in hours.
    pub sideral_rotation: Option<f64>,
    /// Axial tilt, in degrees.
    pub axial_tilt: Option<f64>,
    /// Average temperature, in kelvin.
    pub avg_temp: Option<f64>,
    /// Mean anomaly, in degrees. Not used for positioning.
    pub main_anomaly: Option<f64>,
    /// Mass, in kilograms.
    pub mass: Option<ExternalMass>,
    /// Volume, in cubic kilometers.
    pub vol: Option<ExternalVolume>,
    /// Density, in g/cm³.
    pub density: Option<f64>,
    /// When the body was discovered, if it was.
    pub discovery_date: Option<String>,
    /// Who discovered the body, if anyone.
    pub discovered_by: Option<String>,
}

impl ExternalBody {
    /// The name used for display and catalog lookup.
    ///
    /// This is the English name, or the API name if the English name is blank.
    pub fn display_name(&self) -> &str {
        let english_name = self.english_name.trim();
        if english_name.is_empty() {
            self.name.trim()
        } else {
            english_name
        }
    }

    /// Whether the record is a planet or the Sun.
    ///
    /// The Sun is matched the same way [`adapt`] matches it, ignoring case.
    pub fn is_sun_or_planet(&self) -> bool {
        self.is_planet
            || KnownBody::from_name(self.display_name()).is_some_and(|body| body.is_stationary())
    }
}

/// The envelope the API wraps its records in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodiesResponse {
    /// The body records.
    #[serde(default)]
    pub bodies: Vec<ExternalBody>,
}

/// An error that can occur while reading an API response.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The response was not valid JSON, or did not match the schema.
    #[error("malformed bodies response: {0}")]
    Json(#[from] serde_json::Error),

    /// The adapted bodies could not form a catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Converts an external record into a [`CelestialBody`].
///
/// See the [module documentation](self) for the fallback rules.
pub fn adapt(record: &ExternalBody) -> CelestialBody {
    let name = record.display_name();
    let known = KnownBody::from_name(name);

    let diameter = match positive(record.mean_radius) {
        Some(radius) => 2.0 * radius,
        None => {
            warn!(body = name, "no usable mean radius, using a diameter of 0");
            0.0
        }
    };

    let physical = PhysicalProperties {
        gravity: record.gravity,
        avg_temp: record.avg_temp,
        mass: record.mass.map(|mass| ScaledValue::from(mass).get()),
        volume: record.vol.map(|vol| ScaledValue::from(vol).get()),
        density: record.density,
        axial_tilt: record.axial_tilt,
        sidereal_rotation: record.sideral_rotation,
        perihelion: record.perihelion,
        aphelion: record.aphelion,
    };

    if known.is_some_and(|body| body.is_stationary()) {
        debug!(body = name, "adapted stationary body");
        return CelestialBody::stationary(name, diameter).with_physical(physical);
    }

    let orbital_period = match positive(record.sideral_orbit) {
        Some(period) => period,
        None => {
            warn!(
                body = name,
                sideral_orbit = ?record.sideral_orbit,
                "no usable orbital period, falling back to 0 (stationary)"
            );
            0.0
        }
    };

    let eccentricity = match record.eccentricity {
        Some(e) if (0.0..1.0).contains(&e) => e,
        Some(e) => {
            warn!(body = name, eccentricity = e, "eccentricity out of range, using 0");
            0.0
        }
        None => {
            debug!(body = name, "no eccentricity, using a circular orbit");
            0.0
        }
    };

    let inclination = match known {
        Some(body) => body.inclination(),
        None => {
            debug!(body = name, "no reference inclination, using 0°");
            KnownBody::DEFAULT_INCLINATION
        }
    };

    let distance_from_sun = record
        .semimajor_axis
        .filter(|a| a.is_finite() && *a >= 0.0)
        .unwrap_or(0.0);

    debug!(
        body = name,
        diameter, distance_from_sun, orbital_period, eccentricity, inclination, "adapted body"
    );

    CelestialBody::new(
        name,
        diameter,
        distance_from_sun,
        orbital_period,
        eccentricity,
        inclination,
    )
    .with_physical(physical)
}

/// Parses an API response and keeps only the Sun and the planets.
pub fn parse_response(json: &str) -> Result<Vec<ExternalBody>, AdapterError> {
    let response: BodiesResponse = serde_json::from_str(json)?;
    let total = response.bodies.len();

    let bodies: Vec<ExternalBody> = response
        .bodies
        .into_iter()
        .filter(ExternalBody::is_sun_or_planet)
        .collect();

    debug!(total, kept = bodies.len(), "parsed bodies response");

    Ok(bodies)
}

/// Adapts a list of records into a catalog.
///
/// The records are not filtered; see [`parse_response`] for that.
pub fn catalog_from_records<'a>(
    records: impl IntoIterator<Item = &'a ExternalBody>,
) -> Result<Catalog, CatalogError> {
    Catalog::new(records.into_iter().map(adapt))
}

/// Parses an API response straight into a catalog of the Sun and the planets.
pub fn catalog_from_response(json: &str) -> Result<Catalog, AdapterError> {
    let records = parse_response(json)?;
    Ok(catalog_from_records(&records)?)
}
