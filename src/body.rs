use serde::{Deserialize, Serialize};

use crate::{KnownBody, Orbit, OrbitTrait};

/// Physical properties carried along for display.
///
/// None of these affect position computation. Any of them may be missing
/// when the body comes from an external source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalProperties {
    /// Surface gravity, in m/s².
    pub gravity: Option<f64>,

    /// Average surface temperature, in kelvin.
    pub avg_temp: Option<f64>,

    /// Mass, in kilograms.
    pub mass: Option<f64>,

    /// Volume, in cubic kilometers.
    pub volume: Option<f64>,

    /// Mean density, in g/cm³.
    pub density: Option<f64>,

    /// Axial tilt, in degrees.
    pub axial_tilt: Option<f64>,

    /// Sidereal rotation period, in hours.
    pub sidereal_rotation: Option<f64>,

    /// Closest distance to the Sun, in kilometers.
    pub perihelion: Option<f64>,

    /// Furthest distance from the Sun, in kilometers.
    pub aphelion: Option<f64>,
}

/// A struct representing a celestial body.
///
/// Bodies are plain values: once built they are never mutated, and
/// every position query produces a fresh coordinate.
///
/// The name and orbital elements decide whether the body is stationary,
/// so they are only readable through getters. Display fields stay public.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "BodyRecord")]
pub struct CelestialBody {
    name: String,

    /// The diameter of the celestial body, in kilometers.
    pub diameter: f64,

    distance_from_sun: f64,
    orbital_period: f64,
    eccentricity: f64,
    inclination: f64,

    /// The display colour, as a CSS colour string.
    pub color: String,

    /// Whether a renderer should draw this body's orbit.
    pub show_orbit: bool,

    /// Display-only physical data.
    pub physical: PhysicalProperties,

    #[serde(skip)]
    is_stationary: bool,
}

/// The serialized form of a [`CelestialBody`].
///
/// Deserialization goes through [`CelestialBody::new`], so the stationary
/// flag is always derived from the elements and never read from input.
#[derive(Deserialize)]
struct BodyRecord {
    name: String,
    diameter: f64,
    distance_from_sun: f64,
    orbital_period: f64,
    eccentricity: f64,
    inclination: f64,
    color: Option<String>,
    show_orbit: Option<bool>,
    #[serde(default)]
    physical: PhysicalProperties,
}

impl From<BodyRecord> for CelestialBody {
    fn from(record: BodyRecord) -> Self {
        let mut body = CelestialBody::new(
            record.name,
            record.diameter,
            record.distance_from_sun,
            record.orbital_period,
            record.eccentricity,
            record.inclination,
        )
        .with_physical(record.physical);

        if let Some(color) = record.color {
            body.color = color;
        }
        if let Some(show_orbit) = record.show_orbit {
            body.show_orbit = show_orbit;
        }

        body
    }
}

impl CelestialBody {
    /// Creates a new `CelestialBody` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the celestial body.
    /// * `diameter` - The diameter of the body, in kilometers.
    /// * `distance_from_sun` - The semi-major axis of the orbit, in kilometers.
    /// * `orbital_period` - The sidereal period, in Earth days.
    /// * `eccentricity` - The eccentricity of the orbit.
    /// * `inclination` - The inclination of the orbit, in degrees.
    ///
    /// # Stationary bodies
    ///
    /// The body is marked stationary if it is the Sun or if its orbital
    /// period is not positive (or NaN). This is decided once here, and never
    /// re-derived by the position code.
    ///
    /// # Returns
    ///
    /// A new `CelestialBody` with the known body's colour (or a neutral
    /// grey), no physical data, and `show_orbit` set for orbiting bodies.
    pub fn new(
        name: impl Into<String>,
        diameter: f64,
        distance_from_sun: f64,
        orbital_period: f64,
        eccentricity: f64,
        inclination: f64,
    ) -> Self {
        let name = name.into();
        let known = KnownBody::from_name(&name);
        let is_stationary = known.is_some_and(|body| body.is_stationary())
            || orbital_period.is_nan()
            || orbital_period <= 0.0;

        Self {
            color: known
                .map_or(KnownBody::DEFAULT_COLOR, |body| body.color())
                .to_string(),
            name,
            diameter,
            distance_from_sun,
            orbital_period,
            eccentricity,
            inclination,
            show_orbit: !is_stationary,
            physical: PhysicalProperties::default(),
            is_stationary,
        }
    }

    /// Creates a body that sits at the origin, like the Sun.
    ///
    /// Orbital elements are all zero.
    pub fn stationary(name: impl Into<String>, diameter: f64) -> Self {
        Self::new(name, diameter, 0.0, 0.0, 0.0, 0.0)
    }

    /// Sets the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets whether the orbit should be drawn.
    #[must_use]
    pub fn with_show_orbit(mut self, show_orbit: bool) -> Self {
        self.show_orbit = show_orbit;
        self
    }

    /// Attaches display-only physical data.
    #[must_use]
    pub fn with_physical(mut self, physical: PhysicalProperties) -> Self {
        self.physical = physical;
        self
    }

    /// The name of the body. Unique within a [`Catalog`][crate::Catalog].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The semi-major axis of the body's orbit, in kilometers.
    pub fn distance_from_sun(&self) -> f64 {
        self.distance_from_sun
    }

    /// The sidereal orbital period, in Earth days.
    ///
    /// Zero for bodies that do not orbit, like the Sun.
    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    /// The eccentricity of the orbit, in `[0, 1)`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// The inclination of the orbital plane, in degrees.
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// The known body this body corresponds to, if any.
    pub fn known_body(&self) -> Option<KnownBody> {
        KnownBody::from_name(&self.name)
    }

    /// The radius of the body, in kilometers.
    pub fn radius(&self) -> f64 {
        self.diameter * 0.5
    }

    /// Copies out just the orbital elements.
    pub fn orbit(&self) -> Orbit {
        if self.is_stationary {
            Orbit::stationary()
        } else {
            Orbit::new(
                self.distance_from_sun,
                self.eccentricity,
                self.inclination,
                self.orbital_period,
            )
        }
    }
}

impl OrbitTrait for CelestialBody {
    fn get_semi_major_axis(&self) -> f64 {
        self.distance_from_sun
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
        self.is_stationary
    }
}

impl Default for CelestialBody {
    /// Creates a default `CelestialBody` instance.
    ///
    /// Currently, this function returns the Earth.
    /// However, do not rely on this behavior, as it may change in the future.
    fn default() -> Self {
        crate::body_presets::planets::earth()
    }
}
