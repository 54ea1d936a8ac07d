use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The bodies this crate has reference data for.
///
/// External data sources often leave out orbital inclination, so it is
/// supplied from this table instead. Bodies not listed here fall back to
/// generic defaults.
///
/// # Example
/// ```
/// use solar_orbits::KnownBody;
///
/// let mercury: KnownBody = "mercury".parse().unwrap();
/// assert_eq!(mercury.inclination(), 7.0);
/// assert_eq!(KnownBody::inclination_of("Ceres"), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownBody {
    /// The Sun. The only stationary known body.
    Sun,
    #[allow(missing_docs)]
    Mercury,
    #[allow(missing_docs)]
    Venus,
    #[allow(missing_docs)]
    Earth,
    #[allow(missing_docs)]
    Mars,
    #[allow(missing_docs)]
    Jupiter,
    #[allow(missing_docs)]
    Saturn,
    #[allow(missing_docs)]
    Uranus,
    #[allow(missing_docs)]
    Neptune,
    /// Pluto. Not a planet, but it has a well-known inclination.
    Pluto,
}

impl KnownBody {
    /// Every known body, Sun first, then in order of distance.
    pub const ALL: [KnownBody; 10] = [
        KnownBody::Sun,
        KnownBody::Mercury,
        KnownBody::Venus,
        KnownBody::Earth,
        KnownBody::Mars,
        KnownBody::Jupiter,
        KnownBody::Saturn,
        KnownBody::Uranus,
        KnownBody::Neptune,
        KnownBody::Pluto,
    ];

    /// The inclination used for bodies that are not in this table, in degrees.
    pub const DEFAULT_INCLINATION: f64 = 0.0;

    /// The display colour used for bodies that are not in this table.
    pub const DEFAULT_COLOR: &'static str = "#9E9E9E";

    /// The English name of the body.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Looks up a known body by name, ignoring ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(name))
    }

    /// Whether the body stays fixed at the origin.
    pub fn is_stationary(&self) -> bool {
        matches!(self, Self::Sun)
    }

    /// The inclination of the body's orbit relative to the ecliptic, in degrees.
    pub fn inclination(&self) -> f64 {
        match self {
            Self::Sun => 0.0,
            Self::Mercury => 7.0,
            Self::Venus => 3.39,
            Self::Earth => 0.0,
            Self::Mars => 1.85,
            Self::Jupiter => 1.31,
            Self::Saturn => 2.49,
            Self::Uranus => 0.77,
            Self::Neptune => 1.77,
            Self::Pluto => 17.16,
        }
    }

    /// The inclination for a body name, or
    /// [`DEFAULT_INCLINATION`][Self::DEFAULT_INCLINATION] if the name is unknown.
    pub fn inclination_of(name: &str) -> f64 {
        Self::from_name(name).map_or(Self::DEFAULT_INCLINATION, |body| body.inclination())
    }

    /// The display colour of the body, as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Sun => "#FDB813",
            Self::Mercury => "#A0522D",
            Self::Venus => "#DEB887",
            Self::Earth => "#4B6EAF",
            Self::Mars => "#CD5C5C",
            Self::Jupiter => "#DAA06D",
            Self::Saturn => "#F4C542",
            Self::Uranus => "#B2E2E2",
            Self::Neptune => "#5B5DDF",
            Self::Pluto => "#C2B280",
        }
    }
}

impl fmt::Display for KnownBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any [`KnownBody`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no known body is named {0:?}")]
pub struct UnknownBodyError(pub String);

impl FromStr for KnownBody {
    type Err = UnknownBodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownBodyError(s.to_string()))
    }
}
