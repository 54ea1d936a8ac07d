use core::fmt;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use glam::DVec3;
use tracing::{debug, error};

use crate::{body_presets, CelestialBody, PositionEngine};

/// The read-only table of bodies a renderer works from.
///
/// Bodies keep the order they were given in. Names are unique, so they
/// double as lookup keys.
///
/// A catalog is built once and never changes afterwards; it only hands
/// out shared references.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    /// The bodies, in insertion order.
    bodies: Vec<CelestialBody>,

    /// Index into `bodies` by name.
    index: HashMap<String, usize>,
}

/// An error that can occur while building a [`Catalog`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two bodies share the same name.
    #[error("there is more than one body named {0:?}")]
    DuplicateName(String),
}

impl Catalog {
    /// Creates a catalog from a list of bodies.
    ///
    /// Returns an error if two bodies share a name.
    pub fn new(bodies: impl IntoIterator<Item = CelestialBody>) -> Result<Catalog, CatalogError> {
        let bodies: Vec<CelestialBody> = bodies.into_iter().collect();
        let mut index = HashMap::with_capacity(bodies.len());

        for (i, body) in bodies.iter().enumerate() {
            if index.insert(body.name().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateName(body.name().to_string()));
            }
        }

        debug!(bodies = bodies.len(), "built body catalog");

        Ok(Catalog { bodies, index })
    }

    /// Creates a catalog that keeps only the first body of each name.
    pub(crate) fn first_of_each_name(
        bodies: impl IntoIterator<Item = CelestialBody>,
    ) -> Catalog {
        let mut unique = Vec::new();
        let mut index = HashMap::new();

        for body in bodies {
            if !index.contains_key(body.name()) {
                index.insert(body.name().to_string(), unique.len());
                unique.push(body);
            }
        }

        debug!(bodies = unique.len(), "built deduplicated body catalog");

        Catalog {
            bodies: unique,
            index,
        }
    }

    /// Creates the built-in solar system catalog.
    ///
    /// See [`body_presets::solar_system`].
    pub fn builtin() -> Catalog {
        match Catalog::new(body_presets::solar_system()) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!(%err, "built-in bodies are not unique, keeping the first of each name");
                Catalog::first_of_each_name(body_presets::solar_system())
            }
        }
    }

    /// Gets a body by name.
    pub fn get(&self, name: &str) -> Option<&CelestialBody> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    /// Gets all bodies, in order.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Iterates over all bodies, in order.
    pub fn iter(&self) -> core::slice::Iter<'_, CelestialBody> {
        self.bodies.iter()
    }

    /// The number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Gets the position of every body at an instant.
    pub fn positions_at<'a>(
        &'a self,
        engine: &'a PositionEngine,
        instant: DateTime<Utc>,
    ) -> impl Iterator<Item = (&'a CelestialBody, DVec3)> + 'a {
        self.bodies
            .iter()
            .map(move |body| (body, engine.position_at_instant(body, instant)))
    }

    /// Gets the orbit path of every body that should have its orbit drawn.
    ///
    /// Paths use the engine's configured segment count.
    pub fn orbit_paths<'a>(
        &'a self,
        engine: &'a PositionEngine,
    ) -> impl Iterator<Item = (&'a CelestialBody, Vec<DVec3>)> + 'a {
        self.bodies
            .iter()
            .filter(|body| body.show_orbit)
            .map(move |body| (body, engine.default_orbit_path(body)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CelestialBody;
    type IntoIter = core::slice::Iter<'a, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Catalog with {} bodies", self.bodies.len())
    }
}
