//! Name-keyed graph node.
//!
//! A `Location` is identified by its name alone.  Coordinates are an
//! optional payload carried for drawing; two locations with the same name
//! but different coordinates are the same node.
//!
//! `Eq`, `Hash` and `Ord` all look only at the name, and `Location`
//! implements `Borrow<str>`, so any map keyed by `Location` can be queried
//! with a bare `&str`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::GeoPoint;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    name:        String,
    coordinates: Option<GeoPoint>,
}

impl Location {
    /// A location with no coordinates.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), coordinates: None }
    }

    pub fn with_coordinates(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name:        name.into(),
            coordinates: Some(GeoPoint::new(latitude, longitude)),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|p| p.lat)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|p| p.lon)
    }

    /// Straight-line distance to `other`, when both carry coordinates.
    pub fn distance_km(&self, other: &Location) -> Option<f64> {
        Some(self.coordinates?.distance_km(other.coordinates?))
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Location {}

impl PartialEq<str> for Location {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Location {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl Hash for Location {
    // Must agree with `str::hash` for the `Borrow<str>` lookups.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.as_str().hash(state);
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Location::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Location::new(name)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
