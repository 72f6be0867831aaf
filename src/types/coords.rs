//! Geographic coordinates for workout locations

use serde::{Deserialize, Serialize};

use crate::{JournalError, Result};

/// A latitude/longitude pair in floating-point degrees.
///
/// Both components are guaranteed finite; construction goes through
/// [`LatLng::new`]. The wire form is a two-element `[lat, lng]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Create a coordinate pair, rejecting non-finite components.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() {
            return Err(JournalError::validation("latitude", "finite degrees", lat));
        }
        if !lng.is_finite() {
            return Err(JournalError::validation("longitude", "finite degrees", lng));
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(coords: LatLng) -> Self {
        [coords.lat, coords.lng]
    }
}

impl TryFrom<[f64; 2]> for LatLng {
    type Error = JournalError;

    fn try_from([lat, lng]: [f64; 2]) -> Result<Self> {
        LatLng::new(lat, lng)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}
