//! Strongly-typed value objects used by the discovery domain.
//!
//! These wrappers enforce basic invariants (valid coordinates, known sort
//! keys, well-formed identifiers) so that once a value reaches the filter
//! state or the query builder it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// Radius applied when geo search is switched on without an explicit radius.
pub const DEFAULT_RADIUS_KM: u32 = 25;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Latitude outside `[-90, 90]` or not finite.
    #[error("latitude must be within [-90, 90]")]
    InvalidLatitude,
    /// Longitude outside `[-180, 180]` or not finite.
    #[error("longitude must be within [-180, 180]")]
    InvalidLongitude,
    /// Radius of zero kilometres.
    #[error("radius must be greater than zero")]
    NonPositiveRadius,
    /// Unknown sort key.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    /// Unknown listing kind.
    #[error("unknown listing kind: {0}")]
    UnknownListingKind(String),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Identifier shared by tasks and humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Borrow the backing uuid.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s.trim()).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Constructs a point ensuring both coordinates are finite and in range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, TypeConstraintError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(TypeConstraintError::InvalidLatitude);
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(TypeConstraintError::InvalidLongitude);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// Ordering requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    RateLow,
    RateHigh,
    Rating,
    Distance,
}

impl SortKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::RateLow => "rate_low",
            SortKey::RateHigh => "rate_high",
            SortKey::Rating => "rating",
            SortKey::Distance => "distance",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(SortKey::Newest),
            "rate_low" => Ok(SortKey::RateLow),
            "rate_high" => Ok(SortKey::RateHigh),
            "rating" => Ok(SortKey::Rating),
            "distance" => Ok(SortKey::Distance),
            other => Err(TypeConstraintError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Search radius around the user's position.
///
/// `Anywhere` is the "no filter" sentinel and travels over the wire as the
/// literal string `anywhere`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RadiusKm {
    #[default]
    Anywhere,
    Km(u32),
}

impl RadiusKm {
    /// Builds a numeric radius, rejecting zero.
    pub fn km(value: u32) -> Result<Self, TypeConstraintError> {
        if value == 0 {
            Err(TypeConstraintError::NonPositiveRadius)
        } else {
            Ok(RadiusKm::Km(value))
        }
    }

    pub const fn is_anywhere(&self) -> bool {
        matches!(self, RadiusKm::Anywhere)
    }

    /// Numeric radius, if any.
    pub const fn as_km(&self) -> Option<u32> {
        match self {
            RadiusKm::Anywhere => None,
            RadiusKm::Km(km) => Some(*km),
        }
    }
}

impl Display for RadiusKm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RadiusKm::Anywhere => f.write_str("anywhere"),
            RadiusKm::Km(km) => write!(f, "{km}"),
        }
    }
}

impl FromStr for RadiusKm {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("anywhere") {
            return Ok(RadiusKm::Anywhere);
        }
        let km = trimmed
            .parse::<u32>()
            .map_err(|_| TypeConstraintError::InvalidValue(trimmed.to_string()))?;
        RadiusKm::km(km)
    }
}

impl Serialize for RadiusKm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RadiusKm::Anywhere => serializer.serialize_str("anywhere"),
            RadiusKm::Km(km) => serializer.serialize_u32(*km),
        }
    }
}

impl<'de> Deserialize<'de> for RadiusKm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(km) => RadiusKm::km(km).map_err(serde::de::Error::custom),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Parses a free-text maximum rate.
///
/// Empty, non-numeric, negative or non-finite input yields `None`, which the
/// query builder treats as "no filter".
pub fn parse_max_rate(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite() && *rate >= 0.0)
}
