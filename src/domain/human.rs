use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::listing::Listing;
use crate::domain::types::{EntityId, GeoPoint};

/// A worker profile available for hire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Human {
    pub id: EntityId,
    pub name: String,
    pub headline: String,
    pub skills: Vec<String>,
    pub city: String,
    pub country: String,
    /// Hourly rate, in USD.
    pub hourly_rate: f64,
    /// Average review score in `[0, 5]`.
    pub rating: f64,
    pub location: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
}

impl Listing for Human {
    fn id(&self) -> EntityId {
        self.id
    }
}
