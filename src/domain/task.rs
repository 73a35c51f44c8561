use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::listing::Listing;
use crate::domain::types::{EntityId, GeoPoint};

/// A real-world task posted by an agent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub city: String,
    pub country: String,
    /// Budget offered for the task, in USD.
    pub budget: f64,
    pub location: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
}

impl Listing for Task {
    fn id(&self) -> EntityId {
        self.id
    }
}
