//! CSV row models for the catalog seed files.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::human::Human as DomainHuman;
use crate::domain::task::Task as DomainTask;
use crate::domain::types::{EntityId, GeoPoint, TypeConstraintError};

/// Separator between skills in the `skills` column.
pub const SKILL_SEPARATOR: char = ';';

#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub city: String,
    pub country: String,
    pub budget: f64,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HumanRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub skills: String,
    pub city: String,
    pub country: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub rating: f64,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

fn location(lat: Option<f64>, lng: Option<f64>) -> Result<Option<GeoPoint>, TypeConstraintError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => GeoPoint::new(lat, lng).map(Some),
        (None, None) => Ok(None),
        _ => Err(TypeConstraintError::InvalidValue(
            "lat and lng must be set together".to_string(),
        )),
    }
}

fn non_negative(value: f64, name: &str) -> Result<f64, TypeConstraintError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TypeConstraintError::InvalidValue(format!(
            "{name} must be a non-negative number"
        )))
    }
}

impl TryFrom<TaskRecord> for DomainTask {
    type Error = TypeConstraintError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EntityId::from(record.id),
            title: record.title.trim().to_string(),
            description: record.description.trim().to_string(),
            category: record.category.trim().to_string(),
            city: record.city.trim().to_string(),
            country: record.country.trim().to_string(),
            budget: non_negative(record.budget, "budget")?,
            location: location(record.lat, record.lng)?,
            created_at: record.created_at,
        })
    }
}

impl TryFrom<HumanRecord> for DomainHuman {
    type Error = TypeConstraintError;

    fn try_from(record: HumanRecord) -> Result<Self, Self::Error> {
        let skills = record
            .skills
            .split(SKILL_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            id: EntityId::from(record.id),
            name: record.name.trim().to_string(),
            headline: record.headline.trim().to_string(),
            skills,
            city: record.city.trim().to_string(),
            country: record.country.trim().to_string(),
            hourly_rate: non_negative(record.hourly_rate, "hourly_rate")?,
            rating: non_negative(record.rating, "rating")?.min(5.0),
            location: location(record.lat, record.lng)?,
            created_at: record.created_at,
        })
    }
}
