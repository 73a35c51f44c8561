//! Listing envelopes shared by the endpoint and its clients.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, TypeConstraintError};

/// Which marketplace entities are being browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Tasks,
    Humans,
}

impl ListingKind {
    /// Path segment of the listing endpoint.
    pub const fn path(&self) -> &'static str {
        match self {
            ListingKind::Tasks => "tasks",
            ListingKind::Humans => "humans",
        }
    }
}

impl Display for ListingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ListingKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tasks" => Ok(ListingKind::Tasks),
            "humans" => Ok(ListingKind::Humans),
            other => Err(TypeConstraintError::UnknownListingKind(other.to_string())),
        }
    }
}

/// Anything that can appear in a result set.
pub trait Listing {
    fn id(&self) -> EntityId;
}

/// One page of listed entities with the total count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListingPage<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }
}

impl<T> Default for ListingPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// The two response shapes the listing endpoint is known to return.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingResponse<T> {
    Paged { items: Vec<T>, total: usize },
    Bare(Vec<T>),
}

impl<T> From<ListingResponse<T>> for ListingPage<T> {
    /// A bare array carries no total, so its length is the total.
    fn from(response: ListingResponse<T>) -> Self {
        match response {
            ListingResponse::Paged { items, total } => ListingPage { items, total },
            ListingResponse::Bare(items) => {
                let total = items.len();
                ListingPage { items, total }
            }
        }
    }
}

/// Change pushed by the realtime channel for a listed entity.
#[derive(Debug, Clone, PartialEq)]
pub enum RealtimeEvent<T> {
    Insert(T),
    Update(T),
    Delete(EntityId),
}
