//! The seam between the discovery pipeline and whatever serves listings.

use std::time::Duration;

use thiserror::Error;

use crate::domain::listing::{ListingKind, ListingPage};
use crate::query::ListingParams;

/// Errors raised while fetching a page of listings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("listing endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was neither a bare array nor `{ items, total }`.
    #[error("failed to decode listing response: {0}")]
    Decode(String),

    /// The parameters could not be encoded into a request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The local deadline elapsed before the request finished.
    #[error("request timed out after {} seconds", .0.as_secs())]
    TimedOut(Duration),
}

impl FetchError {
    /// Returns a user-friendly message suitable for an error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Could not reach irlwork. Check your connection and try again.",
            Self::Status { status, .. } if *status >= 500 => {
                "The server had a problem loading results. Please try again."
            }
            Self::Status { .. } | Self::InvalidRequest(_) => {
                "These filters could not be applied. Adjust them and try again."
            }
            Self::Decode(_) => "Received an unexpected response from the server.",
            Self::TimedOut(_) => "The request timed out. Please try again.",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }
}

/// Anything able to serve a page of listings for the given parameters.
#[allow(async_fn_in_trait)]
pub trait ListingSource<T> {
    async fn fetch(
        &self,
        kind: ListingKind,
        params: &ListingParams,
    ) -> Result<ListingPage<T>, FetchError>;
}
