//! Request payloads accepted by the listing endpoint.

use thiserror::Error;
use validator::ValidationErrors;

pub mod listing;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("malformed query string: {0}")]
    Malformed(#[from] serde::de::value::Error),

    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("user_lat, user_lng and radius_km must be sent together")]
    IncompleteGeoSearch,
}
