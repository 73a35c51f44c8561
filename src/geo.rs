//! Device location lookup for radius search.
//!
//! Location is an optional enhancement: every failure is logged and swallowed,
//! leaving the filter state exactly as it was.

use std::time::Duration;

use thiserror::Error;

use crate::domain::filter::FilterChange;
use crate::domain::listing::Listing;
use crate::domain::types::GeoPoint;
use crate::pipeline::DiscoveryPipeline;

/// How long a location lookup may take before it is abandoned.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location unavailable: {0}")]
    Unavailable(String),
    #[error("location lookup timed out")]
    Timeout,
    #[error("location is not supported on this device")]
    Unsupported,
}

/// Permission-gated source of the current position.
#[allow(async_fn_in_trait)]
pub trait GeoLocator {
    async fn current_position(&self) -> Result<GeoPoint, GeoError>;
}

/// Locator returning a configured position, e.g. a user's saved home base.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub GeoPoint);

impl GeoLocator for FixedLocator {
    async fn current_position(&self) -> Result<GeoPoint, GeoError> {
        Ok(self.0)
    }
}

/// Locator for hosts without any location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocator;

impl GeoLocator for UnavailableLocator {
    async fn current_position(&self) -> Result<GeoPoint, GeoError> {
        Err(GeoError::Unsupported)
    }
}

/// Asks `locator` for a position, giving up after `deadline`.
///
/// Never fails: denial, timeouts and missing support all yield `None`.
pub async fn request_location<L>(locator: &L, deadline: Duration) -> Option<GeoPoint>
where
    L: GeoLocator + ?Sized,
{
    let result = tokio::time::timeout(deadline, locator.current_position())
        .await
        .unwrap_or(Err(GeoError::Timeout));

    match result {
        Ok(point) => Some(point),
        Err(err) => {
            log::warn!("Geo search unavailable: {err}");
            None
        }
    }
}

impl<T: Listing + Clone> DiscoveryPipeline<T> {
    /// Switches geo search on around the located position, if any.
    pub async fn locate<L>(&mut self, locator: &L, deadline: Duration) -> FilterChange
    where
        L: GeoLocator + ?Sized,
    {
        match request_location(locator, deadline).await {
            Some(center) => self.enable_geo(center),
            None => FilterChange::default(),
        }
    }
}
