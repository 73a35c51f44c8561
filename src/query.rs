//! Serialization of the filter state into listing endpoint parameters.

use serde::{Deserialize, Serialize};

use crate::domain::filter::FilterState;
use crate::domain::listing::ListingKind;
use crate::domain::types::{SortKey, parse_max_rate};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Flat GET parameter set understood by the listing endpoint.
///
/// Absent fields are left out of the query string entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingParams {
    pub limit: usize,
    pub offset: usize,
    pub sort: SortKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ITEMS_PER_PAGE,
            offset: 0,
            sort: SortKey::default(),
            category: None,
            skill: None,
            city: None,
            country: None,
            max_rate: None,
            user_lat: None,
            user_lng: None,
            radius_km: None,
            search: None,
        }
    }
}

impl ListingParams {
    /// Renders the parameters as a URL query string.
    pub fn to_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }

    /// Category or skill, whichever the listing kind uses.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().or(self.skill.as_deref())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Builds the request parameters for `current_page` of the given listing.
///
/// Never fails: dimensions at their "no filter" value and malformed numeric
/// input are simply omitted. A page of zero is treated as page 1.
pub fn build_query(
    kind: ListingKind,
    filter: &FilterState,
    current_page: usize,
    items_per_page: usize,
) -> ListingParams {
    let page = current_page.max(1);

    let mut params = ListingParams {
        limit: items_per_page,
        offset: (page - 1).saturating_mul(items_per_page),
        sort: filter.effective_sort(),
        search: non_empty(&filter.search_text),
        country: non_empty(&filter.country),
        max_rate: parse_max_rate(&filter.max_rate),
        ..ListingParams::default()
    };

    let category = non_empty(&filter.category);
    match kind {
        ListingKind::Tasks => params.category = category,
        ListingKind::Humans => params.skill = category,
    }

    // "anywhere" means ignore location entirely, including a typed city.
    if !filter.radius.is_anywhere() {
        params.city = non_empty(&filter.city);
    }

    if let Some((center, radius_km)) = filter.geo_search() {
        params.user_lat = Some(center.lat());
        params.user_lng = Some(center.lng());
        params.radius_km = Some(radius_km);
    }

    params
}
