use serde::Deserialize;
use validator::Validate;

use crate::domain::types::SortKey;
use crate::forms::FormError;
use crate::query::ListingParams;

#[derive(Debug, Deserialize, Validate)]
/// Query string accepted by `GET /api/v1/{tasks,humans}`.
pub struct ListingRequest {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub sort: SortKey,
    pub category: Option<String>,
    pub skill: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[validate(range(min = 0.0))]
    pub max_rate: Option<f64>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub user_lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub user_lng: Option<f64>,
    #[validate(range(min = 1, max = 20000))]
    pub radius_km: Option<u32>,
    #[validate(length(max = 200))]
    pub search: Option<String>,
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl ListingRequest {
    /// Parses a raw query string such as `limit=16&city=Austin`.
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        let request: ListingRequest =
            serde_html_form::from_str(query).map_err(FormError::Malformed)?;
        Ok(request)
    }

    /// Validates the request and converts it into listing parameters.
    ///
    /// `default_limit` is used when the caller did not send `limit`.
    pub fn into_params(self, default_limit: usize) -> Result<ListingParams, FormError> {
        self.validate()?;

        let geo = [
            self.user_lat.is_some(),
            self.user_lng.is_some(),
            self.radius_km.is_some(),
        ];
        if geo.iter().any(|set| *set) && !geo.iter().all(|set| *set) {
            return Err(FormError::IncompleteGeoSearch);
        }

        Ok(ListingParams {
            limit: self.limit.unwrap_or(default_limit),
            offset: self.offset,
            sort: self.sort,
            category: normalize(self.category),
            skill: normalize(self.skill),
            city: normalize(self.city),
            country: normalize(self.country),
            max_rate: self.max_rate,
            user_lat: self.user_lat,
            user_lng: self.user_lng,
            radius_km: self.radius_km,
            search: normalize(self.search),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

    #[test]
    fn missing_paging_uses_defaults() {
        let params = ListingRequest::from_query("")
            .unwrap()
            .into_params(DEFAULT_ITEMS_PER_PAGE)
            .unwrap();

        assert_eq!(params.limit, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(params.offset, 0);
        assert_eq!(params.sort, SortKey::Newest);
    }

    #[test]
    fn parses_every_parameter() {
        let params = ListingRequest::from_query(
            "limit=10&offset=20&sort=distance&skill=Dog+walking&city=Austin&country=US\
             &max_rate=45.5&user_lat=30.25&user_lng=-97.75&radius_km=25&search=weekend",
        )
        .unwrap()
        .into_params(DEFAULT_ITEMS_PER_PAGE)
        .unwrap();

        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 20);
        assert_eq!(params.sort, SortKey::Distance);
        assert_eq!(params.skill.as_deref(), Some("Dog walking"));
        assert_eq!(params.max_rate, Some(45.5));
        assert_eq!(params.radius_km, Some(25));
        assert_eq!(params.search.as_deref(), Some("weekend"));
    }

    #[test]
    fn blank_text_filters_are_dropped() {
        let params = ListingRequest::from_query("city=++&search=")
            .unwrap()
            .into_params(DEFAULT_ITEMS_PER_PAGE)
            .unwrap();

        assert_eq!(params.city, None);
        assert_eq!(params.search, None);
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        for query in [
            "limit=0",
            "limit=101",
            "max_rate=-1",
            "user_lat=91&user_lng=0&radius_km=5",
            "user_lat=0&user_lng=0&radius_km=0",
        ] {
            let result = ListingRequest::from_query(query)
                .unwrap()
                .into_params(DEFAULT_ITEMS_PER_PAGE);
            assert!(
                matches!(result, Err(FormError::Validation(_))),
                "{query} should fail validation"
            );
        }
    }

    #[test]
    fn partial_geo_search_is_rejected() {
        let result = ListingRequest::from_query("user_lat=30&user_lng=-97")
            .unwrap()
            .into_params(DEFAULT_ITEMS_PER_PAGE);

        assert!(matches!(result, Err(FormError::IncompleteGeoSearch)));
    }

    #[test]
    fn unknown_sort_is_malformed() {
        let result = ListingRequest::from_query("sort=cheapest");

        assert!(matches!(result, Err(FormError::Malformed(_))));
    }
}
