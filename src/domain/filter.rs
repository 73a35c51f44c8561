//! Filter dimensions shared by the browse views.

use serde::{Deserialize, Serialize};

use crate::domain::types::{DEFAULT_RADIUS_KM, GeoPoint, RadiusKm, SortKey};

/// Current set of independent filter dimensions.
///
/// Every field has a "no filter" value (empty string, `None` or
/// [`RadiusKm::Anywhere`]); all set dimensions combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    /// Task category or worker skill. Empty means "all".
    pub category: String,
    pub city: String,
    pub country: String,
    /// Raw maximum rate input; parsed lazily by the query builder.
    pub max_rate: String,
    pub sort_key: SortKey,
    pub radius: RadiusKm,
    pub geo_center: Option<GeoPoint>,
    /// Set when [`FilterState::enable_geo`] replaced an `Anywhere` radius.
    #[serde(skip)]
    pub(crate) radius_forced_by_geo: bool,
}

/// Names of the filter dimensions, used for clearing a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    SearchText,
    Category,
    City,
    Country,
    MaxRate,
    SortKey,
    Radius,
    GeoCenter,
}

impl FilterField {
    pub const ALL: [FilterField; 8] = [
        FilterField::SearchText,
        FilterField::Category,
        FilterField::City,
        FilterField::Country,
        FilterField::MaxRate,
        FilterField::SortKey,
        FilterField::Radius,
        FilterField::GeoCenter,
    ];

    /// Whether a change of this dimension sends the user back to page 1.
    pub const fn resets_page(&self) -> bool {
        !matches!(self, FilterField::SortKey)
    }
}

/// A single-dimension update.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    SearchText(String),
    Category(String),
    City(String),
    Country(String),
    MaxRate(String),
    SortKey(SortKey),
    Radius(RadiusKm),
    GeoCenter(Option<GeoPoint>),
}

impl FilterUpdate {
    pub const fn field(&self) -> FilterField {
        match self {
            FilterUpdate::SearchText(_) => FilterField::SearchText,
            FilterUpdate::Category(_) => FilterField::Category,
            FilterUpdate::City(_) => FilterField::City,
            FilterUpdate::Country(_) => FilterField::Country,
            FilterUpdate::MaxRate(_) => FilterField::MaxRate,
            FilterUpdate::SortKey(_) => FilterField::SortKey,
            FilterUpdate::Radius(_) => FilterField::Radius,
            FilterUpdate::GeoCenter(_) => FilterField::GeoCenter,
        }
    }
}

/// Outcome of mutating the filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterChange {
    pub changed: bool,
    pub resets_page: bool,
}

impl FilterChange {
    fn merge(self, other: FilterChange) -> FilterChange {
        FilterChange {
            changed: self.changed || other.changed,
            resets_page: self.resets_page || other.resets_page,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T, field: FilterField) -> FilterChange {
    if *slot == value {
        return FilterChange::default();
    }
    *slot = value;
    FilterChange {
        changed: true,
        resets_page: field.resets_page(),
    }
}

impl FilterState {
    /// Updates one dimension.
    pub fn set_field(&mut self, update: FilterUpdate) -> FilterChange {
        let field = update.field();
        match update {
            FilterUpdate::SearchText(value) => replace(&mut self.search_text, value, field),
            FilterUpdate::Category(value) => replace(&mut self.category, value, field),
            FilterUpdate::City(value) => replace(&mut self.city, value, field),
            FilterUpdate::Country(value) => replace(&mut self.country, value, field),
            FilterUpdate::MaxRate(value) => replace(&mut self.max_rate, value, field),
            FilterUpdate::SortKey(value) => replace(&mut self.sort_key, value, field),
            FilterUpdate::Radius(value) => {
                self.radius_forced_by_geo = false;
                replace(&mut self.radius, value, field)
            }
            FilterUpdate::GeoCenter(Some(center)) => {
                replace(&mut self.geo_center, Some(center), field)
            }
            FilterUpdate::GeoCenter(None) => {
                let change = replace(&mut self.geo_center, None, field);
                if self.radius_forced_by_geo {
                    self.radius_forced_by_geo = false;
                    return change.merge(replace(
                        &mut self.radius,
                        RadiusKm::Anywhere,
                        FilterField::Radius,
                    ));
                }
                change
            }
        }
    }

    /// Resets one dimension to its "no filter" value.
    pub fn clear_field(&mut self, field: FilterField) -> FilterChange {
        let update = match field {
            FilterField::SearchText => FilterUpdate::SearchText(String::new()),
            FilterField::Category => FilterUpdate::Category(String::new()),
            FilterField::City => FilterUpdate::City(String::new()),
            FilterField::Country => FilterUpdate::Country(String::new()),
            FilterField::MaxRate => FilterUpdate::MaxRate(String::new()),
            FilterField::SortKey => FilterUpdate::SortKey(SortKey::default()),
            FilterField::Radius => FilterUpdate::Radius(RadiusKm::Anywhere),
            FilterField::GeoCenter => FilterUpdate::GeoCenter(None),
        };
        self.set_field(update)
    }

    /// Resets every dimension.
    pub fn clear_all(&mut self) -> FilterChange {
        FilterField::ALL
            .iter()
            .fold(FilterChange::default(), |acc, field| {
                acc.merge(self.clear_field(*field))
            })
    }

    /// Turns geo search on around `center`.
    ///
    /// A radius of `Anywhere` is replaced with [`DEFAULT_RADIUS_KM`] so the
    /// center actually constrains the results. That replacement is undone
    /// by [`FilterState::disable_geo`] unless the user picks a radius in
    /// between.
    pub fn enable_geo(&mut self, center: GeoPoint) -> FilterChange {
        let mut change = self.set_field(FilterUpdate::GeoCenter(Some(center)));
        if self.radius.is_anywhere() {
            change = change.merge(replace(
                &mut self.radius,
                RadiusKm::Km(DEFAULT_RADIUS_KM),
                FilterField::Radius,
            ));
            self.radius_forced_by_geo = true;
        }
        change
    }

    /// Turns geo search off, restoring the radius `enable_geo` replaced.
    /// The stored sort key is left untouched.
    pub fn disable_geo(&mut self) -> FilterChange {
        self.clear_field(FilterField::GeoCenter)
    }

    /// Center and radius when a radius search is in effect.
    pub fn geo_search(&self) -> Option<(GeoPoint, u32)> {
        match (self.geo_center, self.radius) {
            (Some(center), RadiusKm::Km(km)) => Some((center, km)),
            _ => None,
        }
    }

    /// Sort key actually sent to the listing endpoint.
    ///
    /// A radius search always sorts by distance. Without one, a stored
    /// `Distance` key has nothing to measure from and falls back to the
    /// default ordering.
    pub fn effective_sort(&self) -> SortKey {
        match (self.geo_search(), self.sort_key) {
            (Some(_), _) => SortKey::Distance,
            (None, SortKey::Distance) => SortKey::default(),
            (None, key) => key,
        }
    }
}
