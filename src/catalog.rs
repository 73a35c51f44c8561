//! Evaluation of listing parameters against in-memory entities.
//!
//! Mirrors what the listing endpoint does with a [`ListingParams`]: every
//! present parameter narrows the result (logical AND), then the matches are
//! sorted and sliced to the requested page.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::human::Human;
use crate::domain::listing::ListingPage;
use crate::domain::task::Task;
use crate::domain::types::{GeoPoint, SortKey};
use crate::query::ListingParams;

/// Fields of a listed entity the discovery filters look at.
pub trait Filterable {
    /// Text matched by the free-text search.
    fn searchable_text(&self) -> Vec<&str>;
    /// Category (tasks) or skills (humans).
    fn categories(&self) -> Vec<&str>;
    fn city(&self) -> &str;
    fn country(&self) -> &str;
    /// Budget or hourly rate compared against `max_rate`.
    fn rate(&self) -> f64;
    fn rating(&self) -> f64 {
        0.0
    }
    fn created_at(&self) -> DateTime<Utc>;
    fn location(&self) -> Option<GeoPoint>;
}

impl Filterable for Task {
    fn searchable_text(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ]
    }

    fn categories(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn rate(&self) -> f64 {
        self.budget
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}

impl Filterable for Human {
    fn searchable_text(&self) -> Vec<&str> {
        let mut text = vec![self.name.as_str(), self.headline.as_str()];
        text.extend(self.skills.iter().map(String::as_str));
        text
    }

    fn categories(&self) -> Vec<&str> {
        self.skills.iter().map(String::as_str).collect()
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn rate(&self) -> f64 {
        self.hourly_rate
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}

/// Case-insensitive substring containment.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn radius_filter(params: &ListingParams) -> Option<(GeoPoint, f64)> {
    let center = GeoPoint::new(params.user_lat?, params.user_lng?).ok()?;
    Some((center, f64::from(params.radius_km?)))
}

fn matches<T: Filterable>(item: &T, params: &ListingParams) -> bool {
    if let Some(search) = params.search.as_deref() {
        let found = item
            .searchable_text()
            .iter()
            .any(|text| contains_ignore_case(text, search));
        if !found {
            return false;
        }
    }

    if let Some(category) = params.category_filter() {
        let category = category.trim().to_lowercase();
        let found = item
            .categories()
            .iter()
            .any(|c| c.trim().to_lowercase() == category);
        if !found {
            return false;
        }
    }

    if let Some(city) = params.city.as_deref() {
        if !contains_ignore_case(item.city(), city) {
            return false;
        }
    }

    if let Some(country) = params.country.as_deref() {
        if !contains_ignore_case(item.country(), country) {
            return false;
        }
    }

    if params.max_rate.is_some_and(|max_rate| item.rate() > max_rate) {
        return false;
    }

    if let Some((center, radius_km)) = radius_filter(params) {
        return item
            .location()
            .is_some_and(|location| center.distance_km(&location) <= radius_km);
    }

    true
}

fn compare<T: Filterable>(a: &T, b: &T, sort: SortKey, center: Option<GeoPoint>) -> Ordering {
    match (sort, center) {
        (SortKey::Newest, _) => b.created_at().cmp(&a.created_at()),
        (SortKey::RateLow, _) => a.rate().total_cmp(&b.rate()),
        (SortKey::RateHigh, _) => b.rate().total_cmp(&a.rate()),
        (SortKey::Rating, _) => b.rating().total_cmp(&a.rating()),
        (SortKey::Distance, Some(center)) => {
            let distance = |item: &T| {
                item.location()
                    .map_or(f64::INFINITY, |location| center.distance_km(&location))
            };
            distance(a).total_cmp(&distance(b))
        }
        (SortKey::Distance, None) => b.created_at().cmp(&a.created_at()),
    }
}

/// Filters, sorts and pages `items` according to `params`.
pub fn evaluate<T: Filterable + Clone>(items: &[T], params: &ListingParams) -> ListingPage<T> {
    let mut matched: Vec<&T> = items.iter().filter(|item| matches(*item, params)).collect();

    let center = params
        .user_lat
        .zip(params.user_lng)
        .and_then(|(lat, lng)| GeoPoint::new(lat, lng).ok());
    matched.sort_by(|a, b| compare(*a, *b, params.sort, center));

    let total = matched.len();
    let items = matched
        .into_iter()
        .skip(params.offset)
        .take(params.limit)
        .cloned()
        .collect();

    ListingPage::new(items, total)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::domain::types::EntityId;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    fn human(name: &str, skills: &[&str], city: &str, rate: f64, rating: f64) -> Human {
        Human {
            id: EntityId::new(),
            name: name.to_string(),
            headline: format!("{name} gets things done"),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            city: city.to_string(),
            country: "United States".to_string(),
            hourly_rate: rate,
            rating,
            location: None,
            created_at: at(1),
        }
    }

    fn task(
        title: &str,
        category: &str,
        budget: f64,
        day: u32,
        location: Option<(f64, f64)>,
    ) -> Task {
        Task {
            id: EntityId::new(),
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            city: "Austin".to_string(),
            country: "US".to_string(),
            budget,
            location: location.map(|(lat, lng)| GeoPoint::new(lat, lng).unwrap()),
            created_at: at(day),
        }
    }

    fn params() -> ListingParams {
        ListingParams {
            limit: 16,
            ..ListingParams::default()
        }
    }

    #[test]
    fn string_filters_are_case_insensitive_substrings() {
        let humans = vec![
            human("Ana", &["delivery"], "San Francisco", 30.0, 4.5),
            human("Ben", &["cleaning"], "Austin", 25.0, 4.0),
        ];

        let page = evaluate(
            &humans,
            &ListingParams {
                city: Some("francisco".into()),
                country: Some("UNITED".into()),
                ..params()
            },
        );

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Ana");
    }

    #[test]
    fn all_filters_combine_with_and() {
        let humans = vec![
            human("Ana", &["delivery"], "Austin", 30.0, 4.5),
            human("Ben", &["delivery"], "Austin", 60.0, 4.0),
            human("Cal", &["cleaning"], "Austin", 20.0, 4.9),
            human("Dee", &["delivery"], "Dallas", 20.0, 3.0),
        ];

        let page = evaluate(
            &humans,
            &ListingParams {
                skill: Some("Delivery".into()),
                city: Some("austin".into()),
                max_rate: Some(30.0),
                ..params()
            },
        );

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Ana");
    }

    #[test]
    fn category_match_folds_non_ascii_case() {
        let tasks = vec![
            task("Espresso run", "Café", 10.0, 1, None),
            task("Latte run", "Cafeteria", 10.0, 2, None),
        ];

        let page = evaluate(
            &tasks,
            &ListingParams {
                category: Some(" CAFÉ ".into()),
                ..params()
            },
        );

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Espresso run");
    }

    #[test]
    fn max_rate_is_inclusive() {
        let humans = vec![
            human("Ana", &[], "Austin", 30.0, 4.5),
            human("Ben", &[], "Austin", 30.01, 4.0),
        ];

        let page = evaluate(
            &humans,
            &ListingParams {
                max_rate: Some(30.0),
                ..params()
            },
        );

        assert_eq!(page.total, 1);
    }

    #[test]
    fn search_looks_at_skills_and_headline() {
        let humans = vec![
            human("Ana", &["Furniture assembly"], "Austin", 30.0, 4.5),
            human("Ben", &["cleaning"], "Austin", 30.0, 4.0),
        ];

        let page = evaluate(
            &humans,
            &ListingParams {
                search: Some("ASSEMBLY".into()),
                ..params()
            },
        );

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Ana");
    }

    #[test]
    fn sorts_by_requested_key() {
        let humans = vec![
            human("Ana", &[], "Austin", 30.0, 4.1),
            human("Ben", &[], "Austin", 10.0, 4.9),
            human("Cal", &[], "Austin", 20.0, 3.2),
        ];

        let names = |sort| {
            evaluate(&humans, &ListingParams { sort, ..params() })
                .items
                .into_iter()
                .map(|h| h.name)
                .collect::<Vec<_>>()
        };

        assert_eq!(names(SortKey::RateLow), vec!["Ben", "Cal", "Ana"]);
        assert_eq!(names(SortKey::RateHigh), vec!["Ana", "Cal", "Ben"]);
        assert_eq!(names(SortKey::Rating), vec!["Ben", "Ana", "Cal"]);
    }

    #[test]
    fn newest_first_by_default() {
        let tasks = vec![
            task("old", "errands", 10.0, 1, None),
            task("new", "errands", 10.0, 9, None),
            task("mid", "errands", 10.0, 5, None),
        ];

        let page = evaluate(&tasks, &params());
        let titles: Vec<_> = page.items.iter().map(|t| t.title.as_str()).collect();

        assert_eq!(titles, vec!["new", "mid", "old"]);
        assert!(page.items[0].created_at - page.items[1].created_at > Duration::zero());
    }

    #[test]
    fn radius_excludes_far_and_unlocated_entities_and_sorts_by_distance() {
        let tasks = vec![
            task("dallas", "errands", 10.0, 1, Some((32.7767, -96.7970))),
            task("round rock", "errands", 10.0, 2, Some((30.5083, -97.6789))),
            task("downtown", "errands", 10.0, 3, Some((30.2672, -97.7431))),
            task("remote", "errands", 10.0, 4, None),
        ];

        let page = evaluate(
            &tasks,
            &ListingParams {
                sort: SortKey::Distance,
                user_lat: Some(30.2672),
                user_lng: Some(-97.7431),
                radius_km: Some(50),
                ..params()
            },
        );

        let titles: Vec<_> = page.items.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["downtown", "round rock"]);
    }

    #[test]
    fn pages_are_sliced_after_counting() {
        let tasks: Vec<_> = (1..=20)
            .map(|day| task(&format!("t{day}"), "errands", 10.0, day, None))
            .collect();

        let page = evaluate(
            &tasks,
            &ListingParams {
                limit: 16,
                offset: 16,
                ..ListingParams::default()
            },
        );

        assert_eq!(page.total, 20);
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.items[0].title, "t4");
    }
}
